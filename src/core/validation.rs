use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid `{field}`: {reason}")]
pub struct InvalidParameter {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidParameter {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub fn ensure_positive(field: &'static str, value: f64) -> Result<(), InvalidParameter> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidParameter::new(
            field,
            format!("must be a finite value greater than zero, got {value}"),
        ))
    }
}

pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), InvalidParameter> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidParameter::new(
            field,
            format!("must be a finite value of zero or more, got {value}"),
        ))
    }
}
