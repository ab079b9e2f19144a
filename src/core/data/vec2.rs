use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` (radians, counter-clockwise from +x).
    #[must_use]
    pub fn from_heading(heading: f64) -> Self {
        Self {
            x: heading.cos(),
            y: heading.sin(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        (*self - other).length()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_distance_to() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);

        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Vec2::new(-3.5, 2.25);

        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_from_heading_is_unit_length() {
        let forward = Vec2::from_heading(0.0);
        let up = Vec2::from_heading(FRAC_PI_2);

        assert_eq!(forward, Vec2::new(1.0, 0.0));
        assert!((up.x).abs() < 1e-15);
        assert_eq!(up.y, 1.0);
        assert!((Vec2::from_heading(1.234).length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec2::new(1.0, -2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f64::INFINITY).is_finite());
        assert!(!Vec2::new(f64::NEG_INFINITY, f64::NAN).is_finite());
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Vec2::new(1.0, 2.0);
        a += Vec2::new(0.5, -1.0);

        assert_eq!(a, Vec2::new(1.5, 1.0));
        assert_eq!(a - Vec2::new(1.5, 1.0), Vec2::ZERO);
        assert_eq!(a * 2.0, Vec2::new(3.0, 2.0));
    }
}
