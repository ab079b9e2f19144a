pub mod data;
pub mod flight;
pub mod trajectory;
pub mod validation;
