//! Input adapters that turn user input into flight controls.

#[cfg(feature = "gui")]
pub mod gui;
