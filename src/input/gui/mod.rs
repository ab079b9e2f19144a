//! Windowed flight: winit for the window and keyboard, pixels for the
//! framebuffer, egui for the gauge panel.

pub mod app;
pub mod commands;

pub use commands::run_gui::{GuiError, RunGuiCommand};
