use egui::Context as EguiContext;
use winit::window::Window;

use crate::presenters::raster::canvas::{Canvas, CanvasError};

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, pixels::Error>;
    /// Framebuffer for the next frame, sized to the last resize.
    fn canvas(&mut self) -> Result<Canvas<'_>, CanvasError>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
