use winit::window::Window;

use crate::{input::gui::{app::ports::presenter::GuiPresenterPort, commands::ports::presenter_factory::GuiPresenterFactoryPort}, presenters::pixels::presenter::PixelsPresenter};

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window)
    }
}
