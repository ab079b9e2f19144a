use std::marker::PhantomData;

use thiserror::Error;
use winit::{dpi::LogicalSize, event_loop::EventLoopBuilder, window::{Window, WindowBuilder}};

use crate::config::SimConfig;
use crate::controllers::simulation::simulator::SimulationError;
use crate::core::trajectory::TrajectoryError;
use crate::input::gui::{app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort}, commands::ports::presenter_factory::GuiPresenterFactoryPort};
use crate::presenters::raster::canvas::CanvasError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to open window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface failed: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("framebuffer resize failed: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: SimConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: SimConfig) -> Self {
        Self { presenter_factory, config, _phantom: PhantomData }
    }

    /// Opens the window and flies until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::new().build()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Flight Trail")
                .with_inner_size(LogicalSize::new(
                    f64::from(self.config.world.window_width),
                    f64::from(self.config.world.window_height),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window)?;
        let app = GuiApp::new(window, &event_loop, presenter, &self.config)?;

        app.run(event_loop)
    }
}
