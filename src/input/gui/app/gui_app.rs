use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info, warn};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::config::{DisplayConfig, SimConfig};
use crate::controllers::simulation::gauges::{CONTROLS_HELP, GaugeReadout, GaugeTicker};
use crate::controllers::simulation::simulator::{FlightSimulator, SimulationError};
use crate::controllers::simulation::viewport::Viewport;
use crate::core::trajectory::{DetachedScene, TrailUpdate};
use crate::input::gui::app::flight_input::FlightInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::run_gui::GuiError;
use crate::presenters::raster::frame::{FrameScene, render_frame};

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    viewport: Viewport,
    minimized: bool,
    presenter: T,
    simulator: FlightSimulator<DetachedScene>,
    display: DisplayConfig,
    input: FlightInputState,
    gauges: GaugeTicker,
    readout: GaugeReadout,
    last_frame: Option<Instant>,
    last_error_message: Option<String>,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        config: &SimConfig,
    ) -> Result<Self, SimulationError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let viewport = Viewport::new(size.width, size.height, config.world.frustum_size);
        let simulator = FlightSimulator::new(config, &viewport, DetachedScene)?;
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            viewport,
            minimized: size.width == 0 || size.height == 0,
            presenter,
            readout: GaugeReadout::from_status(
                &simulator.status(),
                config.display.knots_conversion_factor,
            ),
            simulator,
            display: config.display,
            input: FlightInputState::default(),
            gauges: GaugeTicker::new(config.display.gauge_interval()),
            last_frame: None,
            last_error_message: None,
            scale_factor,
            egui_ctx,
            egui_state,
        })
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let window = self.window;
        let mut failure: Option<GuiError> = None;

        info!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            "flight window open"
        );

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, _) = self.handle_window_event(window, event);

                let outcome = match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                        Ok(())
                    }
                    WindowEvent::RedrawRequested => self.redraw(),
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.scale_factor = *scale_factor;
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height)
                    }
                    WindowEvent::Focused(focused) => {
                        if !focused {
                            self.input.reset();
                        }
                        Ok(())
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        // Releases always land so keys never stick under a panel.
                        if let PhysicalKey::Code(code) = event.physical_key {
                            if event.state == ElementState::Released || !egui_consumed {
                                self.input.handle_key_event(code, event.state);
                            }
                        }
                        Ok(())
                    }
                    _ => Ok(()),
                };

                if let Err(e) = outcome {
                    error!("flight window failed: {e}");
                    failure = Some(e);
                    elwt.exit();
                }
            }
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        self.simulator.shutdown();

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.advance()?;

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if self.minimized {
            return Ok(());
        }

        self.draw()?;
        self.presenter.render(egui_output, &self.egui_ctx)?;
        Ok(())
    }

    /// Steps the simulation by the wall-clock time since the last frame.
    fn advance(&mut self) -> Result<(), GuiError> {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_frame = Some(now);

        let controls = self.input.snapshot(self.egui_ctx.wants_keyboard_input());
        let report = self.simulator.advance_frame(elapsed, controls)?;

        if let TrailUpdate::Recovered(fault) = &report.trail {
            warn!(%fault, "trail rebuilt");
            self.last_error_message = Some(format!("Trail rebuilt: {fault}"));
        }

        if self.gauges.tick(elapsed) {
            self.readout =
                GaugeReadout::from_status(&report.status, self.display.knots_conversion_factor);
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<(), GuiError> {
        let mut canvas = self.presenter.canvas()?;
        render_frame(
            &mut canvas,
            &self.viewport,
            FrameScene {
                pose: self.simulator.airplane().pose,
                segments: self.simulator.trajectory().segments(),
                material: *self.simulator.trajectory().material(),
                frustum_size: self.viewport.frustum_size(),
            },
            &self.display,
        );
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.minimized = width == 0 || height == 0;
        if self.minimized {
            return Ok(());
        }

        self.presenter.resize(width, height)?;
        if self.viewport.resize(width, height) {
            self.simulator.apply_viewport(&self.viewport);
        }

        Ok(())
    }

    pub fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Gauges")
                .default_pos([10.0, 10.0])
                .default_size([220.0, 160.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading("Flight");
                    ui.separator();

                    for line in self.readout.lines() {
                        ui.label(line);
                    }

                    ui.separator();
                    ui.label(CONTROLS_HELP);

                    if let Some(message) = &self.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
