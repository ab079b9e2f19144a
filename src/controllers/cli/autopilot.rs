use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SimConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::simulation::gauges::{GaugeReadout, GaugeTicker};
use crate::controllers::simulation::simulator::{FlightSimulator, SimulationError};
use crate::controllers::simulation::viewport::Viewport;
use crate::core::flight::{FlightControlsSnapshot, FlightStatus};
use crate::core::trajectory::DetachedScene;
use crate::presenters::raster::canvas::RgbaFrame;
use crate::presenters::raster::frame::{FrameScene, render_frame};

const FRAME_RATE_HZ: f64 = 60.0;

/// Controls held steady for a stretch of the scripted flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPhase {
    pub name: &'static str,
    pub duration: Duration,
    pub controls: FlightControlsSnapshot,
}

impl FlightPhase {
    #[must_use]
    pub fn new(name: &'static str, duration: Duration, controls: FlightControlsSnapshot) -> Self {
        Self {
            name,
            duration,
            controls,
        }
    }

    fn frame_count(&self) -> u64 {
        (self.duration.as_secs_f64() * FRAME_RATE_HZ).round() as u64
    }
}

/// Climb to full power, cruise, bank both ways, then throttle back.
#[must_use]
pub fn default_flight_plan() -> Vec<FlightPhase> {
    let hold = |throttle_up, throttle_down, rudder_left, rudder_right| FlightControlsSnapshot {
        throttle_up,
        throttle_down,
        rudder_left,
        rudder_right,
    };

    vec![
        FlightPhase::new("throttle up", Duration::from_secs(2), hold(true, false, false, false)),
        FlightPhase::new("cruise", Duration::from_secs(3), FlightControlsSnapshot::default()),
        FlightPhase::new("bank left", Duration::from_secs(2), hold(false, false, true, false)),
        FlightPhase::new("bank right", Duration::from_secs(2), hold(false, false, false, true)),
        FlightPhase::new("throttle down", Duration::from_secs(2), hold(false, true, false, false)),
    ]
}

/// Totals for one scripted flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub frames: u64,
    pub steps: u64,
    pub wraps: u64,
    pub recoveries: u64,
    pub segments: usize,
    pub points: usize,
    pub status: FlightStatus,
}

/// Flies a scripted plan without a window and keeps the last frame.
pub struct AutopilotController<P: FilePresenterPort> {
    presenter: P,
    config: SimConfig,
    frame: Option<RgbaFrame>,
}

impl<P: FilePresenterPort> AutopilotController<P> {
    pub fn new(presenter: P, config: SimConfig) -> Self {
        Self {
            presenter,
            config,
            frame: None,
        }
    }

    pub fn fly(&mut self, plan: &[FlightPhase]) -> Result<FlightSummary, SimulationError> {
        let viewport = Viewport::new(
            self.config.world.window_width,
            self.config.world.window_height,
            self.config.world.frustum_size,
        );
        let mut simulator = FlightSimulator::new(&self.config, &viewport, DetachedScene)?;
        let mut gauges = GaugeTicker::new(self.config.display.gauge_interval());
        let frame_interval = Duration::from_secs_f64(1.0 / FRAME_RATE_HZ);

        info!(
            width = viewport.width(),
            height = viewport.height(),
            phases = plan.len(),
            "starting scripted flight"
        );

        let start = Instant::now();
        let mut frames = 0;
        let mut steps = 0;
        let mut wraps = 0;

        for phase in plan {
            debug!(phase = phase.name, frames = phase.frame_count(), "entering phase");

            for _ in 0..phase.frame_count() {
                let report = simulator.advance_frame(frame_interval, phase.controls)?;
                frames += 1;
                steps += u64::from(report.steps_run);
                if report.wrapped {
                    wraps += 1;
                }

                if gauges.tick(frame_interval) {
                    let readout = GaugeReadout::from_status(
                        &report.status,
                        self.config.display.knots_conversion_factor,
                    );
                    let [airspeed, throttle, thrust, rudder] = readout.lines();
                    info!(phase = phase.name, %airspeed, %throttle, %thrust, %rudder, "gauges");
                }
            }
        }

        let mut frame = RgbaFrame::new(viewport.width(), viewport.height());
        render_frame(
            &mut frame.canvas(),
            &viewport,
            FrameScene {
                pose: simulator.airplane().pose,
                segments: simulator.trajectory().segments(),
                material: *simulator.trajectory().material(),
                frustum_size: viewport.frustum_size(),
            },
            &self.config.display,
        );
        self.frame = Some(frame);

        let trajectory = simulator.trajectory();
        let summary = FlightSummary {
            frames,
            steps,
            wraps,
            recoveries: trajectory.recoveries(),
            segments: trajectory.segment_count(),
            points: trajectory.total_points(),
            status: simulator.status(),
        };

        info!(
            frames,
            steps,
            wraps,
            segments = summary.segments,
            points = summary.points,
            elapsed = ?start.elapsed(),
            "scripted flight finished"
        );

        simulator.shutdown();
        Ok(summary)
    }

    /// Writes the last rendered frame. Does nothing before the first flight.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, filepath)?
        }

        Ok(())
    }
}
