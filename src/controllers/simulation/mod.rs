pub mod gauges;
pub mod scheduler;
pub mod simulator;
pub mod viewport;

pub use gauges::{CONTROLS_HELP, GaugeReadout, GaugeTicker};
pub use scheduler::FixedStepScheduler;
pub use simulator::{FlightSimulator, FrameReport, SimulationError};
pub use viewport::Viewport;
