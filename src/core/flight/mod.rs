pub mod controls;
pub mod engine;
pub mod motion;
pub mod params;
pub mod pose;
pub mod status;
pub mod tuning;

pub use controls::FlightControlsSnapshot;
pub use engine::{EngineState, compute_thrust};
pub use motion::{Airplane, FlightStepReport, step_flight};
pub use params::{RudderParams, SpeedParams};
pub use pose::Pose;
pub use status::FlightStatus;
pub use tuning::FlightTuning;
