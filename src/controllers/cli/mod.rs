pub mod autopilot;
