pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use config::{ConfigError, SimConfig};
pub use controllers::cli::autopilot::{
    AutopilotController, FlightPhase, FlightSummary, default_flight_plan,
};
pub use controllers::simulation::{FlightSimulator, SimulationError, Viewport};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Reads the config named by the first CLI argument, or the defaults.
pub fn config_from_args(mut args: impl Iterator<Item = String>) -> Result<SimConfig, ConfigError> {
    match args.nth(1) {
        Some(path) => SimConfig::load(path),
        None => Ok(SimConfig::default()),
    }
}
