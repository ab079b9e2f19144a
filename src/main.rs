use tracing::info;

const OUTPUT_PATH: &str = "output/flight.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    flight_trail::init_tracing();

    let config = flight_trail::config_from_args(std::env::args())?;
    let presenter = flight_trail::PpmFilePresenter::new();
    let mut controller = flight_trail::AutopilotController::new(presenter, config);

    let summary = controller.fly(&flight_trail::default_flight_plan())?;
    controller.write(OUTPUT_PATH)?;

    info!(
        frames = summary.frames,
        wraps = summary.wraps,
        recoveries = summary.recoveries,
        path = OUTPUT_PATH,
        "saved final frame"
    );

    Ok(())
}
