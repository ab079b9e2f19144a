fn main() -> Result<(), Box<dyn std::error::Error>> {
    flight_trail::init_tracing();

    let config = flight_trail::config_from_args(std::env::args())?;
    let presenter_factory = flight_trail::PixelsPresenterFactory::new();
    let command = flight_trail::RunGuiCommand::new(presenter_factory, config);

    command.execute()?;

    Ok(())
}
