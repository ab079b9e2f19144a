pub mod flight_input;
pub mod gui_app;
pub mod ports;
