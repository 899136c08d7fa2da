mod driver_location;
mod vehicle;

pub use driver_location::DriverLocation;
pub use vehicle::{Driver, Vehicle};
