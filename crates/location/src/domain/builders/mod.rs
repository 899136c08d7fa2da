mod vehicle_builder;

pub use vehicle_builder::VehicleBuilder;
