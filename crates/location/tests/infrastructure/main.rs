// crates/location/tests/infrastructure/main.rs

mod repository_it_for_driver_location;
mod repository_it_for_vehicle_cache;
