// crates/location/src/domain/value_objects/mod.rs

mod distance_unit;
mod search_radius;
mod vehicle_id;

pub use distance_unit::DistanceUnit;
pub use search_radius::{effective_limit, SearchRadius, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
pub use vehicle_id::VehicleId;
