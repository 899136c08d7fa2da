mod cached_vehicle_repository;
mod geo_mapper;
mod redis_location_repository;

pub use cached_vehicle_repository::{CachedVehicleRepository, VEHICLE_CACHE_TTL};
pub use redis_location_repository::{RedisLocationRepository, DRIVERS_INDEX_KEY};
