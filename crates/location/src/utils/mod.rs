mod fixtures;
mod in_memory_location_repository;
mod location_repository_stub;
mod token_service_stub;
mod vehicle_directory_stub;
mod vehicle_repository_stub;

pub use fixtures::vehicle;
pub use in_memory_location_repository::InMemoryLocationRepository;
pub use location_repository_stub::LocationRepositoryStub;
pub use token_service_stub::TokenServiceStub;
pub use vehicle_directory_stub::VehicleDirectoryStub;
pub use vehicle_repository_stub::VehicleRepositoryStub;
