// crates/location/src/infrastructure/grpc/mod.rs

mod grpc_vehicle_directory;
mod vehicle_mapper;

// Code généré par build.rs depuis proto/vehicle/v1/vehicle.proto
pub mod vehicle_v1 {
    include!("proto/vehicle.v1.rs");
}

pub use grpc_vehicle_directory::{GrpcVehicleDirectory, VEHICLE_SERVICE_NAME};
