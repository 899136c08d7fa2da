mod resolve_vehicle_use_case;

pub use resolve_vehicle_use_case::ResolveVehicleUseCase;
