// crates/location/src/infrastructure/grpc/vehicle_mapper.rs

use shared_kernel::errors::DomainError;
use tonic::{Code, Status};

use crate::domain::builders::VehicleBuilder;
use crate::domain::entities::{Driver, Vehicle};
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::grpc::vehicle_v1;

/// Un véhicule sans conducteur a un propriétaire vide (aucun appelant ne peut le déplacer)
pub(crate) fn to_domain(message: vehicle_v1::Vehicle) -> Vehicle {
    let driver = message
        .driver
        .map(|d| Driver::new(d.user_id, d.name, d.nickname, d.email, d.picture))
        .unwrap_or_default();

    VehicleBuilder::new(VehicleId::from_raw(message.id), "")
        .with_name(message.name)
        .with_plate(message.plate)
        .with_type(message.r#type)
        .with_class(message.class)
        .with_seats(message.seats)
        .with_driver(driver)
        .build()
}

pub(crate) fn status_to_domain(service: &'static str, status: Status) -> DomainError {
    match status.code() {
        Code::Cancelled => DomainError::Cancelled,
        code => DomainError::RemoteService {
            service,
            reason: format!("{:?}: {}", code, status.message()),
        },
    }
}
