// crates/location/src/infrastructure/redis/geo_mapper.rs

use fred::types::geo::{GeoPosition, GeoRadiusInfo, GeoUnit, GeoValue};
use fred::types::Value;
use shared_kernel::domain::value_objects::GeoPoint;

use crate::domain::entities::DriverLocation;
use crate::domain::value_objects::{DistanceUnit, VehicleId};

/// Entrée GEO native : member = id du véhicule, position = (lng, lat)
pub(crate) fn to_geo_value(location: &DriverLocation) -> GeoValue {
    GeoValue {
        coordinates: GeoPosition {
            longitude: location.lng(),
            latitude: location.lat(),
        },
        member: Value::from(location.vehicle_id().as_str()),
    }
}

pub(crate) fn to_geo_position(center: &GeoPoint) -> GeoPosition {
    GeoPosition {
        longitude: center.lon(),
        latitude: center.lat(),
    }
}

pub(crate) fn to_geo_unit(unit: DistanceUnit) -> GeoUnit {
    match unit {
        DistanceUnit::Meters => GeoUnit::Meters,
        DistanceUnit::Kilometers => GeoUnit::Kilometers,
        DistanceUnit::Miles => GeoUnit::Miles,
        DistanceUnit::Feet => GeoUnit::Feet,
    }
}

/// Une réponse GEORADIUS WITHCOORD WITHDIST vers (position, distance).
/// Les entrées incomplètes sont ignorées.
pub(crate) fn from_radius_info(info: GeoRadiusInfo) -> Option<(DriverLocation, f64)> {
    let member = info.member.as_string()?;
    let position = info.position?;
    let distance = info.distance?;

    Some((
        DriverLocation::new(
            VehicleId::from_raw(member),
            GeoPoint::from_raw(position.latitude, position.longitude),
        ),
        distance,
    ))
}
