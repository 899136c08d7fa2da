// crates/location/src/infrastructure/grpc/grpc_vehicle_directory.rs

use async_trait::async_trait;
use shared_kernel::errors::{AppError, AppResult, ErrorCode, Result};
use std::collections::HashMap;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

use crate::application::ports::VehicleDirectory;
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::grpc::vehicle_mapper;
use crate::infrastructure::grpc::vehicle_v1::vehicle_service_client::VehicleServiceClient;
use crate::infrastructure::grpc::vehicle_v1::GetVehiclesRequest;

pub const VEHICLE_SERVICE_NAME: &str = "vehicle-service";

/// Client du service Vehicle. Le `Channel` tonic est partagé et multiplexé : cloner est gratuit.
pub struct GrpcVehicleDirectory {
    client: VehicleServiceClient<Channel>,
}

impl GrpcVehicleDirectory {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: VehicleServiceClient::new(channel),
        }
    }

    /// Canal paresseux : la connexion s'établit au premier appel et se rétablit seule
    pub fn connect_lazy(host: &str, port: u16) -> AppResult<Channel> {
        let uri = format!("http://{}:{}", host, port);

        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| {
                AppError::new(
                    ErrorCode::InternalError,
                    format!("Invalid vehicle service endpoint '{}': {}", uri, e),
                )
            })?
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10));

        Ok(endpoint.connect_lazy())
    }
}

#[async_trait]
impl VehicleDirectory for GrpcVehicleDirectory {
    async fn fetch_vehicles(&self, ids: &[VehicleId]) -> Result<HashMap<VehicleId, Vehicle>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let request = GetVehiclesRequest {
            ids: ids.iter().map(|id| id.as_str().to_string()).collect(),
        };

        let response = self
            .client
            .clone()
            .get_vehicles(request)
            .await
            .map_err(|status| vehicle_mapper::status_to_domain(VEHICLE_SERVICE_NAME, status))?;

        Ok(response
            .into_inner()
            .vehicles
            .into_iter()
            .map(vehicle_mapper::to_domain)
            .map(|vehicle| (vehicle.id().clone(), vehicle))
            .collect())
    }
}
