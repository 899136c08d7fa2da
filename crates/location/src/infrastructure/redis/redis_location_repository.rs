// crates/location/src/infrastructure/redis/redis_location_repository.rs

use async_trait::async_trait;
use fred::clients::Pool;
use fred::interfaces::GeoInterface;
use fred::types::{SortOrder, Value};
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::DriverLocation;
use crate::domain::repositories::LocationRepository;
use crate::domain::value_objects::{effective_limit, SearchRadius};
use crate::infrastructure::redis::geo_mapper;

/// Index unique (non partitionné) de toutes les positions
pub const DRIVERS_INDEX_KEY: &str = "drivers";

pub struct RedisLocationRepository {
    pool: Pool,
    key: String,
}

impl RedisLocationRepository {
    pub fn new(pool: Pool) -> Self {
        Self::with_key(pool, DRIVERS_INDEX_KEY)
    }

    /// Clé d'index dédiée (isolation des tests d'intégration)
    pub fn with_key(pool: Pool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    fn storage_error(e: fred::error::Error) -> DomainError {
        DomainError::Storage(format!("Redis geo index: {}", e))
    }
}

#[async_trait]
impl LocationRepository for RedisLocationRepository {
    async fn save(&self, location: &DriverLocation) -> Result<()> {
        location.ensure_valid()?;

        // GEOADD drivers <lng> <lat> <id> : écrase la position précédente
        self.pool
            .geoadd::<(), _, _>(
                self.key.as_str(),
                None,
                false,
                geo_mapper::to_geo_value(location),
            )
            .await
            .map_err(Self::storage_error)
    }

    async fn search(
        &self,
        center: GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> Result<Vec<(DriverLocation, f64)>> {
        if !center.is_valid() {
            return Ok(Vec::new());
        }

        // GEORADIUS drivers <lng> <lat> <radius> <unit> WITHCOORD WITHDIST COUNT <n> ASC
        let count = effective_limit(limit) as u64;
        let raw: Value = self
            .pool
            .georadius(
                self.key.as_str(),
                geo_mapper::to_geo_position(&center),
                radius.value(),
                geo_mapper::to_geo_unit(radius.unit()),
                true,
                true,
                false,
                Some((count, false)),
                Some(SortOrder::Asc),
                None,
                None,
            )
            .await
            .map_err(Self::storage_error)?;

        let entries = raw
            .into_geo_radius_result(true, true, false)
            .map_err(Self::storage_error)?;

        // Ordre natif de Redis conservé : COUNT + ASC renvoie déjà les n plus proches
        Ok(entries
            .into_iter()
            .filter_map(geo_mapper::from_radius_info)
            .collect())
    }
}
