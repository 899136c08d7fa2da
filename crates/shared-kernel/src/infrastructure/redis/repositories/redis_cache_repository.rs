// crates/shared-kernel/src/infrastructure/redis/repositories/redis_cache_repository.rs

use async_trait::async_trait;
use fred::clients::Pool;
use fred::prelude::*;
use fred::types::Expiration;
use std::time::Duration;

use crate::domain::repositories::CacheRepository;
use crate::errors::AppResult;

pub struct RedisCacheRepository {
    pool: Pool,
}

impl RedisCacheRepository {
    /// Le pool est partagé : cloner un `Pool` ne rouvre aucune connexion
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    fn map_expiration(ttl: Option<Duration>) -> Option<Expiration> {
        ttl.map(|d| {
            if d < Duration::from_secs(1) {
                Expiration::PX(d.as_millis() as i64)
            } else {
                Expiration::EX(d.as_secs() as i64)
            }
        })
    }
}

#[async_trait]
impl CacheRepository for RedisCacheRepository {
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        // SET key value EX ttl : écrasement complet, TTL réinitialisé
        self.pool
            .set::<(), _, _>(key, value, Self::map_expiration(ttl), None, false)
            .await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let result: Option<String> = self.pool.get(key).await?;

        Ok(result)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.pool.del::<i64, _>(key).await?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let count: i64 = self.pool.exists(key).await?;

        Ok(count > 0)
    }
}
