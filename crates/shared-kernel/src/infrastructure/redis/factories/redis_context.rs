// crates/shared-kernel/src/infrastructure/redis/factories/redis_context.rs

use fred::clients::Pool;
use fred::prelude::*;
use fred::types::Builder;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::redis::factories::{RedisConfig, RedisContextBuilder};
use crate::infrastructure::redis::repositories::RedisCacheRepository;

/// Handle longue durée vers Redis : un seul pool, partagé par tous les adaptateurs
pub struct RedisContext {
    pool: Pool,
    repository: Arc<RedisCacheRepository>,
    url: String,
    max_clients: usize,
}

impl RedisContext {
    pub fn builder() -> AppResult<RedisContextBuilder> {
        RedisContextBuilder::new()
    }

    pub fn builder_raw() -> RedisContextBuilder {
        RedisContextBuilder::default()
    }

    pub fn repository(&self) -> Arc<RedisCacheRepository> {
        self.repository.clone()
    }

    pub fn pool(&self) -> Pool {
        self.pool.clone()
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn config(&self) -> RedisConfig {
        RedisConfig {
            url: self.url.clone(),
            max_clients: self.max_clients,
        }
    }

    pub(crate) async fn restore(builder: RedisContextBuilder) -> AppResult<Self> {
        let pool = connect_pool(&builder.url, builder.max_clients)
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::InfrastructureFailure,
                    format!("Failed to connect to Redis at {}: {}", builder.url, e),
                )
            })?;

        Ok(Self {
            repository: Arc::new(RedisCacheRepository::new(pool.clone())),
            pool,
            url: builder.url,
            max_clients: builder.max_clients,
        })
    }
}

async fn connect_pool(url: &str, max_clients: usize) -> AppResult<Pool> {
    let config = Config::from_url(url)?;

    let pool = Builder::from_config(config)
        .with_connection_config(|cfg| {
            cfg.connection_timeout = Duration::from_secs(5);
            cfg.internal_command_timeout = Duration::from_secs(5);
            cfg.max_command_attempts = 5;
        })
        // Reconnexion patiente (backoff exponentiel, sans limite de tentatives)
        .set_policy(ReconnectPolicy::new_exponential(0, 100, 1000, 2))
        .build_pool(max_clients.max(1))?;

    pool.init().await?;

    // On attend que TOUS les clients du pool soient connectés
    pool.wait_for_connect().await?;

    tracing::debug!(url, max_clients, "Redis pool connected");

    Ok(pool)
}
