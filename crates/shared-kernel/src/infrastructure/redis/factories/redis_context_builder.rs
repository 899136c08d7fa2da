// crates/shared-kernel/src/infrastructure/redis/factories/redis_context_builder.rs

use crate::errors::AppResult;
use crate::infrastructure::redis::factories::{RedisConfig, RedisContext};

pub struct RedisContextBuilder {
    pub(crate) url: String,
    pub(crate) max_clients: usize,
}

impl Default for RedisContextBuilder {
    fn default() -> Self {
        Self::from_config(&RedisConfig::default())
    }
}

impl RedisContextBuilder {
    /// Configuration lue depuis l'environnement (REDIS_URL, REDIS_MAX_CLIENTS)
    pub fn new() -> AppResult<Self> {
        Ok(Self::from_config(&RedisConfig::from_env()?))
    }

    pub fn from_config(config: &RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_clients: config.max_clients,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_max_clients(mut self, max: usize) -> Self {
        self.max_clients = max;
        self
    }

    pub async fn build(self) -> AppResult<RedisContext> {
        RedisContext::restore(self).await
    }
}
