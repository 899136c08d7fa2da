// crates/shared-kernel/src/infrastructure/redis/factories/redis_config.rs

use crate::errors::{AppError, AppResult, ErrorCode};

pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_REDIS_MAX_CLIENTS: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct RedisConfig {
    pub url: String,
    pub max_clients: usize,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REDIS_URL.to_string(),
            max_clients: DEFAULT_REDIS_MAX_CLIENTS,
        }
    }
}

impl RedisConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lecture via une fonction de lookup (les tests injectent une map au lieu de l'ENV)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("REDIS_URL") {
            config.url = url;
        }

        if let Some(raw) = lookup("REDIS_MAX_CLIENTS") {
            config.max_clients = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or_else(|| {
                    AppError::new(ErrorCode::InternalError, "Invalid REDIS_MAX_CLIENTS")
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = RedisConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, RedisConfig::default());
    }

    #[test]
    fn test_env_values_override_defaults() {
        let config = RedisConfig::from_lookup(lookup(&[
            ("REDIS_URL", "redis://cache:6380"),
            ("REDIS_MAX_CLIENTS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.url, "redis://cache:6380");
        assert_eq!(config.max_clients, 4);
    }

    #[test]
    fn test_invalid_max_clients_is_rejected() {
        assert!(RedisConfig::from_lookup(lookup(&[("REDIS_MAX_CLIENTS", "aa")])).is_err());
        assert!(RedisConfig::from_lookup(lookup(&[("REDIS_MAX_CLIENTS", "0")])).is_err());
    }
}
