// crates/location/src/infrastructure/config/location_config.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::redis::factories::RedisConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

const PROFILE_LOCAL: &str = "local";
const PROFILE_PRODUCTION: &str = "production";

#[derive(Debug, Clone, PartialEq)]
pub struct LocationConfig {
    pub app_name: String,
    pub active_profile: String,
    pub http_host: String,
    pub http_port: u16,
    pub redis: RedisConfig,
    pub vehicle_service_host: String,
    pub vehicle_service_port: u16,
    pub jwt_issuer: String,
    pub jwt_public_key_file: PathBuf,
    pub resolver_singleflight: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            app_name: "Location API".to_string(),
            active_profile: PROFILE_LOCAL.to_string(),
            http_host: "0.0.0.0".to_string(),
            http_port: 8080,
            redis: RedisConfig::default(),
            vehicle_service_host: "localhost".to_string(),
            vehicle_service_port: 50052,
            jwt_issuer: "hey-taxi-identity-api".to_string(),
            jwt_public_key_file: PathBuf::from("/etc/certs/access-token-public-key.pem"),
            resolver_singleflight: false,
        }
    }
}

impl LocationConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let string = |key: &str, default: String| lookup(key).unwrap_or(default);

        Ok(Self {
            app_name: string("APP_NAME", defaults.app_name),
            active_profile: string("ACTIVE_PROFILE", defaults.active_profile),
            http_host: string("SERVER_HTTP_HOST", defaults.http_host),
            http_port: parse(&lookup, "SERVER_HTTP_PORT", defaults.http_port)?,
            redis: RedisConfig::from_lookup(&lookup)?,
            vehicle_service_host: string("VEHICLE_SERVICE_HOST", defaults.vehicle_service_host),
            vehicle_service_port: parse(&lookup, "VEHICLE_SERVICE_PORT", defaults.vehicle_service_port)?,
            jwt_issuer: string("JWT_ISSUER", defaults.jwt_issuer),
            jwt_public_key_file: lookup("JWT_ACCESS_TOKEN_PUBLIC_KEY_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.jwt_public_key_file),
            resolver_singleflight: parse(&lookup, "RESOLVER_SINGLEFLIGHT", defaults.resolver_singleflight)?,
        })
    }

    pub fn is_local(&self) -> bool {
        self.active_profile.eq_ignore_ascii_case(PROFILE_LOCAL)
    }

    pub fn is_production(&self) -> bool {
        self.active_profile.eq_ignore_ascii_case(PROFILE_PRODUCTION)
    }

    pub fn http_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .map_err(|_| {
                AppError::new(
                    ErrorCode::InternalError,
                    format!("Invalid HTTP address {}:{}", self.http_host, self.http_port),
                )
            })
    }
}

fn parse<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::new(ErrorCode::InternalError, format!("Invalid value for {}: '{}'", key, raw))
        }),
    }
}
