// backend/services/location/api/src/main.rs

use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tonic::transport::Channel;
use tracing_subscriber::EnvFilter;

// Application
use location::application::resolve_vehicle::ResolveVehicleUseCase;
use location::application::save_location::SaveLocationUseCase;
use location::application::search_locations::SearchLocationsUseCase;

// Infrastructure
use location::infrastructure::api::http::{router, LocationApiState};
use location::infrastructure::auth::JwtTokenService;
use location::infrastructure::config::LocationConfig;
use location::infrastructure::grpc::GrpcVehicleDirectory;
use location::infrastructure::redis::{CachedVehicleRepository, RedisLocationRepository};

// Shared Kernel
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::bootstrap::{run_initializers, Initializer};
use shared_kernel::infrastructure::redis::factories::{RedisContext, RedisContextBuilder};

fn store<T>(cell: &OnceCell<T>, value: T, what: &str) -> AppResult<()> {
    cell.set(value).map_err(|_| {
        AppError::new(ErrorCode::InternalError, format!("{} initialized twice", what))
    })
}

fn take<T>(cell: OnceCell<T>, what: &str) -> AppResult<T> {
    cell.into_inner().ok_or_else(|| {
        AppError::new(ErrorCode::InternalError, format!("{} was not initialized", what))
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = LocationConfig::from_env()?;
    tracing::info!(profile = %config.active_profile, "🚀 Starting {}", config.app_name);

    // --- 1. INITIALISATION ORDONNÉE DES DÉPENDANCES ---

    let redis: OnceCell<RedisContext> = OnceCell::new();
    let vehicle_channel: OnceCell<Channel> = OnceCell::new();
    let token_service: OnceCell<JwtTokenService> = OnceCell::new();

    run_initializers(vec![
        Initializer::new("redis", async {
            let ctx = RedisContextBuilder::from_config(&config.redis).build().await?;
            store(&redis, ctx, "Redis context")
        }),
        Initializer::new("vehicle-service", async {
            let channel = GrpcVehicleDirectory::connect_lazy(
                &config.vehicle_service_host,
                config.vehicle_service_port,
            )?;
            store(&vehicle_channel, channel, "Vehicle service channel")
        }),
        Initializer::new("token-service", async {
            let service = JwtTokenService::from_file(&config.jwt_public_key_file, &config.jwt_issuer).await?;
            store(&token_service, service, "Token service")
        }),
    ])
    .await?;

    let redis = take(redis, "Redis context")?;
    let vehicle_channel = take(vehicle_channel, "Vehicle service channel")?;
    let token_service = take(token_service, "Token service")?;

    // --- 2. REPOSITORIES & USE CASES ---

    // Un seul pool Redis partagé par le cache et l'index géographique
    let location_repo = Arc::new(RedisLocationRepository::new(redis.pool()));
    let vehicle_cache = Arc::new(CachedVehicleRepository::new(redis.repository()));
    let vehicle_directory = Arc::new(GrpcVehicleDirectory::new(vehicle_channel));

    let mut resolver = ResolveVehicleUseCase::new(vehicle_cache, vehicle_directory);
    if config.resolver_singleflight {
        tracing::info!("Vehicle resolver single-flight enabled");
        resolver = resolver.with_singleflight();
    }
    let resolver = Arc::new(resolver);

    let shutdown = CancellationToken::new();
    let state = Arc::new(LocationApiState {
        save_location: Arc::new(SaveLocationUseCase::new(location_repo.clone(), resolver.clone())),
        search_locations: Arc::new(SearchLocationsUseCase::new(location_repo, resolver)),
        token_service: Arc::new(token_service),
        shutdown: shutdown.clone(),
    });

    // --- 3. DÉMARRAGE DU SERVEUR HTTP ---

    let addr = config.http_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌍 {} listening on http://{}", config.app_name, addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("🛑 Shutdown signal received, cancelling in-flight requests..."),
                Err(err) => tracing::error!("❌ Unable to listen for shutdown signal: {}", err),
            }
            shutdown.cancel();
        })
        .await?;

    tracing::info!("👋 {} stopped", config.app_name);
    Ok(())
}
