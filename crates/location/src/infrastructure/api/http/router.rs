// crates/location/src/infrastructure/api/http/router.rs

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::infrastructure::api::http::handlers;
use crate::infrastructure::api::http::LocationApiState;

pub fn router(state: Arc<LocationApiState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/location/save", post(handlers::save_location))
        .route("/location/search", post(handlers::search_locations))
        .with_state(state)
}
