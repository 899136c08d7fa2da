// crates/location/src/infrastructure/api/http/handlers.rs

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shared_kernel::errors::{AppError, ErrorCode};
use std::sync::Arc;

use crate::application::search_locations::LocationResultDto;
use crate::infrastructure::api::http::{
    AuthenticatedCaller, HttpError, LocationApiState, SaveLocationRequest, SearchLocationRequest,
};

fn malformed_body(rejection: JsonRejection) -> HttpError {
    HttpError(
        AppError::new(ErrorCode::ValidationFailed, "Malformed request body")
            .with_details(serde_json::json!({ "reason": rejection.body_text() })),
    )
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn save_location(
    State(state): State<Arc<LocationApiState>>,
    caller: AuthenticatedCaller,
    payload: Result<Json<SaveLocationRequest>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let Json(request) = payload.map_err(malformed_body)?;
    let token = state.shutdown.child_token();

    state
        .save_location
        .execute(request.into_command(caller.0.subject), &token)
        .await?;

    Ok(StatusCode::OK)
}

pub async fn search_locations(
    State(state): State<Arc<LocationApiState>>,
    _caller: AuthenticatedCaller,
    payload: Result<Json<SearchLocationRequest>, JsonRejection>,
) -> Result<Json<Vec<LocationResultDto>>, HttpError> {
    let Json(request) = payload.map_err(malformed_body)?;
    let token = state.shutdown.child_token();

    let results = state
        .search_locations
        .execute(request.into(), &token)
        .await?;

    Ok(Json(results))
}
