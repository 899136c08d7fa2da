// crates/location/src/infrastructure/api/http/state.rs

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::ports::TokenService;
use crate::application::save_location::SaveLocationUseCase;
use crate::application::search_locations::SearchLocationsUseCase;

pub struct LocationApiState {
    pub save_location: Arc<SaveLocationUseCase>,
    pub search_locations: Arc<SearchLocationsUseCase>,
    pub token_service: Arc<dyn TokenService>,
    /// Token racine du serveur : chaque requête travaille sur un enfant
    pub shutdown: CancellationToken,
}
