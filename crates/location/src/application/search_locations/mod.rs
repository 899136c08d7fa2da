mod search_locations_command;
mod search_locations_dto;
mod search_locations_use_case;

pub use search_locations_command::SearchLocationsCommand;
pub use search_locations_dto::LocationResultDto;
pub use search_locations_use_case::{SearchLocationsUseCase, DEFAULT_SEARCH_RADIUS_KM};
