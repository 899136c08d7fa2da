mod auth;
mod dto;
mod error;
mod handlers;
mod router;
mod state;

pub use auth::AuthenticatedCaller;
pub use dto::{SaveLocationRequest, SearchLocationRequest};
pub use error::HttpError;
pub use router::router;
pub use state::LocationApiState;
