mod save_location_command;
mod save_location_use_case;

pub use save_location_command::SaveLocationCommand;
pub use save_location_use_case::SaveLocationUseCase;
pub(crate) use save_location_use_case::required;
