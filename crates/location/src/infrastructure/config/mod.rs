mod location_config;

pub use location_config::LocationConfig;
