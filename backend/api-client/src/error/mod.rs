pub mod api;
pub mod config;

pub use api::ApiError;
pub use config::ConfigError;
