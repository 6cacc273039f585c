pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;

pub use app::{AppConfig, WelcomeConfig};
pub use error::ConfigError;
