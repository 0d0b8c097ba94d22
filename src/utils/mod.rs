//! Utility modules: configuration.

mod config;

pub use config::{load_config, AppConfig, LlmConfig, PathsConfig};
