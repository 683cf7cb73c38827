//! Configuration for the CLI.

use std::env;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the engine executable
    pub engine_path: String,
    /// Default database when none is given on the command line
    pub database: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let engine_path =
            env::var("MINIDB_ENGINE").map_err(|_| ConfigError::MissingEnginePath)?;

        let database = env::var("MINIDB_DATABASE").ok();

        Ok(Self {
            engine_path,
            database,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MINIDB_ENGINE environment variable is required")]
    MissingEnginePath,
}
