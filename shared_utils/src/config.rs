//! Environment-backed configuration helpers.

use std::env::{self, VarError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value is not valid UTF-8.
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|e| match e {
        VarError::NotPresent => ConfigError::MissingEnvVar(name.to_string()),
        VarError::NotUnicode(_) => ConfigError::NotUnicode(name.to_string()),
    })
}

/// Reads an optional path override from the environment.
///
/// Returns `Ok(None)` when the variable is unset or blank. A value that is
/// present but not unicode is still an error, since silently ignoring it would
/// hide a misconfiguration.
pub fn get_env_path(name: &str) -> Result<Option<PathBuf>, ConfigError> {
    match get_env_var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(ConfigError::MissingEnvVar(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
