// errors.rs
use crate::config::ConfigError;
use crate::lookup::LookupError;
use crate::provider::ProviderError;
use thiserror::Error;

/// Failures that stop the program before or around a search. Per-neighborhood
/// provider failures are not among them; those are recorded in the report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("lookup tables: {0}")]
    Lookup(#[from] LookupError),

    #[error("provider setup failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
