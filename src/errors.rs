use spendwise_config::ConfigError;
use spendwise_core::CoreError;
use spendwise_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Invalid date `{0}`")]
    InvalidDate(String),
}
