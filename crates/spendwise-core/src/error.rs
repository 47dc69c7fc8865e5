use spendwise_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error loading {what}: {source}")]
    Load {
        what: &'static str,
        #[source]
        source: Box<CoreError>,
    },
    #[error("Data source unavailable: {0}")]
    Source(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CoreError {
    pub(crate) fn loading(what: &'static str, source: CoreError) -> Self {
        CoreError::Load {
            what,
            source: Box::new(source),
        }
    }
}
