use thiserror::Error;

/// Classified failures of the user store. Messages are wire-ready: the
/// presentation layer forwards them verbatim in the response body.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
