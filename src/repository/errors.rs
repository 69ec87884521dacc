use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Transport-level failure; the request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status; the message is the response
    /// body text, surfaced verbatim to the user.
    #[error("{0}")]
    Request(String),

    /// Input rejected locally before any request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            RepositoryError::Unexpected(err.to_string())
        } else {
            RepositoryError::Network(err.to_string())
        }
    }
}
