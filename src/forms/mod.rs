//! Form drafts backing the create/edit panels.

use thiserror::Error;

pub mod amenity;
pub mod region;

/// Locally detected input problem; nothing is sent over the wire.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(String),
}

impl From<validator::ValidationErrors> for FormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        FormError::Invalid(errors.to_string())
    }
}
