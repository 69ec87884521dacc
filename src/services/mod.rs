//! Page controllers driving the dashboard's collection views.
//!
//! Each controller owns the ephemeral UI state of one page (filters,
//! pagination, the open form panel) and orchestrates the repository traits.
//! Controllers never talk HTTP directly and never cache anything themselves.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod amenities;
pub mod listing;
pub mod owners;
pub mod regions;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome of the explicit confirmation step guarding destructive actions.
/// Declining performs no request at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}
