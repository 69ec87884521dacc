//! Client library for the Karpaty rentals admin dashboard.
//!
//! The crate talks to the platform's REST API on behalf of authenticated
//! staff: paginated list queries go through a shared [`cache::QueryCache`],
//! mutations invalidate the affected entries, and the `services` layer holds
//! the per-page state machines (search, pagination, form panels) that a UI
//! shell renders.

use std::sync::Arc;

use crate::cache::QueryCache;
use crate::http::HttpClient;
use crate::models::config::ApiConfig;
use crate::repository::api::ApiRepository;
use crate::repository::errors::RepositoryError;

pub mod cache;
pub mod domain;
pub mod forms;
pub mod http;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

/// Page size used by every collection page unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Builds an [`ApiRepository`] wired to a fresh response cache.
///
/// Each call produces an isolated cache; the dashboard shares one repository
/// across all pages so that mutations on one page invalidate the lists shown
/// on the others.
pub fn connect(config: &ApiConfig) -> Result<ApiRepository, RepositoryError> {
    let http = HttpClient::new(config)?;
    Ok(ApiRepository::new(http, Arc::new(QueryCache::new())))
}
