//! HTTP-backed repository shared by all entity trait implementations.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::{CacheKey, QueryCache};
use crate::http::HttpClient;
use crate::models::config::ApiConfig;
use crate::pagination::Page;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Action-endpoint acknowledgement, e.g. delete / soft-delete / restore.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    pub success: bool,
}

pub struct ApiRepository {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl ApiRepository {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    pub fn from_config(config: &ApiConfig) -> RepositoryResult<Self> {
        Ok(Self::new(
            HttpClient::new(config)?,
            Arc::new(QueryCache::new()),
        ))
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The one generic paginated list client: cache key from the normalized
    /// query pairs, single-flight fetch through the cache, typed decode.
    pub(crate) async fn fetch_page<T: DeserializeOwned>(
        &self,
        entity: &'static str,
        path: &str,
        pairs: Vec<(&'static str, String)>,
    ) -> RepositoryResult<Page<T>> {
        let key = CacheKey::list(entity, &pairs);
        let http = &self.http;
        let value = self
            .cache
            .get_or_fetch(key, || async move { http.get_json(path, &pairs).await })
            .await?;
        decode(&value)
    }

    /// Marks every cached list variant of `entity` stale after a mutation.
    pub(crate) fn invalidate(&self, entity: &str) {
        self.cache.invalidate(entity);
    }

    pub(crate) fn remove_item(&self, key: &CacheKey) {
        self.cache.remove(key);
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: &Value) -> RepositoryResult<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| RepositoryError::Unexpected(format!("unexpected response shape: {e}")))
}

pub(crate) fn expect_success(value: &Value) -> RepositoryResult<()> {
    let status: StatusResponse = decode(value)?;
    if status.success {
        Ok(())
    } else {
        Err(RepositoryError::Request(
            "server reported the operation as unsuccessful".to_string(),
        ))
    }
}
