//! Shared response cache for paginated list queries.
//!
//! The cache is constructor-injected into the repository rather than held as
//! a process global, so tests can run against isolated instances. Keys are
//! derived from the entity name plus the normalized query pairs; invalidation
//! is entity-wide, wiping every cached filter variant at once.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::repository::errors::RepositoryResult;

/// Identity of one cached query result.
///
/// List keys normalize their query pairs by sorting on the parameter name, so
/// two filters with the same field values always map to the same entry no
/// matter how the caller assembled them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    entity: &'static str,
    params: String,
}

impl CacheKey {
    /// Key for a paginated list query of `entity` with the given query pairs.
    pub fn list(entity: &'static str, pairs: &[(&'static str, String)]) -> Self {
        let mut sorted: Vec<&(&'static str, String)> = pairs.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        let params = sorted
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        Self { entity, params }
    }

    /// Key for a single-entity detail view.
    pub fn item(entity: &'static str, id: &str) -> Self {
        Self {
            entity,
            params: id.to_string(),
        }
    }

    pub fn entity(&self) -> &str {
        self.entity
    }
}

/// In-memory store of raw JSON responses keyed by [`CacheKey`].
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<CacheKey, Arc<Value>>>,
    in_flight: Mutex<HashMap<CacheKey, Arc<tokio::sync::Mutex<()>>>>,
}

fn lock_map<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<Value>> {
        lock_map(&self.entries).get(key).cloned()
    }

    pub fn set(&self, key: CacheKey, value: Value) {
        lock_map(&self.entries).insert(key, Arc::new(value));
    }

    /// Drops a single entry, e.g. the detail view of a mutated record.
    pub fn remove(&self, key: &CacheKey) {
        lock_map(&self.entries).remove(key);
    }

    /// Drops every cached variant of `entity`, whatever its filters were.
    pub fn invalidate(&self, entity: &str) {
        lock_map(&self.entries).retain(|key, _| key.entity != entity);
    }

    pub fn len(&self) -> usize {
        lock_map(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached value for `key`, fetching it at most once.
    ///
    /// Concurrent callers with the same key serialize on a per-key gate: the
    /// first runs `fetch`, the rest wait and read the stored result. A failed
    /// fetch stores nothing, so the next caller retries.
    pub async fn get_or_fetch<F, Fut>(&self, key: CacheKey, fetch: F) -> RepositoryResult<Arc<Value>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepositoryResult<Value>>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        let gate = lock_map(&self.in_flight)
            .entry(key.clone())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone();
        let _guard = gate.lock().await;

        // Another caller may have filled the entry while we waited.
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        let fetched = fetch().await;
        lock_map(&self.in_flight).remove(&key);

        let value = Arc::new(fetched?);
        lock_map(&self.entries).insert(key, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::repository::errors::RepositoryError;

    fn pairs(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn list_keys_ignore_pair_order() {
        let a = CacheKey::list(
            "amenities",
            &pairs(&[("page", "1"), ("pageSize", "20"), ("search", "sauna")]),
        );
        let b = CacheKey::list(
            "amenities",
            &pairs(&[("search", "sauna"), ("pageSize", "20"), ("page", "1")]),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn list_keys_distinguish_entities_and_values() {
        let amenities = CacheKey::list("amenities", &pairs(&[("page", "1")]));
        let regions = CacheKey::list("regions", &pairs(&[("page", "1")]));
        let page_two = CacheKey::list("amenities", &pairs(&[("page", "2")]));
        assert_ne!(amenities, regions);
        assert_ne!(amenities, page_two);
    }

    #[test]
    fn invalidate_drops_every_filter_variant_of_the_entity() {
        let cache = QueryCache::new();
        cache.set(
            CacheKey::list("amenities", &pairs(&[("page", "1")])),
            json!({"total": 0}),
        );
        cache.set(
            CacheKey::list("amenities", &pairs(&[("page", "2"), ("search", "ski")])),
            json!({"total": 0}),
        );
        let regions_key = CacheKey::list("regions", &pairs(&[("page", "1")]));
        cache.set(regions_key.clone(), json!({"total": 5}));

        cache.invalidate("amenities");

        assert_eq!(cache.len(), 1);
        assert!(cache.get(&regions_key).is_some());
    }

    #[tokio::test]
    async fn get_or_fetch_hits_the_cache_on_the_second_call() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        let key = CacheKey::list("regions", &pairs(&[("page", "1")]));

        for _ in 0..2 {
            let value = cache
                .get_or_fetch(key.clone(), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(json!({"total": 1}))
                })
                .await
                .expect("fetch succeeds");
            assert_eq!(*value, json!({"total": 1}));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn identical_concurrent_queries_issue_one_request() {
        let cache = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = CacheKey::list("admin-users", &pairs(&[("page", "1")]));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let key = key.clone();
                tokio::spawn(async move {
                    cache
                        .get_or_fetch(key, || async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                            Ok(json!({"total": 9}))
                        })
                        .await
                })
            })
            .collect();

        for task in tasks {
            let value = task.await.expect("task joins").expect("fetch succeeds");
            assert_eq!(*value, json!({"total": 9}));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetches_are_not_cached() {
        let cache = QueryCache::new();
        let key = CacheKey::list("owners", &pairs(&[("page", "1")]));

        let err = cache
            .get_or_fetch(key.clone(), || async {
                Err(RepositoryError::Request("boom".to_string()))
            })
            .await;
        assert!(err.is_err());
        assert!(cache.is_empty());

        let value = cache
            .get_or_fetch(key, || async { Ok(json!({"total": 2})) })
            .await
            .expect("retry succeeds");
        assert_eq!(*value, json!({"total": 2}));
    }
}
