use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Per-kind glue the generic store needs from a stored entity.
///
/// `id` and `created_at` are owned by the store: it assigns both on create
/// and `replace` must leave them untouched.
pub trait Record: Clone + Send + Sync + 'static {
    /// Input shape carrying every resource-specific field, minus id/created_at.
    type Input: Send;

    /// Entity name used in not-found errors, e.g. `"Todo"`.
    const ENTITY: &'static str;

    fn id(&self) -> &str;

    /// Build a fresh record from store-assigned identity plus caller input.
    fn build(id: String, created_at: DateTime<Utc>, input: Self::Input) -> Self;

    /// Full-replacement update: every resource-specific field takes the
    /// input's value (absent stays absent), id/created_at are preserved.
    fn replace(&mut self, input: Self::Input);
}

/// Generic in-memory key-value store providing CRUD over one resource kind.
///
/// Holds a `HashMap<String, R>` behind a reader-writer lock; every key equals
/// the id of its value. One instance per resource kind, no cross-instance
/// coordination. State lives for the process lifetime only.
#[derive(Clone)]
pub struct MemStore<R> {
    inner: Arc<RwLock<HashMap<String, R>>>,
}

impl<R: Record> MemStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Create a store pre-populated with seed records, keyed by their ids.
    pub fn with_seed(records: Vec<R>) -> Self {
        let map = records.into_iter().map(|r| (r.id().to_string(), r)).collect();
        Self { inner: Arc::new(RwLock::new(map)) }
    }

    /// List records matching `filter`, capped at `limit` after filtering.
    ///
    /// Iteration order is map order, i.e. unspecified; under a limit smaller
    /// than the matching count the returned subset is non-deterministic.
    pub async fn list<F>(&self, filter: F, limit: Option<usize>) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let map = self.inner.read().await;
        let mut result = Vec::new();
        for record in map.values() {
            if !filter(record) {
                continue;
            }
            // cap check precedes the push so a zero limit yields nothing
            if limit.is_some_and(|n| result.len() >= n) {
                break;
            }
            result.push(record.clone());
        }
        result
    }

    /// Insert a new record with a generated id and current timestamp.
    pub async fn create(&self, input: R::Input) -> R {
        let record = R::build(Uuid::new_v4().to_string(), Utc::now(), input);
        let mut map = self.inner.write().await;
        map.insert(record.id().to_string(), record.clone());
        record
    }

    /// Look up a record by id.
    pub async fn get(&self, id: &str) -> Result<R, ServiceError> {
        let map = self.inner.read().await;
        map.get(id).cloned().ok_or_else(|| ServiceError::not_found(R::ENTITY))
    }

    /// Replace every resource-specific field of an existing record.
    /// Leaves the map untouched when the id is absent.
    pub async fn update(&self, id: &str, input: R::Input) -> Result<R, ServiceError> {
        let mut map = self.inner.write().await;
        let record = map.get_mut(id).ok_or_else(|| ServiceError::not_found(R::ENTITY))?;
        record.replace(input);
        Ok(record.clone())
    }

    /// Remove a record by id. A retried delete reports `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        match map.remove(id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found(R::ENTITY)),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<R: Record> Default for MemStore<R> {
    fn default() -> Self { Self::new() }
}
