//! Generic state container behind each entity module.
//!
//! A `Collection` mirrors one remote table: an ordered row sequence plus a
//! loading flag and the last fetch error. Operations talk to the store first
//! and patch the mirror only from the store's response, so a failed call
//! always leaves the mirror exactly as it was.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use store::{DataStore, StoreError};

use crate::entity::{Entity, InsertAt};
use crate::errors::DataError;

/// Snapshot of a module's state, cloned out for rendering.
#[derive(Clone, Debug)]
pub struct TableState<E> {
    pub rows: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
}

struct Inner<E> {
    rows: Vec<E>,
    loading: bool,
    error: Option<String>,
    /// Sequence number handed to the most recent fetch.
    fetch_seq: u64,
    /// Sequence number of the last fetch response (or mutation) that was
    /// allowed to touch the mirror. A fetch response with a sequence at or
    /// below this is stale and gets discarded.
    applied_seq: u64,
}

/// Data-access module for one entity table. Cheap to clone; clones share
/// the same mirror.
pub struct Collection<E: Entity> {
    data_store: Arc<dyn DataStore>,
    inner: Arc<RwLock<Inner<E>>>,
}

impl<E: Entity> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self { data_store: self.data_store.clone(), inner: self.inner.clone() }
    }
}

fn decode<E: Entity>(row: Value) -> Result<E, StoreError> {
    serde_json::from_value(row).map_err(|e| StoreError::Parse(e.to_string()))
}

impl<E: Entity> Collection<E> {
    /// Empty mirror in the loading state; no fetch has run yet.
    pub fn new(data_store: Arc<dyn DataStore>) -> Self {
        let inner = Inner {
            rows: Vec::new(),
            loading: true,
            error: None,
            fetch_seq: 0,
            applied_seq: 0,
        };
        Self { data_store, inner: Arc::new(RwLock::new(inner)) }
    }

    /// Construct and run the initial fetch, as a page does on mount.
    pub async fn mount(data_store: Arc<dyn DataStore>) -> Self {
        let collection = Self::new(data_store);
        collection.refetch().await;
        collection
    }

    pub async fn state(&self) -> TableState<E> {
        let inner = self.inner.read().await;
        TableState {
            rows: inner.rows.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    pub async fn rows(&self) -> Vec<E> {
        self.inner.read().await.rows.clone()
    }

    /// Replace the mirror with the table's current rows.
    ///
    /// On failure the previous rows are kept and the error message is stored
    /// for the page to display; nothing propagates. A response that resolves
    /// after a newer fetch or a mutation has already touched the mirror is
    /// discarded (it still clears the loading flag if it was the latest
    /// fetch issued).
    pub async fn refetch(&self) {
        let seq = {
            let mut inner = self.inner.write().await;
            inner.loading = true;
            inner.fetch_seq += 1;
            inner.fetch_seq
        };

        let result = match self.data_store.select(E::TABLE, E::ORDER).await {
            Ok(rows) => rows.into_iter().map(decode::<E>).collect::<Result<Vec<E>, _>>(),
            Err(e) => Err(e),
        };

        let mut inner = self.inner.write().await;
        if seq == inner.fetch_seq {
            inner.loading = false;
        }
        if seq <= inner.applied_seq {
            debug!(table = E::TABLE, seq, "discarding stale fetch response");
            return;
        }
        inner.applied_seq = seq;
        match result {
            Ok(rows) => {
                debug!(table = E::TABLE, count = rows.len(), "fetched");
                inner.rows = rows;
                inner.error = None;
            }
            Err(e) => {
                warn!(table = E::TABLE, error = %e, "fetch failed");
                inner.error = Some(e.message().unwrap_or_else(|| "An error occurred".into()));
            }
        }
    }

    /// Insert one row and place the store's materialized copy at the
    /// entity's insert position. Failures propagate; the mirror and the
    /// module's error field are left untouched.
    pub async fn create(&self, input: E::New) -> Result<E, DataError> {
        let wrap = |e: StoreError| DataError::write("add", E::LABEL, e);
        let payload = serde_json::to_value(&input)
            .map_err(|e| wrap(StoreError::Parse(e.to_string())))?;
        let created: E = self
            .data_store
            .insert(E::TABLE, payload)
            .await
            .and_then(decode)
            .map_err(wrap)?;

        let mut inner = self.inner.write().await;
        inner.applied_seq = inner.fetch_seq;
        match E::INSERT_AT {
            InsertAt::Head => inner.rows.insert(0, created.clone()),
            InsertAt::Tail => inner.rows.push(created.clone()),
        }
        debug!(table = E::TABLE, id = %created.id(), "created");
        Ok(created)
    }

    /// Apply a partial update to the row with `id`, stamping a fresh
    /// `updated_at`. The store must return exactly the updated row; it
    /// replaces the matching local row in place, position unchanged.
    pub async fn update(&self, id: Uuid, changes: E::Changes) -> Result<E, DataError> {
        let wrap = |e: StoreError| DataError::write("update", E::LABEL, e);
        let mut patch = serde_json::to_value(&changes)
            .map_err(|e| wrap(StoreError::Parse(e.to_string())))?;
        let object = patch
            .as_object_mut()
            .ok_or_else(|| wrap(StoreError::Parse("changes must serialize to an object".into())))?;
        object.insert("updated_at".into(), serde_json::json!(chrono::Utc::now()));

        let updated: E = self
            .data_store
            .update_by_id(E::TABLE, id, patch)
            .await
            .and_then(decode)
            .map_err(wrap)?;

        let mut inner = self.inner.write().await;
        inner.applied_seq = inner.fetch_seq;
        if let Some(slot) = inner.rows.iter_mut().find(|row| row.id() == id) {
            *slot = updated.clone();
        }
        debug!(table = E::TABLE, %id, "updated");
        Ok(updated)
    }

    /// Delete the row with `id` and drop it from the mirror.
    pub async fn delete(&self, id: Uuid) -> Result<(), DataError> {
        self.data_store
            .delete_by_id(E::TABLE, id)
            .await
            .map_err(|e| DataError::write("delete", E::LABEL, e))?;

        let mut inner = self.inner.write().await;
        inner.applied_seq = inner.fetch_seq;
        inner.rows.retain(|row| row.id() != id);
        debug!(table = E::TABLE, %id, "deleted");
        Ok(())
    }
}
