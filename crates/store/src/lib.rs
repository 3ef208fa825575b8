//! Client for the hosted table store backing the console.
//!
//! The store exposes four table-level operations; rows cross this boundary
//! as plain JSON objects and are typed one layer up, in the `service` crate.
//! `RestStore` talks to the real store over HTTP, `MemoryStore` is an
//! in-process stand-in for tests and offline runs.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

pub mod errors;
pub mod memory;
pub mod rest;

pub use errors::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;

/// Sort key for full-table reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub const fn asc(column: &'static str) -> Self {
        Self { column, ascending: true }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self { column, ascending: false }
    }
}

/// Table-level access to the remote data store.
///
/// Writes return the materialized row: the store generates ids and
/// timestamps, so the caller's view comes from the response, never from the
/// submitted payload. `update_by_id` affects exactly the row with that id
/// and fails with [`StoreError::RowCount`] when it matches nothing.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn select(&self, table: &str, order: Order) -> Result<Vec<Value>, StoreError>;

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    async fn update_by_id(&self, table: &str, id: Uuid, patch: Value) -> Result<Value, StoreError>;

    async fn delete_by_id(&self, table: &str, id: Uuid) -> Result<(), StoreError>;
}
