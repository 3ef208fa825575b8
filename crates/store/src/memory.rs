//! In-process [`DataStore`] used by tests and offline runs.
//!
//! Behaves like the hosted store from the caller's side: ids and timestamps
//! are generated on insert, selects honor the requested order, and a
//! configurable failure can be injected to exercise error paths.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{DataStore, Order, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Value>>>,
    failure: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with a store-reported message.
    /// An empty message models a failure that carries no text.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    pub async fn heal(&self) {
        *self.failure.write().await = None;
    }

    async fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.read().await.clone() {
            Some(message) => Err(StoreError::Api(message)),
            None => Ok(()),
        }
    }
}

fn compare_column(a: &Value, b: &Value, column: &str) -> Ordering {
    let (a, b) = (a.get(column), b.get(column));
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn row_id_matches(row: &Value, id: Uuid) -> bool {
    row.get("id")
        .and_then(Value::as_str)
        .map_or(false, |s| s == id.to_string())
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn select(&self, table: &str, order: Order) -> Result<Vec<Value>, StoreError> {
        self.check_failure().await?;
        let tables = self.tables.read().await;
        let mut rows = tables.get(table).cloned().unwrap_or_default();
        rows.sort_by(|a, b| {
            let ord = compare_column(a, b, order.column);
            if order.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Value) -> Result<Value, StoreError> {
        self.check_failure().await?;
        let object = row
            .as_object_mut()
            .ok_or_else(|| StoreError::Parse("insert payload must be an object".into()))?;
        let now = json!(Utc::now());
        object.insert("id".into(), json!(Uuid::new_v4()));
        object.entry("created_at").or_insert(now.clone());
        object.entry("updated_at").or_insert(now);
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(row)
    }

    async fn update_by_id(&self, table: &str, id: Uuid, patch: Value) -> Result<Value, StoreError> {
        self.check_failure().await?;
        let changes = patch
            .as_object()
            .ok_or_else(|| StoreError::Parse("update payload must be an object".into()))?
            .clone();
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.to_string()).or_default();
        let row = rows
            .iter_mut()
            .find(|r| row_id_matches(r, id))
            .ok_or(StoreError::RowCount(0))?;
        let object = row
            .as_object_mut()
            .ok_or_else(|| StoreError::Parse("stored row is not an object".into()))?;
        for (key, value) in changes {
            object.insert(key, value);
        }
        Ok(row.clone())
    }

    async fn delete_by_id(&self, table: &str, id: Uuid) -> Result<(), StoreError> {
        self.check_failure().await?;
        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|r| !row_id_matches(r, id));
        }
        Ok(())
    }
}
