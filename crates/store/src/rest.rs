//! HTTP implementation of [`DataStore`] for the hosted store's REST API.
//!
//! Endpoints follow the PostgREST conventions the store exposes: one route
//! per table under `/rest/v1/`, filters as query parameters, writes asking
//! for the materialized row back via `Prefer: return=representation`.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{DataStore, Order, StoreError};

pub struct RestStore {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a non-2xx response into the store-reported failure message.
    async fn api_error(response: Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        StoreError::Api(api_message(status, &body))
    }

    async fn rows_from(response: Response) -> Result<Vec<Value>, StoreError> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}

/// `order=<column>.<direction>` query value.
fn order_param(order: Order) -> String {
    let direction = if order.ascending { "asc" } else { "desc" };
    format!("{}.{}", order.column, direction)
}

/// Best-effort extraction of the `message` field from an error body.
/// Falls back to the raw body, then to the bare status code.
fn api_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("store returned {}", status)
    } else {
        trimmed.to_string()
    }
}

fn exactly_one(mut rows: Vec<Value>) -> Result<Value, StoreError> {
    if rows.len() != 1 {
        return Err(StoreError::RowCount(rows.len()));
    }
    Ok(rows.remove(0))
}

#[async_trait]
impl DataStore for RestStore {
    async fn select(&self, table: &str, order: Order) -> Result<Vec<Value>, StoreError> {
        debug!(table, order = %order_param(order), "select");
        let response = self
            .request(reqwest::Method::GET, table)
            .query(&[("select", "*"), ("order", order_param(order).as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::rows_from(response).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        debug!(table, "insert");
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let rows = Self::rows_from(response).await?;
        exactly_one(rows)
    }

    async fn update_by_id(&self, table: &str, id: Uuid, patch: Value) -> Result<Value, StoreError> {
        debug!(table, %id, "update");
        let response = self
            .request(reqwest::Method::PATCH, table)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let rows = Self::rows_from(response).await?;
        exactly_one(rows)
    }

    async fn delete_by_id(&self, table: &str, id: Uuid) -> Result<(), StoreError> {
        debug!(table, %id, "delete");
        let response = self
            .request(reqwest::Method::DELETE, table)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            warn!(table, %id, error = %err, "delete rejected by store");
            return Err(err);
        }
        Ok(())
    }
}
