use serde::de::DeserializeOwned;
use serde::Serialize;
use store::Order;
use uuid::Uuid;

/// Where a freshly created row lands in the local mirror. Cosmetic,
/// per-entity choice; the list is never re-sorted after insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertAt {
    Head,
    Tail,
}

/// Per-entity policy consumed by [`crate::Collection`]: which table backs
/// the entity, how fetches are ordered, where created rows are placed, and
/// the label used in caller-facing error messages.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create input, without id or timestamps.
    type New: Serialize + Send + Sync;
    /// Partial update; absent fields stay untouched.
    type Changes: Serialize + Send + Sync;

    const TABLE: &'static str;
    const LABEL: &'static str;
    const ORDER: Order;
    const INSERT_AT: InsertAt;

    fn id(&self) -> Uuid;
}
