//! Data-access layer between the console's pages and the remote store.
//! - One module per entity, each owning a local mirror of its table.
//! - Read failures land in module state; write failures propagate to the
//!   caller. Either way the mirror stays in its last valid shape.
//! - No cross-module cache: every page mounts its own collection and fetches
//!   independently.

pub mod cars;
pub mod collection;
pub mod crew;
pub mod entity;
pub mod errors;
pub mod packages;
pub mod services;

pub use collection::{Collection, TableState};
pub use entity::{Entity, InsertAt};
pub use errors::DataError;
