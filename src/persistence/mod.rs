//! Persistence of the session record.
//!
//! The record is a single JSON value under one well-known key. This module
//! owns its wire format, the schema check applied when reading it back, the
//! conductor expiry rule, and the store abstraction it is written through.
//!
//! Loading never fails: an unreadable or corrupt record degrades to "no
//! session" (and a corrupt one is deleted). Writes report storage failures
//! to the caller, which decides whether durability matters.

mod error;
mod expiry;
mod file_store;
mod policy;
mod schema;
mod store;

pub use error::StorageError;
pub use expiry::{is_expired, shift_horizon, SHIFT_HORIZON_MS};
pub use file_store::FileStore;
pub use policy::{restore, InitialState, LoadOutcome, PersistencePolicy};
pub use schema::{parse_record, ParsedRecord};
pub use store::{KeyValueStore, MemoryStore};
