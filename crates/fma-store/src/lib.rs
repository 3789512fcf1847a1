//! Table-like record storage for Factory Method Adventures.
//!
//! The progression core treats persistence as a generic transactional record
//! store: tables of JSON-field records addressed by composite keys. Higher
//! layers (user progress, completion and badge ledgers) are written against
//! the [`RecordStore`] trait only.
//!
//! # Storage Backends
//!
//! - [`InMemoryRecordStore`] -- `HashMap`-per-table store for tests, demos and
//!   single-node deployments
//!
//! # Design Rules
//!
//! 1. A composite key identifies at most one record per table.
//! 2. `insert_unique` reports [`StoreError::Conflict`] on a duplicate key; it
//!    never overwrites. Idempotent awarding is built on this, not on a
//!    separate existence check.
//! 3. `modify` is an atomic read-modify-write inside the store.
//! 4. Insertion order is recorded and breaks ties in ordered queries.
//! 5. Backend failures surface as [`StoreError::Unavailable`] and are never
//!    retried here.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use record::{decode_fields, encode_fields, u64_field, Fields, Record, RecordKey, Table};
pub use traits::RecordStore;
