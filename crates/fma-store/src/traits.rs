use crate::error::{StoreError, StoreResult};
use crate::record::{Fields, Record, RecordKey, Table};

/// Table-like persistent record store.
///
/// All implementations must satisfy these invariants:
/// - A composite key identifies at most one record per table, enforced by
///   the store itself (a uniqueness constraint, not a caller-side check).
/// - `insert_unique` never overwrites; a duplicate key yields
///   [`StoreError::Conflict`].
/// - `modify` runs the closure and commits its result atomically with
///   respect to every other write on the same record.
/// - Records are never deleted by the progression core.
/// - Transient backend failures surface as [`StoreError::Unavailable`].
pub trait RecordStore: Send + Sync {
    /// Read a record by key.
    ///
    /// Returns `Ok(None)` if the record does not exist.
    fn get(&self, table: Table, key: &RecordKey) -> StoreResult<Option<Record>>;

    /// Insert a record, failing with [`StoreError::Conflict`] if the key is
    /// already taken.
    fn insert_unique(&self, table: Table, key: RecordKey, fields: Fields) -> StoreResult<Record>;

    /// Atomically apply `f` to a record's fields and persist the result.
    ///
    /// If `f` returns an error nothing is written and the error is returned.
    /// Fails with [`StoreError::NotFound`] if the record does not exist.
    fn modify(
        &self,
        table: Table,
        key: &RecordKey,
        f: &mut dyn FnMut(&mut Fields) -> StoreResult<()>,
    ) -> StoreResult<Record>;

    /// All records whose key starts with `prefix`, in insertion order.
    fn scan_prefix(&self, table: Table, prefix: &[&str]) -> StoreResult<Vec<Record>>;

    /// Up to `limit` records ordered by a numeric `order_field`.
    ///
    /// Ties (and records missing the field) keep insertion order; missing
    /// fields sort after present ones.
    fn query_top_n(
        &self,
        table: Table,
        order_field: &str,
        descending: bool,
        limit: usize,
    ) -> StoreResult<Vec<Record>>;

    /// Number of records in a table.
    fn count(&self, table: Table) -> StoreResult<usize>;

    /// Unique insert that returns the existing record on conflict.
    ///
    /// The boolean is `true` when this call created the record. Because
    /// records are never deleted, a conflict guarantees the follow-up read
    /// finds the winner.
    fn insert_or_fetch(
        &self,
        table: Table,
        key: RecordKey,
        fields: Fields,
    ) -> StoreResult<(Record, bool)> {
        match self.insert_unique(table, key.clone(), fields) {
            Ok(record) => Ok((record, true)),
            Err(e) if e.is_conflict() => {
                let existing = self
                    .get(table, &key)?
                    .ok_or(StoreError::NotFound { table, key })?;
                Ok((existing, false))
            }
            Err(e) => Err(e),
        }
    }

    /// Merge `fields` into an existing record.
    fn update(&self, table: Table, key: &RecordKey, fields: Fields) -> StoreResult<Record> {
        self.modify(table, key, &mut |current| {
            for (name, value) in &fields {
                current.insert(name.clone(), value.clone());
            }
            Ok(())
        })
    }
}
