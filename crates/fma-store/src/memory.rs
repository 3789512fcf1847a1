use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::record::{Fields, Record, RecordKey, Table};
use crate::traits::RecordStore;

type TableMap = HashMap<RecordKey, Record>;

/// In-memory, HashMap-per-table record store.
///
/// Each table sits behind its own `RwLock`. Unique inserts and `modify`
/// run under the table's write lock, which gives the same single-winner
/// guarantee as a database uniqueness constraint. Data is lost when the
/// store is dropped.
pub struct InMemoryRecordStore {
    tables: HashMap<Table, RwLock<TableMap>>,
    next_seq: AtomicU64,
}

impl InMemoryRecordStore {
    /// Create a new empty store with every table present.
    pub fn new() -> Self {
        Self {
            tables: Table::ALL
                .iter()
                .map(|t| (*t, RwLock::new(HashMap::new())))
                .collect(),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Total number of records across all tables.
    pub fn len(&self) -> usize {
        Table::ALL
            .iter()
            .map(|t| self.count(*t).unwrap_or(0))
            .sum()
    }

    /// Returns `true` if no table holds a record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, table: Table) -> StoreResult<&RwLock<TableMap>> {
        self.tables
            .get(&table)
            .ok_or_else(|| StoreError::Unavailable(format!("table {table} is not mounted")))
    }

    fn check_key(table: Table, key: &RecordKey) -> StoreResult<()> {
        if key.len() != table.key_arity() {
            return Err(StoreError::InvalidKey {
                table,
                reason: format!(
                    "expected {} key part(s), got {}",
                    table.key_arity(),
                    key.len()
                ),
            });
        }
        Ok(())
    }
}

fn poisoned(table: Table) -> StoreError {
    StoreError::Unavailable(format!("lock poisoned on {table}"))
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, table: Table, key: &RecordKey) -> StoreResult<Option<Record>> {
        let map = self.table(table)?.read().map_err(|_| poisoned(table))?;
        Ok(map.get(key).cloned())
    }

    fn insert_unique(&self, table: Table, key: RecordKey, fields: Fields) -> StoreResult<Record> {
        Self::check_key(table, &key)?;
        let mut map = self.table(table)?.write().map_err(|_| poisoned(table))?;
        if map.contains_key(&key) {
            tracing::trace!(%table, %key, "unique insert lost to existing record");
            return Err(StoreError::Conflict { table, key });
        }
        let record = Record {
            table,
            key: key.clone(),
            seq: self.next_seq.fetch_add(1, AtomicOrdering::Relaxed),
            fields,
        };
        map.insert(key, record.clone());
        Ok(record)
    }

    fn modify(
        &self,
        table: Table,
        key: &RecordKey,
        f: &mut dyn FnMut(&mut Fields) -> StoreResult<()>,
    ) -> StoreResult<Record> {
        let mut map = self.table(table)?.write().map_err(|_| poisoned(table))?;
        let record = map.get_mut(key).ok_or_else(|| StoreError::NotFound {
            table,
            key: key.clone(),
        })?;
        // Work on a copy so a failing closure leaves the record untouched.
        let mut fields = record.fields.clone();
        f(&mut fields)?;
        record.fields = fields;
        Ok(record.clone())
    }

    fn scan_prefix(&self, table: Table, prefix: &[&str]) -> StoreResult<Vec<Record>> {
        let map = self.table(table)?.read().map_err(|_| poisoned(table))?;
        let mut records: Vec<Record> = map
            .values()
            .filter(|r| r.key.starts_with(prefix))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.seq);
        Ok(records)
    }

    fn query_top_n(
        &self,
        table: Table,
        order_field: &str,
        descending: bool,
        limit: usize,
    ) -> StoreResult<Vec<Record>> {
        let map = self.table(table)?.read().map_err(|_| poisoned(table))?;
        let mut records: Vec<Record> = map.values().cloned().collect();
        drop(map);

        records.sort_by(|a, b| {
            let ord = match (a.field(order_field), b.field(order_field)) {
                (Some(x), Some(y)) => {
                    let o = compare_values(x, y);
                    if descending {
                        o.reverse()
                    } else {
                        o
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            ord.then(a.seq.cmp(&b.seq))
        });
        records.truncate(limit);
        Ok(records)
    }

    fn count(&self, table: Table) -> StoreResult<usize> {
        let map = self.table(table)?.read().map_err(|_| poisoned(table))?;
        Ok(map.len())
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    match (a.as_str(), b.as_str()) {
        (Some(x), Some(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &self.len())
            .finish()
    }
}
