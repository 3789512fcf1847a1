use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use fma_store::{encode_fields, RecordKey, RecordStore, Table};
use fma_types::{CompletionRecord, UnitKey, UserId};
use serde::Serialize;

use crate::error::ProgressResult;

/// Result of a completion attempt. `created` is false when the unit was
/// already completed; `record` is then the original completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOutcome {
    pub created: bool,
    pub record: CompletionRecord,
}

/// Idempotent record of finished units (`storyboard_user_stories`).
#[derive(Clone)]
pub struct CompletionLedger {
    store: Arc<dyn RecordStore>,
}

impl CompletionLedger {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Insert the completion once. A duplicate is a successful no-op.
    pub fn record_completion(
        &self,
        user: &UserId,
        unit: &UnitKey,
        progress_marker: u32,
    ) -> ProgressResult<CompletionOutcome> {
        let record = CompletionRecord {
            user_id: user.clone(),
            unit_key: unit.clone(),
            progress_marker,
            completed_at: Utc::now(),
        };
        let (stored, created) = self.store.insert_or_fetch(
            Table::Completions,
            RecordKey::pair(user.as_str(), unit.as_str()),
            encode_fields(&record)?,
        )?;
        if !created {
            tracing::debug!(user = %user, unit = %unit, "unit already completed");
        }
        Ok(CompletionOutcome {
            created,
            record: stored.decode()?,
        })
    }

    pub fn is_completed(&self, user: &UserId, unit: &UnitKey) -> ProgressResult<bool> {
        let key = RecordKey::pair(user.as_str(), unit.as_str());
        Ok(self.store.get(Table::Completions, &key)?.is_some())
    }

    pub fn list_completed(&self, user: &UserId) -> ProgressResult<HashSet<UnitKey>> {
        Ok(self
            .list_records(user)?
            .into_iter()
            .map(|r| r.unit_key)
            .collect())
    }

    /// Every completion for `user`, oldest first.
    pub fn list_records(&self, user: &UserId) -> ProgressResult<Vec<CompletionRecord>> {
        self.store
            .scan_prefix(Table::Completions, &[user.as_str()])?
            .iter()
            .map(|r| r.decode().map_err(Into::into))
            .collect()
    }
}
