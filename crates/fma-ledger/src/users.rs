//! User progress repository: owns the `storyboard_users` table.

use std::sync::Arc;

use chrono::Utc;
use fma_engine::ProgressionRules;
use fma_store::{encode_fields, u64_field, RecordKey, RecordStore, StoreError, Table};
use fma_types::{UserId, UserProgress};
use serde_json::Value;

use crate::error::{ProgressError, ProgressResult};

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn RecordStore>,
    rules: ProgressionRules,
}

fn key(user: &UserId) -> RecordKey {
    RecordKey::single(user.as_str())
}

impl UserRepository {
    pub fn new(store: Arc<dyn RecordStore>, rules: ProgressionRules) -> Self {
        Self { store, rules }
    }

    pub fn get(&self, user: &UserId) -> ProgressResult<Option<UserProgress>> {
        match self.store.get(Table::Users, &key(user))? {
            Some(record) => Ok(Some(record.decode()?)),
            None => Ok(None),
        }
    }

    /// Return the user's progress, creating `{xp: 0, level: 1}` on first
    /// reference. Concurrent first accesses converge on one record.
    pub fn get_or_create(&self, user: &UserId) -> ProgressResult<UserProgress> {
        let fresh = encode_fields(&UserProgress::new(user.clone(), Utc::now()))?;
        let (record, created) = self.store.insert_or_fetch(Table::Users, key(user), fresh)?;
        if created {
            tracing::info!(user = %user, "created user progress");
        }
        Ok(record.decode()?)
    }

    /// Add `delta` XP and recompute the level in one atomic write.
    pub fn apply_xp_delta(&self, user: &UserId, delta: u64) -> ProgressResult<UserProgress> {
        self.write_xp(user, |current| {
            current.checked_add(delta).ok_or_else(|| StoreError::Rejected {
                reason: format!("xp overflow: {current} + {delta}"),
            })
        })
    }

    /// Set XP to an absolute value. Lowering XP is rejected.
    pub fn set_xp(&self, user: &UserId, xp: u64) -> ProgressResult<UserProgress> {
        self.write_xp(user, |current| {
            if xp < current {
                Err(StoreError::Rejected {
                    reason: format!("xp cannot decrease (current {current}, requested {xp})"),
                })
            } else {
                Ok(xp)
            }
        })
    }

    fn write_xp(
        &self,
        user: &UserId,
        next_xp: impl Fn(u64) -> Result<u64, StoreError>,
    ) -> ProgressResult<UserProgress> {
        let rules = &self.rules;
        let now = serde_json::to_value(Utc::now())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let result = self.store.modify(Table::Users, &key(user), &mut |fields| {
            let current = u64_field(fields, "xp")?;
            let xp = next_xp(current)?;
            fields.insert("xp".into(), Value::from(xp));
            fields.insert("level".into(), Value::from(rules.level_from_xp(xp)));
            fields.insert("updatedAt".into(), now.clone());
            Ok(())
        });
        match result {
            Ok(record) => Ok(record.decode()?),
            Err(StoreError::NotFound { .. }) => Err(ProgressError::UserNotFound(user.clone())),
            Err(e) => Err(e.into()),
        }
    }
}
