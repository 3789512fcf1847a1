//! Persisted record shapes. Field names serialize in camelCase, matching the
//! JSON the presentation layer consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{BadgeKey, UnitKey, UserId};

/// Experience and derived level for one user.
///
/// `level` is always recomputed from `xp` when `xp` changes; it is never
/// written on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: UserId,
    pub xp: u64,
    pub level: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProgress {
    /// A freshly created user: no XP, level 1.
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            xp: 0,
            level: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A finished unit. At most one exists per `(user_id, unit_key)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub user_id: UserId,
    pub unit_key: UnitKey,
    /// Last scene index reached when the unit was completed.
    pub progress_marker: u32,
    pub completed_at: DateTime<Utc>,
}

/// An earned badge. At most one exists per `(user_id, badge_key)`.
///
/// `xp_awarded` is frozen at award time so later catalog changes never
/// rewrite history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRecord {
    pub user_id: UserId,
    pub badge_key: BadgeKey,
    pub badge_name: String,
    pub xp_awarded: u64,
    pub awarded_at: DateTime<Utc>,
}

/// One ranked row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub xp: u64,
    pub level: u64,
}

impl From<&UserProgress> for LeaderboardEntry {
    fn from(progress: &UserProgress) -> Self {
        Self {
            user_id: progress.user_id.clone(),
            xp: progress.xp,
            level: progress.level,
        }
    }
}
