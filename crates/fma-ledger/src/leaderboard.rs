use std::sync::Arc;

use fma_store::{RecordStore, Table};
use fma_types::{LeaderboardEntry, UserProgress};

use crate::error::ProgressResult;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Read-only ranking of users by XP.
#[derive(Clone)]
pub struct Leaderboard {
    store: Arc<dyn RecordStore>,
    default_limit: usize,
    max_limit: usize,
}

impl Leaderboard {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_limits(store, DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT)
    }

    pub fn with_limits(store: Arc<dyn RecordStore>, default_limit: usize, max_limit: usize) -> Self {
        Self {
            store,
            default_limit,
            max_limit: max_limit.max(1),
        }
    }

    /// Absent or zero falls back to the default; anything above the cap is
    /// clamped.
    pub fn effective_limit(&self, limit: Option<usize>) -> usize {
        match limit {
            None | Some(0) => self.default_limit,
            Some(n) => n,
        }
        .min(self.max_limit)
    }

    /// Top users by XP, descending. Equal XP keeps creation order.
    pub fn top_users(&self, limit: Option<usize>) -> ProgressResult<Vec<LeaderboardEntry>> {
        let limit = self.effective_limit(limit);
        self.store
            .query_top_n(Table::Users, "xp", true, limit)?
            .iter()
            .map(|r| {
                let progress: UserProgress = r.decode()?;
                Ok(LeaderboardEntry::from(&progress))
            })
            .collect()
    }
}
