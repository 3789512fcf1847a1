use std::sync::Arc;

use chrono::Utc;
use fma_store::{encode_fields, RecordKey, RecordStore, Table};
use fma_types::{BadgeKey, BadgeRecord, UserId};
use serde::Serialize;

use crate::error::ProgressResult;

/// Result of a badge award. `awarded` is true only for the call whose
/// insert won; that caller alone grants the badge XP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardOutcome {
    pub awarded: bool,
    pub record: BadgeRecord,
}

/// Idempotent record of earned badges (`storyboard_user_badges`).
#[derive(Clone)]
pub struct BadgeLedger {
    store: Arc<dyn RecordStore>,
}

impl BadgeLedger {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn award_badge(
        &self,
        user: &UserId,
        badge: &BadgeKey,
        badge_name: &str,
        xp_awarded: u64,
    ) -> ProgressResult<AwardOutcome> {
        let record = BadgeRecord {
            user_id: user.clone(),
            badge_key: badge.clone(),
            badge_name: badge_name.to_owned(),
            xp_awarded,
            awarded_at: Utc::now(),
        };
        let (stored, awarded) = self.store.insert_or_fetch(
            Table::Badges,
            RecordKey::pair(user.as_str(), badge.as_str()),
            encode_fields(&record)?,
        )?;
        if awarded {
            tracing::info!(user = %user, badge = %badge, xp = xp_awarded, "badge awarded");
        } else {
            tracing::debug!(user = %user, badge = %badge, "badge already awarded");
        }
        Ok(AwardOutcome {
            awarded,
            record: stored.decode()?,
        })
    }

    /// Every badge `user` holds, in award order.
    pub fn list_badges(&self, user: &UserId) -> ProgressResult<Vec<BadgeRecord>> {
        self.store
            .scan_prefix(Table::Badges, &[user.as_str()])?
            .iter()
            .map(|r| r.decode().map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fma_store::InMemoryRecordStore;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn badge(s: &str) -> BadgeKey {
        BadgeKey::new(s).unwrap()
    }

    #[test]
    fn duplicate_award_keeps_the_first_record() {
        let ledger = BadgeLedger::new(Arc::new(InMemoryRecordStore::new()));
        let first = ledger
            .award_badge(&uid("u1"), &badge("pizza"), "Pizza Chef", 50)
            .unwrap();
        assert!(first.awarded);

        let second = ledger
            .award_badge(&uid("u1"), &badge("pizza"), "Renamed", 500)
            .unwrap();
        assert!(!second.awarded);
        assert_eq!(second.record.badge_name, "Pizza Chef");
        assert_eq!(second.record.xp_awarded, 50);

        let badges = ledger.list_badges(&uid("u1")).unwrap();
        assert_eq!(badges.len(), 1);
    }

    #[test]
    fn unknown_badge_keys_are_accepted() {
        let ledger = BadgeLedger::new(Arc::new(InMemoryRecordStore::new()));
        ledger
            .award_badge(&uid("u1"), &badge("community_helper"), "Helper", 0)
            .unwrap();
        let held = ledger.list_badges(&uid("u1")).unwrap();
        assert_eq!(held[0].badge_key.as_str(), "community_helper");
        assert!(ledger.list_badges(&uid("u2")).unwrap().is_empty());
    }

    #[test]
    fn badges_list_in_award_order() {
        let ledger = BadgeLedger::new(Arc::new(InMemoryRecordStore::new()));
        for key in ["coffee", "pizza", "phase_1_mastery"] {
            ledger.award_badge(&uid("u1"), &badge(key), key, 50).unwrap();
        }
        let keys: Vec<_> = ledger
            .list_badges(&uid("u1"))
            .unwrap()
            .into_iter()
            .map(|r| r.badge_key.to_string())
            .collect();
        assert_eq!(keys, ["coffee", "pizza", "phase_1_mastery"]);
    }
}
