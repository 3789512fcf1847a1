//! Progression control flow: validate, lazily create the user, check the
//! unlock chain, record the completion, then grant unit XP and the badge.

use std::sync::Arc;

use fma_engine::{ProgressionEngine, UnitKind, UnitUnlock};
use fma_store::RecordStore;
use fma_types::{
    BadgeKey, BadgeRecord, CompletionRecord, LeaderboardEntry, UnitKey, UserId, UserProgress,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::badges::{AwardOutcome, BadgeLedger};
use crate::completions::{CompletionLedger, CompletionOutcome};
use crate::error::{ProgressError, ProgressResult};
use crate::leaderboard::{Leaderboard, DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};
use crate::users::UserRepository;

/// Service behaviour switches, loadable from the `[service]` config table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Reject completions and catalog badge awards for locked units.
    pub enforce_unlocks: bool,
    pub default_leaderboard_limit: usize,
    pub max_leaderboard_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            enforce_unlocks: true,
            default_leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            max_leaderboard_limit: MAX_LEADERBOARD_LIMIT,
        }
    }
}

/// Badge side of a unit outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeOutcome {
    pub badge_key: BadgeKey,
    pub badge_name: String,
    /// False when the badge was already held; no XP was granted then.
    pub awarded: bool,
    pub xp_awarded: u64,
}

/// Everything that happened when a quiz or story was finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOutcome {
    pub unit_key: UnitKey,
    pub already_completed: bool,
    /// Unit XP plus any badge bonus granted by this call.
    pub xp_gained: u64,
    pub badge: Option<BadgeOutcome>,
    pub leveled_up: bool,
    pub progress: UserProgress,
}

/// Result of a direct badge award, with the user's progress afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeAward {
    pub awarded: bool,
    pub badge: BadgeRecord,
    pub progress: UserProgress,
}

/// Stateless facade over one record store. Cheap to clone; every clone
/// shares the store and engine.
#[derive(Clone)]
pub struct ProgressionService {
    engine: Arc<ProgressionEngine>,
    config: ServiceConfig,
    users: UserRepository,
    completions: CompletionLedger,
    badges: BadgeLedger,
    leaderboard: Leaderboard,
}

impl ProgressionService {
    pub fn new(store: Arc<dyn RecordStore>, engine: ProgressionEngine, config: ServiceConfig) -> Self {
        let users = UserRepository::new(store.clone(), engine.rules().clone());
        let leaderboard = Leaderboard::with_limits(
            store.clone(),
            config.default_leaderboard_limit,
            config.max_leaderboard_limit,
        );
        Self {
            engine: Arc::new(engine),
            config,
            users,
            completions: CompletionLedger::new(store.clone()),
            badges: BadgeLedger::new(store),
            leaderboard,
        }
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn get_or_create_user(&self, user: &UserId) -> ProgressResult<UserProgress> {
        self.users.get_or_create(user)
    }

    /// Set absolute XP. Values below the current XP are rejected.
    pub fn set_xp(&self, user: &UserId, xp: i64) -> ProgressResult<UserProgress> {
        let xp = non_negative("xp", xp)?;
        let before = self.users.get_or_create(user)?;
        let after = self.users.set_xp(user, xp)?;
        log_level_change(&before, &after);
        Ok(after)
    }

    pub fn add_xp(&self, user: &UserId, delta: i64) -> ProgressResult<UserProgress> {
        let delta = non_negative("delta", delta)?;
        let before = self.users.get_or_create(user)?;
        let after = self.users.apply_xp_delta(user, delta)?;
        log_level_change(&before, &after);
        Ok(after)
    }

    pub fn list_completions(&self, user: &UserId) -> ProgressResult<Vec<CompletionRecord>> {
        self.completions.list_records(user)
    }

    /// Record a completion without granting XP. Locked units are refused
    /// when unlock enforcement is on.
    ///
    /// Unit keys are folded to their canonical spelling first, here and in
    /// the other unit operations, so aliases such as `"03"` or `"Coffee"`
    /// share the catalog unit's record and unlock chain.
    pub fn record_completion(
        &self,
        user: &UserId,
        unit: &UnitKey,
        progress_marker: Option<i64>,
    ) -> ProgressResult<CompletionOutcome> {
        let unit = &unit.canonical();
        let marker = progress_marker_from(progress_marker)?;
        self.users.get_or_create(user)?;
        self.ensure_unlocked(user, unit)?;
        self.completions.record_completion(user, unit, marker)
    }

    pub fn list_badges(&self, user: &UserId) -> ProgressResult<Vec<BadgeRecord>> {
        self.badges.list_badges(user)
    }

    /// Award a badge directly. `xp_awarded` is added to the user's XP only
    /// by the call that actually inserts the badge.
    pub fn award_badge(
        &self,
        user: &UserId,
        badge: &BadgeKey,
        badge_name: &str,
        xp_awarded: i64,
    ) -> ProgressResult<BadgeAward> {
        let xp_awarded = non_negative("xpAwarded", xp_awarded)?;
        if badge_name.trim().is_empty() {
            return Err(ProgressError::validation("badgeName must not be empty"));
        }
        let mut progress = self.users.get_or_create(user)?;
        if let Some(unit) = self.engine.catalog().unit_for_badge(badge) {
            self.ensure_unlocked(user, &unit.key)?;
        }

        let AwardOutcome { awarded, record } =
            self.badges.award_badge(user, badge, badge_name, xp_awarded)?;
        if awarded && xp_awarded > 0 {
            let before = progress;
            progress = self.users.apply_xp_delta(user, xp_awarded)?;
            log_level_change(&before, &progress);
        }
        Ok(BadgeAward {
            awarded,
            badge: record,
            progress,
        })
    }

    pub fn unlock_status(&self, user: &UserId) -> ProgressResult<Vec<UnitUnlock>> {
        let completed = self.completions.list_completed(user)?;
        Ok(self.engine.unlock_status(&completed))
    }

    pub fn leaderboard(&self, limit: Option<usize>) -> ProgressResult<Vec<LeaderboardEntry>> {
        self.leaderboard.top_users(limit)
    }

    /// Finish a quiz with `correct` of `total` answers right.
    pub fn submit_quiz(
        &self,
        user: &UserId,
        unit: &UnitKey,
        correct: i64,
        total: i64,
    ) -> ProgressResult<UnitOutcome> {
        let unit = &unit.canonical();
        self.expect_kind(unit, UnitKind::Quiz)?;
        let correct = u32::try_from(correct)
            .map_err(|_| ProgressError::validation(format!("correct out of range: {correct}")))?;
        let total = u32::try_from(total)
            .map_err(|_| ProgressError::validation(format!("total out of range: {total}")))?;
        if total == 0 {
            return Err(ProgressError::validation("total must be at least 1"));
        }
        if correct > total {
            return Err(ProgressError::validation(format!(
                "correct ({correct}) exceeds total ({total})"
            )));
        }
        self.complete_unit(user, unit, correct, total, 0)
    }

    /// Finish a story, remembering the last scene reached.
    pub fn complete_story(
        &self,
        user: &UserId,
        unit: &UnitKey,
        progress_marker: Option<i64>,
    ) -> ProgressResult<UnitOutcome> {
        let unit = &unit.canonical();
        self.expect_kind(unit, UnitKind::Story)?;
        let marker = progress_marker_from(progress_marker)?;
        self.complete_unit(user, unit, 0, 0, marker)
    }

    fn complete_unit(
        &self,
        user: &UserId,
        unit: &UnitKey,
        correct: u32,
        total: u32,
        marker: u32,
    ) -> ProgressResult<UnitOutcome> {
        if let Some(owner) = self.engine.badge_claimed_by(unit) {
            return Err(ProgressError::validation(format!(
                "unit {unit} is not in the catalog and its badge belongs to unit {}",
                owner.key
            )));
        }
        let before = self.users.get_or_create(user)?;
        self.ensure_unlocked(user, unit)?;

        let completion = self.completions.record_completion(user, unit, marker)?;
        if !completion.created {
            return Ok(UnitOutcome {
                unit_key: unit.clone(),
                already_completed: true,
                xp_gained: 0,
                badge: None,
                leveled_up: false,
                progress: before,
            });
        }

        let mut xp_gained = self.engine.xp_for_unit_completion(unit, correct, total);
        let mut progress = if xp_gained > 0 {
            self.users.apply_xp_delta(user, xp_gained)?
        } else {
            before.clone()
        };

        let badge = if self.engine.is_badge_eligible(unit, correct, total) {
            let def = self.engine.badge_for(unit);
            let award = self.badges.award_badge(user, &def.key, &def.name, def.xp_value)?;
            if award.awarded && def.xp_value > 0 {
                progress = self.users.apply_xp_delta(user, def.xp_value)?;
                xp_gained += def.xp_value;
            }
            Some(BadgeOutcome {
                badge_key: def.key,
                badge_name: award.record.badge_name,
                awarded: award.awarded,
                xp_awarded: award.record.xp_awarded,
            })
        } else {
            debug!(user = %user, unit = %unit, correct, total, "score below badge threshold");
            None
        };

        info!(user = %user, unit = %unit, xp_gained, "unit completed");
        let leveled_up = log_level_change(&before, &progress);
        Ok(UnitOutcome {
            unit_key: unit.clone(),
            already_completed: false,
            xp_gained,
            badge,
            leveled_up,
            progress,
        })
    }

    fn expect_kind(&self, unit: &UnitKey, expected: UnitKind) -> ProgressResult<()> {
        let kind = self.engine.unit_kind(unit);
        if kind == expected {
            Ok(())
        } else {
            Err(ProgressError::validation(format!(
                "unit {unit} is a {kind}, not a {expected}"
            )))
        }
    }

    fn ensure_unlocked(&self, user: &UserId, unit: &UnitKey) -> ProgressResult<()> {
        if !self.config.enforce_unlocks {
            return Ok(());
        }
        let Some(prerequisite) = self.engine.chain_for(unit).and_then(|c| c.prerequisite(unit))
        else {
            return Ok(());
        };
        if self.completions.is_completed(user, prerequisite)? {
            return Ok(());
        }
        warn!(user = %user, unit = %unit, prerequisite = %prerequisite, "locked unit rejected");
        Err(ProgressError::Locked {
            unit: unit.clone(),
            prerequisite: prerequisite.clone(),
        })
    }
}

fn non_negative(field: &str, value: i64) -> ProgressResult<u64> {
    u64::try_from(value)
        .map_err(|_| ProgressError::validation(format!("{field} must not be negative, got {value}")))
}

fn progress_marker_from(value: Option<i64>) -> ProgressResult<u32> {
    let value = value.unwrap_or(0);
    u32::try_from(value)
        .map_err(|_| ProgressError::validation(format!("currentScene out of range: {value}")))
}

fn log_level_change(before: &UserProgress, after: &UserProgress) -> bool {
    let leveled_up = after.level > before.level;
    if leveled_up {
        info!(user = %after.user_id, from = before.level, to = after.level, "level up");
    }
    leveled_up
}

#[cfg(test)]
mod tests {
    use super::*;
    use fma_store::{Fields, InMemoryRecordStore, Record, RecordKey, StoreError, StoreResult, Table};

    fn service() -> ProgressionService {
        ProgressionService::new(
            Arc::new(InMemoryRecordStore::new()),
            ProgressionEngine::default(),
            ServiceConfig::default(),
        )
    }

    fn unlocked_service() -> ProgressionService {
        ProgressionService::new(
            Arc::new(InMemoryRecordStore::new()),
            ProgressionEngine::default(),
            ServiceConfig {
                enforce_unlocks: false,
                ..ServiceConfig::default()
            },
        )
    }

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn unit(s: &str) -> UnitKey {
        UnitKey::new(s).unwrap()
    }

    #[test]
    fn partial_quiz_score_earns_xp_but_no_badge() {
        let svc = unlocked_service();
        let outcome = svc.submit_quiz(&uid("u1"), &unit("2"), 8, 10).unwrap();
        assert!(!outcome.already_completed);
        assert_eq!(outcome.xp_gained, 80);
        assert_eq!((outcome.progress.xp, outcome.progress.level), (80, 1));
        assert!(outcome.badge.is_none());
        assert!(!outcome.leveled_up);

        let repeat = svc.submit_quiz(&uid("u1"), &unit("2"), 8, 10).unwrap();
        assert!(repeat.already_completed);
        assert_eq!(repeat.xp_gained, 0);
        assert_eq!(repeat.progress.xp, 80);
        assert_eq!(svc.list_completions(&uid("u1")).unwrap().len(), 1);
        assert!(svc.list_badges(&uid("u1")).unwrap().is_empty());
    }

    #[test]
    fn perfect_quiz_awards_badge_once() {
        let svc = service();
        let outcome = svc.submit_quiz(&uid("u1"), &unit("1"), 5, 5).unwrap();
        let badge = outcome.badge.unwrap();
        assert!(badge.awarded);
        assert_eq!(badge.badge_key.as_str(), "phase_1_mastery");
        assert_eq!(badge.badge_name, "Factory Starter");
        assert_eq!(outcome.xp_gained, 100);
        assert_eq!(outcome.progress.xp, 100);

        let repeat = svc.submit_quiz(&uid("u1"), &unit("1"), 5, 5).unwrap();
        assert!(repeat.already_completed);
        assert_eq!(svc.get_or_create_user(&uid("u1")).unwrap().xp, 100);
        assert_eq!(svc.list_badges(&uid("u1")).unwrap().len(), 1);
    }

    #[test]
    fn story_completion_grants_story_xp_and_badge() {
        let svc = service();
        let outcome = svc.complete_story(&uid("u1"), &unit("pizza"), Some(7)).unwrap();
        assert_eq!(outcome.xp_gained, 150);
        assert_eq!((outcome.progress.xp, outcome.progress.level), (150, 1));
        assert_eq!(outcome.badge.unwrap().badge_name, "Pizza Chef");
        assert_eq!(svc.list_completions(&uid("u1")).unwrap()[0].progress_marker, 7);

        let next = svc.complete_story(&uid("u1"), &unit("coffee"), None).unwrap();
        assert!(next.leveled_up);
        assert_eq!((next.progress.xp, next.progress.level), (300, 2));
    }

    #[test]
    fn locked_units_are_rejected_until_prerequisite_completes() {
        let svc = service();
        let err = svc.submit_quiz(&uid("u1"), &unit("2"), 5, 5).unwrap_err();
        assert!(matches!(
            err,
            ProgressError::Locked { ref unit, ref prerequisite }
                if unit.as_str() == "2" && prerequisite.as_str() == "1"
        ));
        assert!(svc.list_completions(&uid("u1")).unwrap().is_empty());

        svc.submit_quiz(&uid("u1"), &unit("1"), 2, 5).unwrap();
        svc.submit_quiz(&uid("u1"), &unit("2"), 5, 5).unwrap();

        let err = svc.complete_story(&uid("u1"), &unit("coffee"), None).unwrap_err();
        assert!(matches!(err, ProgressError::Locked { .. }));
    }

    #[test]
    fn units_outside_the_catalog_are_always_open() {
        let svc = service();
        let outcome = svc.complete_story(&uid("u1"), &unit("sushi"), None).unwrap();
        let badge = outcome.badge.unwrap();
        assert_eq!(badge.badge_key.as_str(), "sushi");
        assert_eq!(outcome.xp_gained, 150);
    }

    #[test]
    fn aliased_unit_keys_follow_the_catalog_unit() {
        let svc = service();
        let u = uid("u1");

        let err = svc.submit_quiz(&u, &unit("03"), 5, 5).unwrap_err();
        assert!(matches!(
            err,
            ProgressError::Locked { ref unit, .. } if unit.as_str() == "3"
        ));
        let err = svc.complete_story(&u, &unit("Coffee"), None).unwrap_err();
        assert!(matches!(
            err,
            ProgressError::Locked { ref unit, .. } if unit.as_str() == "coffee"
        ));
        let err = svc.record_completion(&u, &unit("COFFEE"), None).unwrap_err();
        assert!(matches!(err, ProgressError::Locked { .. }));
        assert!(svc.list_badges(&u).unwrap().is_empty());
        assert_eq!(svc.get_or_create_user(&u).unwrap().xp, 0);

        svc.complete_story(&u, &unit("pizza"), None).unwrap();
        let outcome = svc.complete_story(&u, &unit("Coffee"), None).unwrap();
        assert_eq!(outcome.unit_key.as_str(), "coffee");
        let badge = outcome.badge.unwrap();
        assert_eq!(badge.badge_key.as_str(), "coffee");
        assert_eq!(badge.badge_name, "Barista");
        assert!(badge.awarded);

        let again = svc.complete_story(&u, &unit("coffee"), None).unwrap();
        assert!(again.already_completed);
        assert_eq!(again.progress.xp, 300);
    }

    #[test]
    fn units_outside_the_catalog_cannot_claim_catalog_badges() {
        let mut catalog = fma_engine::Catalog::default();
        for def in &mut catalog.units {
            if def.key == unit("pizza") {
                def.badge.key = BadgeKey::new("sushi").unwrap();
            }
        }
        let svc = ProgressionService::new(
            Arc::new(InMemoryRecordStore::new()),
            ProgressionEngine::new(fma_engine::ProgressionRules::default(), catalog),
            ServiceConfig::default(),
        );
        let err = svc.complete_story(&uid("u1"), &unit("sushi"), None).unwrap_err();
        assert!(matches!(err, ProgressError::Validation(_)));
        assert!(svc.list_completions(&uid("u1")).unwrap().is_empty());
        assert!(svc.list_badges(&uid("u1")).unwrap().is_empty());
    }

    #[test]
    fn invalid_quiz_submissions_are_rejected() {
        let svc = service();
        let u = uid("u1");
        for (correct, total) in [(6, 5), (-1, 5), (0, 0), (1, -5)] {
            let err = svc.submit_quiz(&u, &unit("1"), correct, total).unwrap_err();
            assert!(matches!(err, ProgressError::Validation(_)), "{correct}/{total}");
        }
        let err = svc.submit_quiz(&u, &unit("pizza"), 5, 5).unwrap_err();
        assert!(matches!(err, ProgressError::Validation(_)));
        let err = svc.complete_story(&u, &unit("1"), None).unwrap_err();
        assert!(matches!(err, ProgressError::Validation(_)));
        let err = svc.complete_story(&u, &unit("pizza"), Some(-2)).unwrap_err();
        assert!(matches!(err, ProgressError::Validation(_)));
        assert!(svc.list_completions(&u).unwrap().is_empty());
    }

    #[test]
    fn xp_writes_validate_sign_and_direction() {
        let svc = service();
        assert_eq!(svc.add_xp(&uid("u1"), 120).unwrap().xp, 120);
        assert!(matches!(
            svc.add_xp(&uid("u1"), -10).unwrap_err(),
            ProgressError::Validation(_)
        ));
        assert_eq!(svc.set_xp(&uid("u1"), 420).unwrap().level, 3);
        assert!(matches!(
            svc.set_xp(&uid("u1"), 100).unwrap_err(),
            ProgressError::Validation(_)
        ));
        assert_eq!(svc.get_or_create_user(&uid("u1")).unwrap().xp, 420);
    }

    #[test]
    fn set_xp_creates_unknown_users() {
        let svc = service();
        let p = svc.set_xp(&uid("fresh"), 50).unwrap();
        assert_eq!((p.xp, p.level), (50, 1));
    }

    #[test]
    fn direct_badge_award_grants_xp_once() {
        let svc = service();
        let badge = BadgeKey::new("community_helper").unwrap();
        let first = svc.award_badge(&uid("u1"), &badge, "Helper", 30).unwrap();
        assert!(first.awarded);
        assert_eq!(first.progress.xp, 30);

        let again = svc.award_badge(&uid("u1"), &badge, "Helper", 30).unwrap();
        assert!(!again.awarded);
        assert_eq!(again.progress.xp, 30);
    }

    #[test]
    fn direct_award_of_a_locked_catalog_badge_is_rejected() {
        let svc = service();
        let badge = BadgeKey::new("phase_3_mastery").unwrap();
        let err = svc
            .award_badge(&uid("u1"), &badge, "Machine Optimizer", 50)
            .unwrap_err();
        assert!(matches!(err, ProgressError::Locked { .. }));

        let open = BadgeKey::new("pizza").unwrap();
        assert!(svc.award_badge(&uid("u1"), &open, "Pizza Chef", 50).unwrap().awarded);
    }

    #[test]
    fn unlock_status_follows_completions() {
        let svc = service();
        svc.complete_story(&uid("u1"), &unit("pizza"), None).unwrap();
        let status = svc.unlock_status(&uid("u1")).unwrap();
        let coffee = status.iter().find(|s| s.unit_key.as_str() == "coffee").unwrap();
        assert!(coffee.unlocked && !coffee.completed);
        let vehicles = status.iter().find(|s| s.unit_key.as_str() == "vehicles").unwrap();
        assert!(!vehicles.unlocked);
    }

    #[test]
    fn concurrent_submissions_grant_xp_exactly_once() {
        let svc = service();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| svc.submit_quiz(&uid("u1"), &unit("1"), 5, 5).unwrap());
            }
        });
        assert_eq!(svc.get_or_create_user(&uid("u1")).unwrap().xp, 100);
        assert_eq!(svc.list_badges(&uid("u1")).unwrap().len(), 1);
        assert_eq!(svc.list_completions(&uid("u1")).unwrap().len(), 1);
    }

    #[test]
    fn leaderboard_ranks_users() {
        let svc = service();
        svc.add_xp(&uid("a"), 50).unwrap();
        svc.add_xp(&uid("b"), 200).unwrap();
        svc.add_xp(&uid("c"), 10).unwrap();
        let top = svc.leaderboard(Some(2)).unwrap();
        let ids: Vec<_> = top.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    struct UnavailableStore;

    impl RecordStore for UnavailableStore {
        fn get(&self, _: Table, _: &RecordKey) -> StoreResult<Option<Record>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        fn insert_unique(&self, _: Table, _: RecordKey, _: Fields) -> StoreResult<Record> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        fn modify(
            &self,
            _: Table,
            _: &RecordKey,
            _: &mut dyn FnMut(&mut Fields) -> StoreResult<()>,
        ) -> StoreResult<Record> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        fn scan_prefix(&self, _: Table, _: &[&str]) -> StoreResult<Vec<Record>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        fn query_top_n(&self, _: Table, _: &str, _: bool, _: usize) -> StoreResult<Vec<Record>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        fn count(&self, _: Table) -> StoreResult<usize> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[test]
    fn store_outage_surfaces_as_unavailable() {
        let svc = ProgressionService::new(
            Arc::new(UnavailableStore),
            ProgressionEngine::default(),
            ServiceConfig::default(),
        );
        let err = svc.submit_quiz(&uid("u1"), &unit("1"), 5, 5).unwrap_err();
        assert!(matches!(err, ProgressError::StoreUnavailable(_)));
        assert!(err.is_retryable());
        assert!(matches!(
            svc.leaderboard(None).unwrap_err(),
            ProgressError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let config: ServiceConfig = toml::from_str("enforce_unlocks = false").unwrap();
        assert!(!config.enforce_unlocks);
        assert_eq!(config.default_leaderboard_limit, 10);
        assert_eq!(config.max_leaderboard_limit, 100);
    }
}
