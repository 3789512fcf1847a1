use std::collections::HashSet;

use fma_types::{BadgeKey, UnitKey};

use crate::catalog::{BadgeDefinition, Catalog, ScoreRule, UnitDefinition, UnitKind};
use crate::rules::{ProgressionRules, BADGE_BONUS_XP};
use crate::unlock::{UnitUnlock, UnlockChain};

/// Rules and catalog bundled behind unit-keyed, side-effect-free
/// operations.
///
/// Units missing from the catalog are still handled: their kind is inferred
/// from the key, their badge key is derived, and they sit outside every
/// unlock chain.
#[derive(Clone, Debug)]
pub struct ProgressionEngine {
    rules: ProgressionRules,
    catalog: Catalog,
    chains: Vec<UnlockChain>,
}

impl ProgressionEngine {
    pub fn new(rules: ProgressionRules, catalog: Catalog) -> Self {
        let chains = UnitKind::ALL
            .iter()
            .map(|kind| UnlockChain::from_catalog(&catalog, *kind))
            .collect();
        Self {
            rules,
            catalog,
            chains,
        }
    }

    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn level_from_xp(&self, xp: u64) -> u64 {
        self.rules.level_from_xp(xp)
    }

    pub fn unit_kind(&self, unit: &UnitKey) -> UnitKind {
        self.catalog
            .get(unit)
            .map(|u| u.kind)
            .unwrap_or_else(|| UnitKind::infer(unit))
    }

    /// XP earned by finishing `unit`. Story units ignore the score.
    pub fn xp_for_unit_completion(&self, unit: &UnitKey, correct: u32, total: u32) -> u64 {
        match self.unit_kind(unit) {
            UnitKind::Quiz => self.rules.quiz_xp(correct, total),
            UnitKind::Story => self.rules.story_xp(),
        }
    }

    /// Whether finishing `unit` with this score earns its badge. Stories
    /// always do; quizzes must satisfy the unit's [`ScoreRule`].
    pub fn is_badge_eligible(&self, unit: &UnitKey, correct: u32, total: u32) -> bool {
        match self.unit_kind(unit) {
            UnitKind::Story => true,
            UnitKind::Quiz => self.score_rule(unit).is_met(correct, total),
        }
    }

    pub fn score_rule(&self, unit: &UnitKey) -> ScoreRule {
        self.catalog
            .get(unit)
            .map(|u| u.score_rule)
            .unwrap_or_default()
    }

    /// `"pizza" -> "pizza"`, quiz lesson N -> `"phase_N_mastery"`.
    pub fn resolve_badge_key(&self, unit: &UnitKey) -> BadgeKey {
        if let Some(def) = self.catalog.get(unit) {
            return def.badge.key.clone();
        }
        match (UnitKind::infer(unit), unit.lesson_number()) {
            (UnitKind::Quiz, Some(n)) => BadgeKey::for_lesson(n),
            _ => BadgeKey::for_story(unit),
        }
    }

    /// The badge finishing `unit` can earn, synthesised for units outside
    /// the catalog.
    pub fn badge_for(&self, unit: &UnitKey) -> BadgeDefinition {
        if let Some(def) = self.catalog.get(unit) {
            return def.badge.clone();
        }
        let name = match unit.lesson_number() {
            Some(n) => format!("Phase {n} Mastery"),
            None => format!("{unit} Master"),
        };
        BadgeDefinition {
            key: self.resolve_badge_key(unit),
            name,
            xp_value: BADGE_BONUS_XP,
        }
    }

    /// The catalog unit that already owns the badge `unit` would earn, when
    /// `unit` itself is outside the catalog.
    pub fn badge_claimed_by(&self, unit: &UnitKey) -> Option<&UnitDefinition> {
        if self.catalog.get(unit).is_some() {
            return None;
        }
        self.catalog.unit_for_badge(&self.resolve_badge_key(unit))
    }

    pub fn chain_for(&self, unit: &UnitKey) -> Option<&UnlockChain> {
        self.chains.iter().find(|c| c.contains(unit))
    }

    pub fn is_unit_unlocked(&self, unit: &UnitKey, completed: &HashSet<UnitKey>) -> bool {
        self.chain_for(unit)
            .map_or(true, |chain| chain.is_unlocked(unit, completed))
    }

    /// Unlock state of every catalog unit, stories first, in chain order.
    pub fn unlock_status(&self, completed: &HashSet<UnitKey>) -> Vec<UnitUnlock> {
        UnitKind::ALL
            .iter()
            .flat_map(|kind| self.catalog.track(*kind))
            .map(|u| UnitUnlock {
                unit_key: u.key.clone(),
                kind: u.kind,
                order: u.order,
                title: u.title.clone(),
                unlocked: self.is_unit_unlocked(&u.key, completed),
                completed: completed.contains(&u.key),
            })
            .collect()
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new(ProgressionRules::default(), Catalog::default())
    }
}
