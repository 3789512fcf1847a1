//! Static unit and badge catalog.
//!
//! The catalog is a plain lookup table from a unit key to its descriptor.
//! Order values build one linear unlock chain per [`UnitKind`].

use std::collections::HashSet;
use std::fmt;

use fma_types::{BadgeKey, UnitKey};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::rules::{BADGE_BONUS_XP, QUIZ_QUESTION_COUNT};

/// The two learning tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Story,
    Quiz,
}

impl UnitKind {
    pub const ALL: [UnitKind; 2] = [UnitKind::Story, UnitKind::Quiz];

    /// Kind of a unit that is not in the catalog: numeric keys are quiz
    /// lessons, everything else is a story.
    pub fn infer(unit: &UnitKey) -> Self {
        if unit.lesson_number().is_some() {
            Self::Quiz
        } else {
            Self::Story
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Story => f.write_str("story"),
            Self::Quiz => f.write_str("quiz"),
        }
    }
}

/// Score a quiz submission must reach to earn the unit's badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "value")]
pub enum ScoreRule {
    /// Every question answered correctly.
    #[default]
    Perfect,
    /// At least this many correct answers.
    MinCorrect(u32),
}

impl ScoreRule {
    pub fn is_met(&self, correct: u32, total: u32) -> bool {
        if total == 0 {
            return false;
        }
        let correct = correct.min(total);
        match *self {
            Self::Perfect => correct == total,
            Self::MinCorrect(n) => correct >= n,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub key: BadgeKey,
    pub name: String,
    /// XP granted once when the badge is first awarded.
    pub xp_value: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub key: UnitKey,
    pub kind: UnitKind,
    pub title: String,
    /// Position in the unit's track, starting at 1.
    pub order: u32,
    pub badge: BadgeDefinition,
    #[serde(default)]
    pub score_rule: ScoreRule,
    /// Expected question count for quiz units.
    #[serde(default)]
    pub question_count: Option<u32>,
}

/// Ordered unit definitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub units: Vec<UnitDefinition>,
}

impl Catalog {
    pub fn new(units: Vec<UnitDefinition>) -> Result<Self, CatalogError> {
        let catalog = Self { units };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Unit keys are canonical and unique, badge keys are unique, and each
    /// track's orders are exactly `1..=n`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut unit_keys = HashSet::new();
        let mut badge_keys = HashSet::new();
        for unit in &self.units {
            if !unit.key.is_canonical() {
                return Err(CatalogError::NonCanonicalUnit(unit.key.clone()));
            }
            if !unit_keys.insert(&unit.key) {
                return Err(CatalogError::DuplicateUnit(unit.key.clone()));
            }
            if !badge_keys.insert(&unit.badge.key) {
                return Err(CatalogError::DuplicateBadge(unit.badge.key.clone()));
            }
        }

        for kind in UnitKind::ALL {
            let mut orders: Vec<u32> = self
                .units
                .iter()
                .filter(|u| u.kind == kind)
                .map(|u| u.order)
                .collect();
            orders.sort_unstable();
            let expected_max = orders.len() as u32;
            if orders.iter().copied().ne(1..=expected_max) {
                return Err(CatalogError::BrokenChain {
                    kind,
                    expected_max,
                    found: orders,
                });
            }
        }
        Ok(())
    }

    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }

    pub fn get(&self, key: &UnitKey) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| &u.key == key)
    }

    /// The unit whose badge is `badge`.
    pub fn unit_for_badge(&self, badge: &BadgeKey) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| &u.badge.key == badge)
    }

    /// Units of one kind in chain order.
    pub fn track(&self, kind: UnitKind) -> Vec<&UnitDefinition> {
        let mut units: Vec<&UnitDefinition> =
            self.units.iter().filter(|u| u.kind == kind).collect();
        units.sort_by_key(|u| u.order);
        units
    }

}

fn story(key: &str, order: u32, title: &str, badge_name: &str) -> UnitDefinition {
    let key = UnitKey::new(key).expect("built-in story keys are valid");
    UnitDefinition {
        badge: BadgeDefinition {
            key: BadgeKey::for_story(&key),
            name: badge_name.into(),
            xp_value: BADGE_BONUS_XP,
        },
        key,
        kind: UnitKind::Story,
        title: title.into(),
        order,
        score_rule: ScoreRule::Perfect,
        question_count: None,
    }
}

fn quiz(lesson: u32, title: &str, badge_name: &str) -> UnitDefinition {
    UnitDefinition {
        key: UnitKey::for_lesson(lesson),
        kind: UnitKind::Quiz,
        title: title.into(),
        order: lesson,
        badge: BadgeDefinition {
            key: BadgeKey::for_lesson(lesson),
            name: badge_name.into(),
            xp_value: BADGE_BONUS_XP,
        },
        score_rule: ScoreRule::Perfect,
        question_count: Some(QUIZ_QUESTION_COUNT),
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            units: vec![
                story("pizza", 1, "Pizza", "Pizza Chef"),
                story("coffee", 2, "Coffee", "Barista"),
                story("vehicles", 3, "Vehicles", "Fleet Builder"),
                story("shapes", 4, "Shapes", "Shape Shifter"),
                story("doc", 5, "Documents", "Document Crafter"),
                story("emails", 6, "Notifications", "Notification Hub"),
                quiz(1, "Factory Pattern Fundamentals", "Factory Starter"),
                quiz(2, "Factory Method Implementation", "Pattern Master"),
                quiz(3, "Factory Pattern Advantages & Use Cases", "Machine Optimizer"),
                quiz(4, "Factory Pattern Variations & Comparisons", "Resource Manager"),
                quiz(5, "Factory Pattern Code Analysis", "Production Flow"),
            ],
        }
    }
}
