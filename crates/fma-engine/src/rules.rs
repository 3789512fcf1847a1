use serde::{Deserialize, Serialize};

/// XP needed per level step.
pub const XP_PER_LEVEL: u64 = 200;
/// XP granted per correct quiz answer.
pub const XP_PER_QUESTION: u64 = 10;
/// XP granted for finishing a story.
pub const XP_PER_STORY: u64 = 100;
/// Bonus XP carried by every default catalog badge.
pub const BADGE_BONUS_XP: u64 = 50;
/// Questions per quiz lesson in the default catalog.
pub const QUIZ_QUESTION_COUNT: u32 = 5;

/// Tunable XP constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionRules {
    pub xp_per_level: u64,
    pub xp_per_question: u64,
    pub xp_per_story: u64,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            xp_per_level: XP_PER_LEVEL,
            xp_per_question: XP_PER_QUESTION,
            xp_per_story: XP_PER_STORY,
        }
    }
}

impl ProgressionRules {
    /// `floor(xp / xp_per_level) + 1`. Total and monotonic; a zero step
    /// from configuration is treated as 1.
    pub fn level_from_xp(&self, xp: u64) -> u64 {
        xp / self.xp_per_level.max(1) + 1
    }

    /// XP still missing before the next level.
    pub fn xp_to_next_level(&self, xp: u64) -> u64 {
        let step = self.xp_per_level.max(1);
        step - xp % step
    }

    /// XP for a quiz submission. `correct` is capped at `total`.
    pub fn quiz_xp(&self, correct: u32, total: u32) -> u64 {
        u64::from(correct.min(total)).saturating_mul(self.xp_per_question)
    }

    pub fn story_xp(&self) -> u64 {
        self.xp_per_story
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn level_formula_reference_points() {
        let rules = ProgressionRules::default();
        assert_eq!(rules.level_from_xp(0), 1);
        assert_eq!(rules.level_from_xp(199), 1);
        assert_eq!(rules.level_from_xp(200), 2);
        assert_eq!(rules.level_from_xp(999), 5);
        assert_eq!(rules.level_from_xp(u64::MAX), u64::MAX / 200 + 1);
    }

    #[test]
    fn xp_to_next_level() {
        let rules = ProgressionRules::default();
        assert_eq!(rules.xp_to_next_level(0), 200);
        assert_eq!(rules.xp_to_next_level(80), 120);
        assert_eq!(rules.xp_to_next_level(200), 200);
    }

    #[test]
    fn zero_step_does_not_divide_by_zero() {
        let rules = ProgressionRules {
            xp_per_level: 0,
            ..Default::default()
        };
        assert_eq!(rules.level_from_xp(3), 4);
        assert_eq!(rules.xp_to_next_level(3), 1);
    }

    #[test]
    fn quiz_xp_caps_correct_at_total() {
        let rules = ProgressionRules::default();
        assert_eq!(rules.quiz_xp(8, 10), 80);
        assert_eq!(rules.quiz_xp(12, 10), 100);
        assert_eq!(rules.quiz_xp(0, 5), 0);
        assert_eq!(rules.story_xp(), 100);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let rules: ProgressionRules = toml::from_str("xp_per_story = 150").unwrap();
        assert_eq!(rules.xp_per_story, 150);
        assert_eq!(rules.xp_per_level, XP_PER_LEVEL);
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
            let rules = ProgressionRules::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rules.level_from_xp(lo) <= rules.level_from_xp(hi));
        }

        #[test]
        fn level_is_at_least_one(xp in any::<u64>(), step in 0u64..10_000) {
            let rules = ProgressionRules { xp_per_level: step, ..Default::default() };
            prop_assert!(rules.level_from_xp(xp) >= 1);
        }

        #[test]
        fn next_level_boundary_bumps_level(xp in 0u64..1_000_000) {
            let rules = ProgressionRules::default();
            let gap = rules.xp_to_next_level(xp);
            prop_assert_eq!(rules.level_from_xp(xp + gap), rules.level_from_xp(xp) + 1);
            prop_assert_eq!(rules.level_from_xp(xp + gap - 1), rules.level_from_xp(xp));
        }
    }
}
