//! Progression engine for Factory Method Adventures.
//!
//! Everything in this crate is pure computation: no I/O, no clocks, no
//! locks. The ledger crate feeds it already-validated inputs and persists
//! whatever it decides.
//!
//! - [`ProgressionRules`]: XP constants and the XP → level mapping
//! - [`Catalog`]: static unit and badge definitions (the content lookup
//!   table the storyboard screens select from)
//! - [`UnlockChain`]: linear prerequisite chains per track
//! - [`ProgressionEngine`]: rules and catalog bundled behind the
//!   unit-keyed operations the service layer calls

pub mod catalog;
pub mod engine;
pub mod error;
pub mod rules;
pub mod unlock;

pub use catalog::{BadgeDefinition, Catalog, ScoreRule, UnitDefinition, UnitKind};
pub use engine::ProgressionEngine;
pub use error::CatalogError;
pub use rules::{
    ProgressionRules, BADGE_BONUS_XP, QUIZ_QUESTION_COUNT, XP_PER_LEVEL, XP_PER_QUESTION,
    XP_PER_STORY,
};
pub use unlock::{UnitUnlock, UnlockChain};
