//! Progress ledgers for Factory Method Adventures.
//!
//! This crate turns the pure decisions of `fma-engine` into durable state on
//! top of any [`fma_store::RecordStore`]. It provides:
//! - [`UserRepository`]: lazy user creation and atomic XP writes
//! - [`CompletionLedger`] and [`BadgeLedger`]: once-only records backed by
//!   the store's unique insert, so retries and races are harmless
//! - [`Leaderboard`]: XP ranking with a default and a maximum limit
//! - [`ProgressionService`]: the quiz/story/badge control flow used by the
//!   HTTP layer

pub mod badges;
pub mod completions;
pub mod error;
pub mod leaderboard;
pub mod service;
pub mod users;

pub use badges::{AwardOutcome, BadgeLedger};
pub use completions::{CompletionLedger, CompletionOutcome};
pub use error::{ProgressError, ProgressResult};
pub use leaderboard::{Leaderboard, DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};
pub use service::{BadgeAward, BadgeOutcome, ProgressionService, ServiceConfig, UnitOutcome};
pub use users::UserRepository;
