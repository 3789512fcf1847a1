//! Foundation types for Factory Method Adventures (FMA).
//!
//! This crate provides the identifiers and persisted record shapes shared by
//! the store, ledger, engine and server crates. Every other FMA crate depends
//! on `fma-types`.
//!
//! # Key Types
//!
//! - [`UserId`]: Stable subject id supplied by the identity provider
//! - [`UnitKey`]: A completable learning unit (story type or quiz lesson)
//! - [`BadgeKey`]: Catalog badge identifier
//! - [`UserProgress`]: XP and derived level for one user
//! - [`CompletionRecord`]: At-most-once completion of a unit
//! - [`BadgeRecord`]: At-most-once badge award with audited XP
//! - [`LeaderboardEntry`]: Ranked projection row

pub mod error;
pub mod identity;
pub mod records;

pub use error::TypeError;
pub use identity::{BadgeKey, UnitKey, UserId};
pub use records::{BadgeRecord, CompletionRecord, LeaderboardEntry, UserProgress};
