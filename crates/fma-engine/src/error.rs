use fma_types::{BadgeKey, UnitKey};
use thiserror::Error;

use crate::catalog::UnitKind;

/// Problems found when validating a catalog loaded from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate unit key: {0}")]
    DuplicateUnit(UnitKey),

    #[error("duplicate badge key: {0}")]
    DuplicateBadge(BadgeKey),

    #[error("unit key {0} is not canonical, expected {canonical}", canonical = .0.canonical())]
    NonCanonicalUnit(UnitKey),

    #[error("{kind} track orders must run 1..={expected_max} without gaps, found {found:?}")]
    BrokenChain {
        kind: UnitKind,
        expected_max: u32,
        found: Vec<u32>,
    },
}
