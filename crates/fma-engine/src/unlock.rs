use std::collections::HashSet;

use fma_types::UnitKey;
use serde::Serialize;

use crate::catalog::{Catalog, UnitKind};

/// A strictly linear prerequisite chain: each unit depends on at most the
/// one before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockChain {
    units: Vec<UnitKey>,
}

impl UnlockChain {
    /// `units` must already be in chain order.
    pub fn new(units: Vec<UnitKey>) -> Self {
        Self { units }
    }

    /// Build the chain for one track of the catalog.
    pub fn from_catalog(catalog: &Catalog, kind: UnitKind) -> Self {
        Self::new(catalog.track(kind).into_iter().map(|u| u.key.clone()).collect())
    }

    pub fn units(&self) -> &[UnitKey] {
        &self.units
    }

    pub fn contains(&self, unit: &UnitKey) -> bool {
        self.units.contains(unit)
    }

    /// The unit that must be completed first, if any.
    pub fn prerequisite(&self, unit: &UnitKey) -> Option<&UnitKey> {
        let position = self.units.iter().position(|u| u == unit)?;
        position.checked_sub(1).map(|p| &self.units[p])
    }

    /// The first unit is always open; every later unit opens once its
    /// predecessor is completed. Units outside the chain are open.
    pub fn is_unlocked(&self, unit: &UnitKey, completed: &HashSet<UnitKey>) -> bool {
        match self.prerequisite(unit) {
            Some(prev) => completed.contains(prev),
            None => true,
        }
    }
}

/// Unlock state of one catalog unit for one user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitUnlock {
    pub unit_key: UnitKey,
    pub kind: UnitKind,
    pub order: u32,
    pub title: String,
    pub unlocked: bool,
    pub completed: bool,
}
