//! Validated mutations of a list's ownership partition.
//!
//! Every operation checks all of its input before touching the list, so a
//! failed call leaves the list exactly as it was.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use collectify_core::{DomainError, DomainResult, ItemId};

use crate::list::InventoryList;
use crate::range;

/// What a successful mutation changed. Callers persist the list when they get one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OwnershipChange {
    Added { ids: Vec<ItemId> },
    Removed { ids: Vec<ItemId> },
    Reset { previously_owned: usize },
}

impl OwnershipChange {
    /// Stable name of the change, for logs.
    pub fn change_type(&self) -> &'static str {
        match self {
            OwnershipChange::Added { .. } => "ownership.added",
            OwnershipChange::Removed { .. } => "ownership.removed",
            OwnershipChange::Reset { .. } => "ownership.reset",
        }
    }
}

/// Mark the items named by `raw_text` (range syntax) as owned.
///
/// All parsed ids must be in the universe and not yet owned; otherwise the
/// offending ids are reported and nothing is added.
pub fn add_owned(list: &mut InventoryList, raw_text: &str) -> DomainResult<OwnershipChange> {
    if raw_text.trim().is_empty() {
        return Err(DomainError::validation("no items specified"));
    }
    let ids = range::parse(raw_text)?;

    let offending: Vec<ItemId> = ids
        .iter()
        .copied()
        .filter(|id| !list.missing.contains(id))
        .collect();
    if !offending.is_empty() {
        return Err(DomainError::validation_with_ids(
            "invalid or already owned",
            offending,
        ));
    }

    for id in &ids {
        list.missing.remove(id);
        list.possessed.insert(*id);
    }

    Ok(OwnershipChange::Added {
        ids: ids.into_iter().collect(),
    })
}

/// Give up ownership of `ids`. Every id must currently be owned.
pub fn remove_owned(list: &mut InventoryList, ids: &[ItemId]) -> DomainResult<OwnershipChange> {
    if ids.is_empty() {
        return Err(DomainError::validation("no items specified"));
    }
    let ids: BTreeSet<ItemId> = ids.iter().copied().collect();

    let offending: Vec<ItemId> = ids
        .iter()
        .copied()
        .filter(|id| !list.possessed.contains(id))
        .collect();
    if !offending.is_empty() {
        return Err(DomainError::validation_with_ids("not owned", offending));
    }

    for id in &ids {
        list.possessed.remove(id);
        list.missing.insert(*id);
    }

    Ok(OwnershipChange::Removed {
        ids: ids.into_iter().collect(),
    })
}

/// Forget all ownership: everything in the universe becomes missing.
pub fn reset(list: &mut InventoryList) -> OwnershipChange {
    let previously_owned = list.possessed.len();
    list.possessed.clear();
    list.missing = list.universe().iter().copied().collect();
    OwnershipChange::Reset { previously_owned }
}
