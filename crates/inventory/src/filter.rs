use core::str::FromStr;

use serde::{Deserialize, Serialize};

use collectify_core::{DomainError, ItemId};

use crate::list::InventoryList;

/// Which slice of a list to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Owned,
    Missing,
}

impl FromStr for FilterMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "owned" | "own" | "i-own" => Ok(FilterMode::Owned),
            "missing" | "miss" | "i-miss" => Ok(FilterMode::Missing),
            other => Err(DomainError::validation(format!(
                "unknown filter {other:?}; expected all, owned or missing"
            ))),
        }
    }
}

impl core::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            FilterMode::All => "all",
            FilterMode::Owned => "owned",
            FilterMode::Missing => "missing",
        })
    }
}

/// One row of a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub id: ItemId,
    pub owned: bool,
}

/// Ids selected by `mode`: the universe in creation order, or the owned or
/// missing ids ascending.
pub fn view(list: &InventoryList, mode: FilterMode) -> Vec<ItemId> {
    match mode {
        FilterMode::All => list.universe().to_vec(),
        FilterMode::Owned => list.possessed().collect(),
        FilterMode::Missing => list.missing().collect(),
    }
}

/// Same selection as [`view`], paired with each id's ownership.
pub fn entries(list: &InventoryList, mode: FilterMode) -> Vec<ItemEntry> {
    view(list, mode)
        .into_iter()
        .map(|id| ItemEntry {
            id,
            owned: list.owns(id),
        })
        .collect()
}
