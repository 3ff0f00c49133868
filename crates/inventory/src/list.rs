use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use collectify_core::{DomainError, DomainResult, Entity, ItemId, ListKey, MAX_ITEMS};

/// Image reference used when a list is created without one.
pub const DEFAULT_IMAGE: &str = "default.png";

/// Persisted shape of a list, field-for-field.
///
/// `possessed` may be stored in any order; everything else is normalized on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDocument {
    pub list_name: String,
    pub total: Vec<ItemId>,
    pub possessed: Vec<ItemId>,
    pub missing: Vec<ItemId>,
    pub image: String,
}

/// Entity: one collection being tracked.
///
/// `missing` is kept as an explicit cache of `universe \ possessed`; every
/// mutation in this crate updates both sets together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryList {
    key: ListKey,
    name: String,
    universe: Vec<ItemId>,
    pub(crate) possessed: BTreeSet<ItemId>,
    pub(crate) missing: BTreeSet<ItemId>,
    image: String,
}

impl InventoryList {
    /// Build a fresh list tracking items `1..=count`, none of them owned.
    pub fn new(name: &str, count: u32, image: Option<&str>) -> DomainResult<Self> {
        let key = ListKey::from_name(name)?;
        if count == 0 {
            return Err(DomainError::validation("item count must be positive"));
        }
        if count > MAX_ITEMS {
            return Err(DomainError::validation(format!(
                "item count cannot exceed {MAX_ITEMS}"
            )));
        }

        let universe: Vec<ItemId> = (1..=count).collect();
        let missing = universe.iter().copied().collect();
        let image = image
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_IMAGE)
            .to_string();

        Ok(Self {
            key,
            name: name.trim().to_string(),
            universe,
            possessed: BTreeSet::new(),
            missing,
            image,
        })
    }

    /// Rebuild a list from its persisted document, rejecting documents whose
    /// sets do not form a partition of `total`.
    pub fn from_document(doc: ListDocument) -> DomainResult<Self> {
        let key = ListKey::from_name(&doc.list_name)?;

        let mut seen = BTreeSet::new();
        for &id in &doc.total {
            if id == 0 || !seen.insert(id) {
                return Err(inconsistent(&doc.list_name, "total has zero or duplicate ids"));
            }
        }

        let mut possessed = BTreeSet::new();
        for &id in &doc.possessed {
            if !seen.contains(&id) || !possessed.insert(id) {
                return Err(inconsistent(
                    &doc.list_name,
                    "possessed has ids outside total or duplicates",
                ));
            }
        }

        let expected: BTreeSet<ItemId> = seen.difference(&possessed).copied().collect();
        let stored: BTreeSet<ItemId> = doc.missing.iter().copied().collect();
        if stored.len() != doc.missing.len() || stored != expected {
            return Err(inconsistent(
                &doc.list_name,
                "missing is not total minus possessed",
            ));
        }

        Ok(Self {
            key,
            name: doc.list_name,
            universe: doc.total,
            possessed,
            missing: expected,
            image: doc.image,
        })
    }

    /// Snapshot the list in its persisted shape (`possessed`/`missing` ascending).
    pub fn to_document(&self) -> ListDocument {
        ListDocument {
            list_name: self.name.clone(),
            total: self.universe.clone(),
            possessed: self.possessed.iter().copied().collect(),
            missing: self.missing.iter().copied().collect(),
            image: self.image.clone(),
        }
    }

    pub fn key(&self) -> &ListKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Every tracked id in creation order.
    pub fn universe(&self) -> &[ItemId] {
        &self.universe
    }

    /// Owned ids, ascending.
    pub fn possessed(&self) -> impl ExactSizeIterator<Item = ItemId> + '_ {
        self.possessed.iter().copied()
    }

    /// Not-yet-owned ids, ascending.
    pub fn missing(&self) -> impl ExactSizeIterator<Item = ItemId> + '_ {
        self.missing.iter().copied()
    }

    pub fn owns(&self, id: ItemId) -> bool {
        self.possessed.contains(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.possessed.contains(&id) || self.missing.contains(&id)
    }

    /// Change the display name (and therefore the key).
    ///
    /// Only identity changes here; moving the stored record is the registry's job.
    pub fn rename(&mut self, new_name: &str) -> DomainResult<()> {
        self.key = ListKey::from_name(new_name)?;
        self.name = new_name.trim().to_string();
        Ok(())
    }
}

impl Entity for InventoryList {
    type Id = ListKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

fn inconsistent(name: &str, detail: &str) -> DomainError {
    DomainError::validation(format!("inconsistent document {name:?}: {detail}"))
}
