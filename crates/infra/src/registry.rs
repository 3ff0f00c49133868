//! List lifecycle orchestration: create, open, rename, delete, enumerate.
//!
//! The registry couples list identity (the key derived from a display name)
//! with a [`ListStore`]. It holds no list state of its own; every call works
//! against whatever the store currently contains.
//!
//! ```text
//! display surface
//!   ↓ create / open / rename / delete
//! ListRegistry ──→ InventoryList (domain rules, validation)
//!   ↓
//! ListStore (load / save / rename / delete)
//! ```
//!
//! No locking is done: another process writing the same directory can race
//! with the collision checks here.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use collectify_core::{DomainError, Entity, ListKey, MAX_ITEMS};
use collectify_inventory::{InventoryList, percentage};

use crate::storage::{ListStore, StoreError};

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Parse, validation or not-found failure, surfaced verbatim.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage failed for reasons unrelated to the request (IO, encoding).
    #[error("storage failure: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for RegistryError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(key) => {
                RegistryError::Domain(DomainError::not_found(format!("list '{key}'")))
            }
            StoreError::AlreadyExists(key) => RegistryError::Domain(DomainError::validation(
                format!("name collision: a list with key '{key}' already exists"),
            )),
            other => RegistryError::Storage(other),
        }
    }
}

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::Domain(DomainError::NotFound(_)))
    }

    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            RegistryError::Domain(err) => Some(err),
            RegistryError::Storage(_) => None,
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// One row of the list overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub key: ListKey,
    pub name: String,
    pub image: String,
    /// Absent when the list has no items or could not be read.
    pub completion: Option<u8>,
    /// Why the stored record could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListSummary {
    pub fn of(list: &InventoryList) -> Self {
        Self {
            key: list.key().clone(),
            name: list.name().to_string(),
            image: list.image().to_string(),
            completion: percentage(list).ok(),
            error: None,
        }
    }

    /// Placeholder row for a record that exists but does not load.
    pub fn unreadable(key: &ListKey, err: &RegistryError) -> Self {
        Self {
            key: key.clone(),
            name: key.to_string(),
            image: String::new(),
            completion: None,
            error: Some(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListRegistry<S> {
    store: S,
}

impl<S> ListRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S> ListRegistry<S>
where
    S: ListStore,
{
    /// Create and persist a list tracking items `1..=count`.
    pub fn create(&self, name: &str, count: i64, image: Option<&str>) -> RegistryResult<InventoryList> {
        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| DomainError::validation("item count must be positive"))?;
        if count > MAX_ITEMS {
            return Err(DomainError::validation(format!("item count cannot exceed {MAX_ITEMS}")).into());
        }

        let list = InventoryList::new(name, count, image)?;
        self.ensure_free(list.id())?;
        self.store.save(list.id(), &list.to_document())?;

        info!(key = %list.id(), name = list.display_name(), items = count, "list created");
        Ok(list)
    }

    /// Load the list whose name (or key) normalizes to `name`.
    pub fn open(&self, name: &str) -> RegistryResult<InventoryList> {
        let key = ListKey::from_name(name)?;
        self.open_key(&key)
    }

    /// Load the record stored under `key`.
    ///
    /// The document's own name must normalize back to `key`; otherwise later
    /// saves would land under a different record.
    pub fn open_key(&self, key: &ListKey) -> RegistryResult<InventoryList> {
        let document = self.store.load(key)?;
        let list = InventoryList::from_document(document)?;
        if list.key() != key {
            return Err(DomainError::validation(format!(
                "document name {:?} does not match its key '{key}'",
                list.name()
            ))
            .into());
        }
        Ok(list)
    }

    /// Persist the current state of `list` under its key.
    pub fn save(&self, list: &InventoryList) -> RegistryResult<()> {
        self.store.save(list.id(), &list.to_document())?;
        Ok(())
    }

    /// Rename `list`, moving its record when the key changes.
    ///
    /// `list` is only updated once storage has accepted the change.
    pub fn rename(&self, list: &mut InventoryList, new_name: &str) -> RegistryResult<()> {
        let old_key = list.id().clone();
        let mut renamed = list.clone();
        renamed.rename(new_name)?;

        if renamed.id() != &old_key {
            self.ensure_free(renamed.id())?;
            self.store.rename(&old_key, renamed.id())?;
        }
        if let Err(err) = self.store.save(renamed.id(), &renamed.to_document()) {
            if renamed.id() != &old_key {
                if let Err(rollback) = self.store.rename(renamed.id(), &old_key) {
                    warn!(
                        from = %renamed.id(),
                        to = %old_key,
                        error = %rollback,
                        "could not move record back after failed rename"
                    );
                }
            }
            return Err(err.into());
        }

        info!(from = %old_key, to = %renamed.id(), name = renamed.display_name(), "list renamed");
        *list = renamed;
        Ok(())
    }

    /// Remove the stored record. An already-absent record is reported as
    /// not found; callers may treat that as success.
    pub fn delete(&self, list: &InventoryList) -> RegistryResult<()> {
        self.delete_key(list.id())
    }

    pub fn delete_key(&self, key: &ListKey) -> RegistryResult<()> {
        self.store.delete(key)?;
        info!(key = %key, "list deleted");
        Ok(())
    }

    /// Overview of every stored list, ordered by key.
    ///
    /// A record that fails to load still gets a row, carrying the error.
    pub fn summaries(&self) -> RegistryResult<Vec<ListSummary>> {
        let keys = self.store.list_keys()?;
        Ok(keys
            .iter()
            .map(|key| match self.open_key(key) {
                Ok(list) => ListSummary::of(&list),
                Err(err) => {
                    warn!(key = %key, error = %err, "list could not be read");
                    ListSummary::unreadable(key, &err)
                }
            })
            .collect())
    }

    fn ensure_free(&self, key: &ListKey) -> RegistryResult<()> {
        if self.store.exists(key)? {
            return Err(DomainError::validation(format!(
                "name collision: a list with key '{key}' already exists"
            ))
            .into());
        }
        Ok(())
    }
}
