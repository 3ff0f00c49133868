//! An open list whose mutations are persisted as they happen.

use tracing::debug;

use collectify_core::{DomainError, Entity, ItemId};
use collectify_inventory::{
    FilterMode, InventoryList, ItemEntry, OwnershipChange, add_owned, entries, percentage,
    remove_owned, reset, view,
};

use crate::registry::{ListRegistry, RegistryResult};
use crate::storage::ListStore;

/// Working copy of one list, bound to the registry it was opened from.
///
/// Each successful mutation is saved immediately. When saving fails, the
/// in-memory list is rolled back so it never runs ahead of storage.
#[derive(Debug)]
pub struct ListSession<'r, S> {
    registry: &'r ListRegistry<S>,
    list: InventoryList,
}

impl<'r, S> ListSession<'r, S>
where
    S: ListStore,
{
    pub fn new(registry: &'r ListRegistry<S>, list: InventoryList) -> Self {
        Self { registry, list }
    }

    pub fn open(registry: &'r ListRegistry<S>, name: &str) -> RegistryResult<Self> {
        Ok(Self::new(registry, registry.open(name)?))
    }

    pub fn list(&self) -> &InventoryList {
        &self.list
    }

    pub fn into_list(self) -> InventoryList {
        self.list
    }

    pub fn add_owned(&mut self, raw_text: &str) -> RegistryResult<OwnershipChange> {
        self.mutate(|list| add_owned(list, raw_text))
    }

    pub fn remove_owned(&mut self, ids: &[ItemId]) -> RegistryResult<OwnershipChange> {
        self.mutate(|list| remove_owned(list, ids))
    }

    pub fn reset(&mut self) -> RegistryResult<OwnershipChange> {
        self.mutate(|list| Ok(reset(list)))
    }

    pub fn rename(&mut self, new_name: &str) -> RegistryResult<()> {
        self.registry.rename(&mut self.list, new_name)
    }

    /// Delete the stored record and close the session.
    pub fn delete(self) -> RegistryResult<InventoryList> {
        self.registry.delete(&self.list)?;
        Ok(self.list)
    }

    pub fn completion(&self) -> RegistryResult<u8> {
        Ok(percentage(&self.list)?)
    }

    pub fn view(&self, mode: FilterMode) -> Vec<ItemId> {
        view(&self.list, mode)
    }

    pub fn entries(&self, mode: FilterMode) -> Vec<ItemEntry> {
        entries(&self.list, mode)
    }

    fn mutate<F>(&mut self, op: F) -> RegistryResult<OwnershipChange>
    where
        F: FnOnce(&mut InventoryList) -> Result<OwnershipChange, DomainError>,
    {
        let before = self.list.clone();
        let change = op(&mut self.list)?;

        if let Err(err) = self.registry.save(&self.list) {
            self.list = before;
            return Err(err);
        }

        debug!(key = %self.list.id(), change = change.change_type(), "list updated");
        Ok(change)
    }
}
