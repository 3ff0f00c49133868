use std::collections::BTreeMap;
use std::sync::RwLock;

use collectify_core::ListKey;
use collectify_inventory::ListDocument;

use super::r#trait::{ListStore, StoreError};

/// In-memory list store.
///
/// Intended for tests/dev. Documents are kept exactly as saved.
#[derive(Debug, Default)]
pub struct InMemoryListStore {
    lists: RwLock<BTreeMap<ListKey, ListDocument>>,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

impl ListStore for InMemoryListStore {
    fn load(&self, key: &ListKey) -> Result<ListDocument, StoreError> {
        let lists = self.lists.read().map_err(|_| Self::poisoned())?;
        lists
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.clone()))
    }

    fn save(&self, key: &ListKey, document: &ListDocument) -> Result<(), StoreError> {
        let mut lists = self.lists.write().map_err(|_| Self::poisoned())?;
        lists.insert(key.clone(), document.clone());
        Ok(())
    }

    fn delete(&self, key: &ListKey) -> Result<(), StoreError> {
        let mut lists = self.lists.write().map_err(|_| Self::poisoned())?;
        lists
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.clone()))
    }

    fn rename(&self, from: &ListKey, to: &ListKey) -> Result<(), StoreError> {
        let mut lists = self.lists.write().map_err(|_| Self::poisoned())?;
        if lists.contains_key(to) {
            return Err(StoreError::AlreadyExists(to.clone()));
        }
        let document = lists
            .remove(from)
            .ok_or_else(|| StoreError::NotFound(from.clone()))?;
        lists.insert(to.clone(), document);
        Ok(())
    }

    fn exists(&self, key: &ListKey) -> Result<bool, StoreError> {
        let lists = self.lists.read().map_err(|_| Self::poisoned())?;
        Ok(lists.contains_key(key))
    }

    fn list_keys(&self) -> Result<Vec<ListKey>, StoreError> {
        let lists = self.lists.read().map_err(|_| Self::poisoned())?;
        Ok(lists.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collectify_inventory::InventoryList;

    fn key(name: &str) -> ListKey {
        ListKey::from_name(name).unwrap()
    }

    fn document(name: &str) -> ListDocument {
        InventoryList::new(name, 3, None).unwrap().to_document()
    }

    #[test]
    fn save_then_load_returns_document() {
        let store = InMemoryListStore::new();
        store.save(&key("Cards"), &document("Cards")).unwrap();
        assert_eq!(store.load(&key("Cards")).unwrap(), document("Cards"));
    }

    #[test]
    fn load_and_delete_of_absent_key_are_not_found() {
        let store = InMemoryListStore::new();
        assert!(matches!(store.load(&key("nope")), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(&key("nope")), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn rename_refuses_existing_target() {
        let store = InMemoryListStore::new();
        store.save(&key("a"), &document("a")).unwrap();
        store.save(&key("b"), &document("b")).unwrap();

        assert!(matches!(
            store.rename(&key("a"), &key("b")),
            Err(StoreError::AlreadyExists(_))
        ));
        assert_eq!(store.list_keys().unwrap(), vec![key("a"), key("b")]);
    }

    #[test]
    fn rename_moves_record() {
        let store = InMemoryListStore::new();
        store.save(&key("a"), &document("a")).unwrap();
        store.rename(&key("a"), &key("c")).unwrap();

        assert!(!store.exists(&key("a")).unwrap());
        assert!(store.exists(&key("c")).unwrap());
    }
}
