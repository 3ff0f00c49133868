use std::sync::Arc;

use thiserror::Error;

use collectify_core::ListKey;
use collectify_inventory::ListDocument;

/// Storage operation error.
///
/// These are **infrastructure errors** (missing records, IO, encoding) as
/// opposed to domain errors (validation, parsing).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no list stored under key '{0}'")]
    NotFound(ListKey),

    #[error("a list is already stored under key '{0}'")]
    AlreadyExists(ListKey),

    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("list document could not be encoded or decoded: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage provider for list documents, addressed by key.
///
/// Implementations must be safe to share across threads so that loads can be
/// moved off the caller's thread (see [`crate::loader`]).
pub trait ListStore: Send + Sync {
    fn load(&self, key: &ListKey) -> Result<ListDocument, StoreError>;

    /// Overwrite the record, creating it if absent.
    fn save(&self, key: &ListKey, document: &ListDocument) -> Result<(), StoreError>;

    fn delete(&self, key: &ListKey) -> Result<(), StoreError>;

    /// Move a record. Fails if `from` is absent or `to` already exists.
    fn rename(&self, from: &ListKey, to: &ListKey) -> Result<(), StoreError>;

    fn exists(&self, key: &ListKey) -> Result<bool, StoreError>;

    /// All stored keys, ascending.
    fn list_keys(&self) -> Result<Vec<ListKey>, StoreError>;
}

impl<S> ListStore for Arc<S>
where
    S: ListStore + ?Sized,
{
    fn load(&self, key: &ListKey) -> Result<ListDocument, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &ListKey, document: &ListDocument) -> Result<(), StoreError> {
        (**self).save(key, document)
    }

    fn delete(&self, key: &ListKey) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn rename(&self, from: &ListKey, to: &ListKey) -> Result<(), StoreError> {
        (**self).rename(from, to)
    }

    fn exists(&self, key: &ListKey) -> Result<bool, StoreError> {
        (**self).exists(key)
    }

    fn list_keys(&self) -> Result<Vec<ListKey>, StoreError> {
        (**self).list_keys()
    }
}
