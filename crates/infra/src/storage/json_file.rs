//! One pretty-printed JSON document per list, stored as `<key>.json`.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use collectify_core::ListKey;
use collectify_inventory::ListDocument;

use super::r#trait::{ListStore, StoreError};

const EXTENSION: &str = "json";

/// Directory-backed list store.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a document on disk is always either the old or the new one.
/// There is no locking: concurrent writers from other processes can still
/// overwrite each other.
#[derive(Debug, Clone)]
pub struct JsonFileListStore {
    dir: PathBuf,
}

impl JsonFileListStore {
    /// Use `dir` as the list directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "list directory ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &ListKey) -> PathBuf {
        self.dir.join(format!("{}.{EXTENSION}", key.as_str()))
    }

    fn not_found_as(key: &ListKey) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(key.clone()),
            _ => StoreError::Io(err),
        }
    }
}

impl ListStore for JsonFileListStore {
    fn load(&self, key: &ListKey) -> Result<ListDocument, StoreError> {
        let path = self.path_for(key);
        let bytes = fs::read(&path).map_err(Self::not_found_as(key))?;
        let document = serde_json::from_slice(&bytes)?;
        debug!(key = %key, path = %path.display(), "loaded list document");
        Ok(document)
    }

    fn save(&self, key: &ListKey, document: &ListDocument) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));

        let mut encoded = serde_json::to_vec_pretty(document)?;
        encoded.push(b'\n');
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&encoded)?;
            file.sync_all()?;
        }
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        debug!(key = %key, path = %path.display(), "saved list document");
        Ok(())
    }

    fn delete(&self, key: &ListKey) -> Result<(), StoreError> {
        let path = self.path_for(key);
        fs::remove_file(&path).map_err(Self::not_found_as(key))?;
        debug!(key = %key, path = %path.display(), "deleted list document");
        Ok(())
    }

    fn rename(&self, from: &ListKey, to: &ListKey) -> Result<(), StoreError> {
        let source = self.path_for(from);
        let target = self.path_for(to);
        if target.try_exists()? {
            return Err(StoreError::AlreadyExists(to.clone()));
        }
        fs::rename(&source, &target).map_err(Self::not_found_as(from))?;
        debug!(from = %from, to = %to, "renamed list document");
        Ok(())
    }

    fn exists(&self, key: &ListKey) -> Result<bool, StoreError> {
        Ok(self.path_for(key).try_exists()?)
    }

    fn list_keys(&self) -> Result<Vec<ListKey>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match ListKey::from_name(stem) {
                Ok(key) if key.as_str() == stem => keys.push(key),
                _ => warn!(path = %path.display(), "skipping file whose name is not a list key"),
            }
        }
        keys.sort();
        Ok(keys)
    }
}
