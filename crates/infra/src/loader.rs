//! Off-thread list loading.
//!
//! Reading a document is the only step that may be slow, so it can be handed
//! to a worker thread while the caller stays responsive. The loaded list is
//! handed back through a channel; all mutation still happens on the caller's
//! thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::debug;

use collectify_core::ListKey;
use collectify_inventory::InventoryList;

use crate::registry::{ListRegistry, RegistryError, RegistryResult};
use crate::storage::{ListStore, StoreError};

/// A load running on a worker thread.
#[derive(Debug)]
pub struct PendingLoad {
    key: ListKey,
    rx: Receiver<RegistryResult<InventoryList>>,
}

/// Start loading `key` from `store` on a new thread.
pub fn load_in_background<S>(store: Arc<S>, key: ListKey) -> PendingLoad
where
    S: ListStore + ?Sized + 'static,
{
    let (tx, rx) = mpsc::channel();
    let worker_key = key.clone();
    thread::spawn(move || {
        debug!(key = %worker_key, "background load started");
        let result = ListRegistry::new(store).open_key(&worker_key);
        // The receiver may have been dropped; nobody is waiting then.
        let _ = tx.send(result);
    });
    PendingLoad { key, rx }
}

impl PendingLoad {
    pub fn key(&self) -> &ListKey {
        &self.key
    }

    /// Non-blocking poll. `None` while the load is still running.
    pub fn try_take(&self) -> Option<RegistryResult<InventoryList>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(worker_died())),
        }
    }

    /// Block until the load finishes.
    pub fn wait(self) -> RegistryResult<InventoryList> {
        self.rx.recv().unwrap_or_else(|_| Err(worker_died()))
    }

    /// Block for at most `timeout`; gives the pending load back if it is
    /// still running.
    pub fn wait_timeout(self, timeout: Duration) -> Result<RegistryResult<InventoryList>, Self> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Ok(result),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(self),
            Err(mpsc::RecvTimeoutError::Disconnected) => Ok(Err(worker_died())),
        }
    }
}

fn worker_died() -> RegistryError {
    RegistryError::Storage(StoreError::Unavailable(
        "background load ended without a result".to_string(),
    ))
}
