//! Infrastructure layer: list storage, lifecycle orchestration, config.

pub mod config;
pub mod loader;
pub mod registry;
pub mod session;
pub mod storage;

pub use config::StorageConfig;
pub use loader::{PendingLoad, load_in_background};
pub use registry::{ListRegistry, ListSummary, RegistryError, RegistryResult};
pub use session::ListSession;
pub use storage::{InMemoryListStore, JsonFileListStore, ListStore, StoreError};
