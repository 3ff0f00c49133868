//! Storage providers for list documents.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryListStore;
pub use json_file::JsonFileListStore;
pub use r#trait::{ListStore, StoreError};
