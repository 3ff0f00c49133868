//! Collection inventory domain module.
//!
//! This crate contains the rules for tracking which numbered items of a
//! collection are owned, implemented purely as deterministic domain logic
//! (no IO, no logging, no storage).

pub mod completion;
pub mod filter;
pub mod list;
pub mod ownership;
pub mod range;

pub use completion::percentage;
pub use filter::{FilterMode, ItemEntry, entries, view};
pub use list::{DEFAULT_IMAGE, InventoryList, ListDocument};
pub use ownership::{OwnershipChange, add_owned, remove_owned, reset};
