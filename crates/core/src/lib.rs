//! `collectify-core` — shared building blocks for collection tracking.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, identifiers and the entity trait.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ParseError};
pub use id::{ItemId, ListKey, MAX_ITEMS};
