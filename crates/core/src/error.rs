//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Malformed item-selection syntax.
///
/// Always caused by user input; recoverable by asking again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was given.
    #[error("no items specified")]
    Empty,

    /// A range whose start is greater than its end (e.g. `5-3`).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A token that is neither an integer nor an `a-b` range.
    #[error("invalid token: {0:?}")]
    InvalidToken(String),

    /// A range covering more ids than any list can hold.
    #[error("range too large: {0}")]
    RangeTooLarge(String),
}

/// Domain-level error.
///
/// Keep this focused on deterministic failures caused by input or state.
/// Storage IO failures belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Item-selection text could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A semantically invalid operation. `ids` names the offending items, if any.
    #[error("validation failed: {message}{}", format_ids(.ids))]
    Validation { message: String, ids: Vec<ItemId> },

    /// A referenced list key is absent from storage.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            ids: Vec::new(),
        }
    }

    pub fn validation_with_ids(msg: impl Into<String>, ids: Vec<ItemId>) -> Self {
        Self::Validation {
            message: msg.into(),
            ids,
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Offending item ids carried by a validation failure (empty otherwise).
    pub fn offending_ids(&self) -> &[ItemId] {
        match self {
            Self::Validation { ids, .. } => ids,
            _ => &[],
        }
    }
}

fn format_ids(ids: &[ItemId]) -> String {
    if ids.is_empty() {
        return String::new();
    }
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(" ({joined})")
}
