//! Identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of one item inside a collection (1-based).
pub type ItemId = u32;

/// Upper bound on the number of items a single list may track.
pub const MAX_ITEMS: u32 = 1_000_000;

const KEY_SEPARATOR: char = '_';

/// Storage key of a list, derived deterministically from its display name.
///
/// Normalization trims surrounding whitespace, lowercases and replaces spaces
/// with `_`, so `"My Set"` and `"my_set"` share the key `my_set`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListKey(String);

impl ListKey {
    /// Normalize a display name into a key.
    ///
    /// Fails for names that are empty after trimming or that could escape a
    /// storage directory (path separators, `.` and `..`).
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("list name cannot be empty"));
        }

        let key: String = trimmed
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' { KEY_SEPARATOR } else { c })
            .collect();

        if key.contains(['/', '\\']) || key.chars().any(char::is_control) {
            return Err(DomainError::validation(format!(
                "list name contains characters not allowed in a key: {name:?}"
            )));
        }
        if key == "." || key == ".." {
            return Err(DomainError::validation(format!(
                "list name is reserved: {name:?}"
            )));
        }

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ListKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ListKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl AsRef<str> for ListKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercased_with_spaces_replaced() {
        let key = ListKey::from_name("  My Pokemon Set ").unwrap();
        assert_eq!(key.as_str(), "my_pokemon_set");
    }

    #[test]
    fn differently_spelled_names_share_a_key() {
        let a = ListKey::from_name("My Set").unwrap();
        let b: ListKey = "my_set".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_and_blank_names_are_rejected() {
        for name in ["", "   ", "\t"] {
            match ListKey::from_name(name) {
                Err(DomainError::Validation { .. }) => {}
                other => panic!("expected validation error for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn path_like_names_are_rejected() {
        for name in ["../etc", "a/b", "a\\b", ".", ".."] {
            assert!(ListKey::from_name(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn key_serializes_as_plain_string() {
        let key = ListKey::from_name("Cards 2024").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"cards_2024\"");
    }
}
