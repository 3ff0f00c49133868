//! Item-selection parsing (`"1-3, 5, 9-12"`).

use std::collections::BTreeSet;

use collectify_core::{ItemId, MAX_ITEMS, ParseError};

/// Parse comma-separated ids and `a-b` ranges into an ascending id set.
///
/// Duplicates collapse. Blank input, blank tokens, non-numeric tokens and
/// reversed ranges are rejected; nothing is partially returned.
pub fn parse(text: &str) -> Result<BTreeSet<ItemId>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut ids = BTreeSet::new();
    for raw in text.split(',') {
        let token = raw.trim();
        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_number(start.trim(), token)?;
                let end = parse_number(end.trim(), token)?;
                if start > end {
                    return Err(ParseError::InvalidRange(token.to_string()));
                }
                if end - start >= MAX_ITEMS {
                    return Err(ParseError::RangeTooLarge(token.to_string()));
                }
                ids.extend(start..=end);
            }
            None => {
                ids.insert(parse_number(token, token)?);
            }
        }
    }
    Ok(ids)
}

/// Parse a comma-only list of single ids; ranges are rejected as tokens.
pub fn parse_ids(text: &str) -> Result<BTreeSet<ItemId>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    text.split(',')
        .map(str::trim)
        .map(|token| parse_number(token, token))
        .collect()
}

// `token` is reported on failure so a bad half of a range names the whole range.
fn parse_number(part: &str, token: &str) -> Result<ItemId, ParseError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidToken(token.to_string()));
    }
    part.parse()
        .map_err(|_| ParseError::InvalidToken(token.to_string()))
}
