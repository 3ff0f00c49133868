use collectify_core::{DomainError, DomainResult};

use crate::list::InventoryList;

/// Share of the universe currently owned, in whole percent (rounded down).
///
/// An empty universe has no defined completion and is reported as a
/// validation error instead of dividing by zero.
pub fn percentage(list: &InventoryList) -> DomainResult<u8> {
    let total = list.universe().len() as u64;
    if total == 0 {
        return Err(DomainError::validation("undefined completion: list has no items"));
    }
    let owned = list.possessed().len() as u64;
    // owned <= total, so the quotient is at most 100.
    Ok((owned * 100 / total) as u8)
}
