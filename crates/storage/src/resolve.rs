//! Validation of raw lookup inputs before they reach a repository.
//!
//! Range checks only; existence is the repository's concern. An in-range
//! value that matches nothing yields `NotFound` downstream, never
//! `InvalidArgument`.

use crate::error::{Result, StorageError};

/// Shows were first recorded in 1998; nothing earlier can match.
pub const MIN_SHOW_YEAR: i32 = 1998;
pub const MAX_SHOW_YEAR: i32 = 9999;

/// Canonical entity identifiers are non-negative 32-bit integers.
pub fn entity_id(id: i32) -> Result<i32> {
    if id < 0 {
        return Err(StorageError::invalid(format!(
            "id must be non-negative, got {id}"
        )));
    }
    Ok(id)
}

/// Trim surrounding whitespace; case handling is left to the store's
/// collation.
pub fn slug(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StorageError::invalid("slug must not be empty"));
    }
    Ok(trimmed)
}

pub fn year(year: i32) -> Result<i32> {
    if !(MIN_SHOW_YEAR..=MAX_SHOW_YEAR).contains(&year) {
        return Err(StorageError::invalid(format!(
            "year must be between {MIN_SHOW_YEAR} and {MAX_SHOW_YEAR}, got {year}"
        )));
    }
    Ok(year)
}

pub fn month(month: i32) -> Result<i32> {
    if !(1..=12).contains(&month) {
        return Err(StorageError::invalid(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(month)
}

/// No per-month day validation here: February 31st is in range and simply
/// matches no show.
pub fn day(day: i32) -> Result<i32> {
    if !(1..=31).contains(&day) {
        return Err(StorageError::invalid(format!(
            "day must be between 1 and 31, got {day}"
        )));
    }
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_accepts_zero_and_positive() {
        assert_eq!(entity_id(0).unwrap(), 0);
        assert_eq!(entity_id(i32::MAX).unwrap(), i32::MAX);
    }

    #[test]
    fn test_entity_id_rejects_negative() {
        assert!(matches!(
            entity_id(-1),
            Err(StorageError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_slug_trims_whitespace() {
        assert_eq!(slug("  faith-salie \n").unwrap(), "faith-salie");
    }

    #[test]
    fn test_slug_rejects_blank() {
        assert!(matches!(slug("   "), Err(StorageError::InvalidArgument(_))));
    }

    #[test]
    fn test_year_bounds() {
        assert!(year(1997).is_err());
        assert_eq!(year(1998).unwrap(), 1998);
        assert_eq!(year(9999).unwrap(), 9999);
        assert!(year(10000).is_err());
    }

    #[test]
    fn test_month_bounds() {
        assert!(month(0).is_err());
        assert_eq!(month(1).unwrap(), 1);
        assert_eq!(month(12).unwrap(), 12);
        assert!(month(13).is_err());
    }

    #[test]
    fn test_day_bounds_are_calendar_agnostic() {
        assert!(day(0).is_err());
        assert_eq!(day(31).unwrap(), 31);
        assert!(day(32).is_err());
    }
}
