//! Identifier and numeric field validation

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Field, Result, SemverError};

lazy_static! {
    static ref ID_RE: Regex = Regex::new(r"^[-0-9A-Za-z]+$").unwrap();
    static ref NUMERIC_ONLY_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref GOOD_NUMERIC_RE: Regex = Regex::new(r"^(0|[1-9][0-9]*)$").unwrap();
}

/// Check that `id` is usable as a build identifier
pub fn check_build_id(id: &str) -> Result<()> {
    if !ID_RE.is_match(id) {
        return Err(SemverError::InvalidIdentifier {
            field: Field::Build,
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Check that `id` is usable as a pre-release identifier.
///
/// All-digit identifiers must not have a leading zero (other than "0" itself).
pub fn check_pre_release_id(id: &str) -> Result<()> {
    if NUMERIC_ONLY_RE.is_match(id) {
        if !GOOD_NUMERIC_RE.is_match(id) {
            return Err(SemverError::LeadingZero {
                field: Field::PreRelease,
                value: id.to_string(),
            });
        }
        return Ok(());
    }
    if !ID_RE.is_match(id) {
        return Err(SemverError::InvalidIdentifier {
            field: Field::PreRelease,
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Check every build identifier, stopping at the first bad one
pub fn check_all_build_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    ids.iter().try_for_each(|id| check_build_id(id.as_ref()))
}

/// Check every pre-release identifier, stopping at the first bad one
pub fn check_all_pre_release_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    ids.iter().try_for_each(|id| check_pre_release_id(id.as_ref()))
}

/// Check a signed version number and return it as the unsigned field value.
///
/// Values below zero are `NegativeVersionNumber`; values above `u64::MAX`
/// cannot be stored and are `NotANumber`.
pub fn check_numeric_field(field: Field, value: i128) -> Result<u64> {
    if value < 0 {
        return Err(SemverError::NegativeVersionNumber { field, value });
    }
    u64::try_from(value).map_err(|_| SemverError::NotANumber {
        field,
        value: value.to_string(),
    })
}

/// Whether `id` is a well-formed numeric identifier (digits, no leading zero)
pub fn is_numeric_id(id: &str) -> bool {
    GOOD_NUMERIC_RE.is_match(id)
}
