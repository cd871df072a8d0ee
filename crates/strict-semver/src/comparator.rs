//! Version precedence and equality

use std::cmp::Ordering;

use crate::validator::is_numeric_id;
use crate::Version;

/// Comparator implementing SemVer 2.0.0 precedence rules
pub struct Comparator;

impl Comparator {
    /// Check if a has lower precedence than b
    pub fn less(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Check if a has higher precedence than b
    pub fn greater(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Check if a does not have higher precedence than b
    pub fn less_or_equal(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Greater
    }

    /// Check if a does not have lower precedence than b
    pub fn greater_or_equal(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Less
    }

    /// Check if a and b are identical, including the order of their build ids
    pub fn equals(a: &Version, b: &Version) -> bool {
        a.major() == b.major()
            && a.minor() == b.minor()
            && a.patch() == b.patch()
            && a.pre_release_ids() == b.pre_release_ids()
            && a.build_ids() == b.build_ids()
    }

    /// Order a and b by precedence. Build ids are ignored.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| Self::compare_pre_release(a.pre_release_ids(), b.pre_release_ids()))
    }

    /// Check if the pre-release ids of a sort before those of b
    pub fn less_pre_release(a: &Version, b: &Version) -> bool {
        Self::compare_pre_release(a.pre_release_ids(), b.pre_release_ids()) == Ordering::Less
    }

    /// Order two pre-release id lists.
    ///
    /// A version with pre-release ids is lower than one without. Otherwise
    /// ids are compared pairwise: numeric ids numerically, other ids by
    /// ASCII value, and a numeric id is always lower than an alphanumeric
    /// one. If all compared ids are equal the shorter list is lower.
    pub fn compare_pre_release<S: AsRef<str>>(a: &[S], b: &[S]) -> Ordering {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (false, false) => {}
        }

        for (a_id, b_id) in a.iter().zip(b.iter()) {
            let ord = compare_id(a_id.as_ref(), b_id.as_ref());
            if ord != Ordering::Equal {
                return ord;
            }
        }

        a.len().cmp(&b.len())
    }
}

fn compare_id(a: &str, b: &str) -> Ordering {
    match (is_numeric_id(a), is_numeric_id(b)) {
        // no leading zeros, so the longer number is the larger one
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
