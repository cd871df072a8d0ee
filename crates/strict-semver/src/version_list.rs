//! A sortable list of versions

use std::cmp::Ordering;
use std::ops::Deref;

use crate::{Comparator, Version};

/// An owned list of versions ordered by precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList(Vec<Version>);

impl VersionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, version: Version) {
        self.0.push(version);
    }

    /// Swap the versions at indexes i and j
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Check if the version at index i sorts before the one at index j
    pub fn less(&self, i: usize, j: usize) -> bool {
        Comparator::less(&self.0[i], &self.0[j])
    }

    /// Sort in ascending precedence. The sort is stable, so versions that
    /// differ only in build ids keep their relative order.
    pub fn sort(&mut self) {
        self.0.sort_by(Comparator::compare);
    }

    /// Sort in descending precedence
    pub fn rsort(&mut self) {
        self.0.sort_by(|a, b| Comparator::compare(a, b).reverse());
    }

    /// Check the list is in ascending precedence order
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| Comparator::compare(&w[0], &w[1]) != Ordering::Greater)
    }

    pub fn into_vec(self) -> Vec<Version> {
        self.0
    }
}

impl Deref for VersionList {
    type Target = [Version];

    fn deref(&self) -> &[Version] {
        &self.0
    }
}

impl From<Vec<Version>> for VersionList {
    fn from(versions: Vec<Version>) -> Self {
        VersionList(versions)
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        VersionList(iter.into_iter().collect())
    }
}

impl IntoIterator for VersionList {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
