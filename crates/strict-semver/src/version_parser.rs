//! Version string parsing
//!
//! Input is split right to left: build metadata at the first '+', then the
//! pre-release at the first '-' of what remains, and finally the
//! major/minor/patch core. Build ids are therefore validated before
//! pre-release ids, and both before the core numbers.

use crate::error::{Field, Result, SemverError};
use crate::rules::IdRules;
use crate::validator::{check_all_build_ids, check_all_pre_release_ids, check_numeric_field};
use crate::Version;

/// Parser for semantic version strings
#[derive(Debug, Default)]
pub struct VersionParser {
    rules: IdRules,
}

impl VersionParser {
    /// Create a parser applying only the built-in grammar checks
    pub fn new() -> Self {
        VersionParser { rules: IdRules::new() }
    }

    /// Create a parser that also applies `rules` to every parsed version
    pub fn with_rules(rules: IdRules) -> Self {
        VersionParser { rules }
    }

    /// Parse a version string which must start with a literal 'v'
    pub fn parse(&self, version: &str) -> Result<Version> {
        log::trace!("Parsing version {:?}", version);
        let Some(rest) = version.strip_prefix('v') else {
            log::debug!("Rejected version {:?}: missing 'v' prefix", version);
            return Err(SemverError::MissingPrefix.in_input(version));
        };
        self.parse_parts(rest).map_err(|e| reject(version, e))
    }

    /// Parse a version string with no leading 'v'
    pub fn parse_strict(&self, version: &str) -> Result<Version> {
        log::trace!("Parsing strict version {:?}", version);
        self.parse_parts(version).map_err(|e| reject(version, e))
    }

    fn parse_parts(&self, version: &str) -> Result<Version> {
        let mut rest = version;

        let mut build_ids = Vec::new();
        if let Some((head, build)) = rest.split_once('+') {
            rest = head;
            build_ids = split_ids(build);
            check_all_build_ids(&build_ids)?;
        }

        let mut pre_release_ids = Vec::new();
        if let Some((head, pre_release)) = rest.split_once('-') {
            rest = head;
            pre_release_ids = split_ids(pre_release);
            check_all_pre_release_ids(&pre_release_ids)?;
        }

        let parts: Vec<&str> = rest.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(SemverError::MalformedCore { parts: parts.len() });
        };

        let major = parse_number(major, Field::Major)?;
        let minor = parse_number(minor, Field::Minor)?;
        let patch = parse_number(patch, Field::Patch)?;

        Version::from_parts(major, minor, patch, pre_release_ids, build_ids, &self.rules)
    }
}

fn reject(version: &str, err: SemverError) -> SemverError {
    log::debug!("Rejected version {:?}: {}", version, err);
    err.in_input(version)
}

fn split_ids(s: &str) -> Vec<String> {
    s.split('.').map(str::to_string).collect()
}

fn parse_number(s: &str, field: Field) -> Result<u64> {
    if s.len() > 1 && s.starts_with('0') {
        return Err(SemverError::LeadingZero {
            field,
            value: s.to_string(),
        });
    }
    let n: i128 = s.parse().map_err(|_| SemverError::NotANumber {
        field,
        value: s.to_string(),
    })?;
    check_numeric_field(field, n)
}
