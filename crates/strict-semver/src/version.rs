//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::error::{Field, Result, SemverError};
use crate::rules::IdRules;
use crate::validator::{check_all_build_ids, check_all_pre_release_ids};
use crate::version_parser::VersionParser;

/// A semantic version: `v<major>.<minor>.<patch>[-<pre-release>][+<build>]`
///
/// Every live value satisfies the SemVer 2.0.0 grammar. The fields can only be
/// changed through the increment methods and the validating setters.
///
/// `Version::default()` is the unset placeholder, which formats as an empty
/// string.
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release_ids: Vec<String>,
    build_ids: Vec<String>,
    is_set: bool,
}

impl Version {
    /// Create a version, validating the pre-release and build ids
    pub fn new(major: u64, minor: u64, patch: u64, pre_release_ids: &[&str], build_ids: &[&str]) -> Result<Self> {
        Self::with_rules(major, minor, patch, pre_release_ids, build_ids, &IdRules::default())
    }

    /// Create a version, running `rules` after the built-in checks
    pub fn with_rules(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release_ids: &[&str],
        build_ids: &[&str],
        rules: &IdRules,
    ) -> Result<Self> {
        Self::from_parts(major, minor, patch, to_owned_ids(pre_release_ids), to_owned_ids(build_ids), rules)
    }

    /// A version with no pre-release or build ids; always valid
    pub fn core(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release_ids: Vec::new(),
            build_ids: Vec::new(),
            is_set: true,
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release_ids: Vec<String>,
        build_ids: Vec<String>,
        rules: &IdRules,
    ) -> Result<Self> {
        check_all_pre_release_ids(&pre_release_ids)?;
        check_all_build_ids(&build_ids)?;
        rules.check_pre_release(&pre_release_ids)?;
        rules.check_build(&build_ids)?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release_ids,
            build_ids,
            is_set: true,
        })
    }

    /// Parse a version that must start with a 'v'
    pub fn parse(version: &str) -> Result<Self> {
        VersionParser::new().parse(version)
    }

    /// Parse a version whose 'v' prefix has already been removed
    pub fn parse_strict(version: &str) -> Result<Self> {
        VersionParser::new().parse_strict(version)
    }

    /// Parse a version known to be valid, such as a literal in source code.
    ///
    /// # Panics
    ///
    /// Panics if `version` is not a valid 'v' prefixed semantic version.
    pub fn must_parse(version: &str) -> Self {
        match Self::parse(version) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release_ids(&self) -> &[String] {
        &self.pre_release_ids
    }

    pub fn build_ids(&self) -> &[String] {
        &self.build_ids
    }

    pub fn has_pre_release(&self) -> bool {
        !self.pre_release_ids.is_empty()
    }

    pub fn has_build(&self) -> bool {
        !self.build_ids.is_empty()
    }

    /// False only for the `Default` placeholder
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Bump the major version, resetting minor and patch and dropping any
    /// pre-release ids. Build ids are kept.
    ///
    /// Fails with `Overflow` if the major version is already `u64::MAX`; the
    /// version is then left unchanged.
    pub fn incr_major(&mut self) -> Result<()> {
        self.major = incr(self.major, Field::Major)?;
        self.minor = 0;
        self.patch = 0;
        self.clear_pre_release_ids();
        Ok(())
    }

    /// Bump the minor version, resetting patch and dropping any pre-release
    /// ids. Build ids are kept. Fails with `Overflow` at `u64::MAX`.
    pub fn incr_minor(&mut self) -> Result<()> {
        self.minor = incr(self.minor, Field::Minor)?;
        self.patch = 0;
        self.clear_pre_release_ids();
        Ok(())
    }

    /// Bump the patch version and drop any pre-release ids. Build ids are kept.
    /// Fails with `Overflow` at `u64::MAX`.
    pub fn incr_patch(&mut self) -> Result<()> {
        self.patch = incr(self.patch, Field::Patch)?;
        self.clear_pre_release_ids();
        Ok(())
    }

    /// Replace the pre-release ids. On error the version is left unchanged.
    ///
    /// Only the built-in grammar is checked. Rules given to [`Version::with_rules`]
    /// or [`VersionParser::with_rules`] are not kept with the value, so run
    /// [`IdRules::check_pre_release`] first if they must still hold.
    pub fn set_pre_release_ids(&mut self, ids: &[&str]) -> Result<()> {
        check_all_pre_release_ids(ids)?;
        self.pre_release_ids = to_owned_ids(ids);
        self.is_set = true;
        Ok(())
    }

    /// Replace the build ids. On error the version is left unchanged.
    ///
    /// As with [`Version::set_pre_release_ids`], caller rules are not re-run.
    pub fn set_build_ids(&mut self, ids: &[&str]) -> Result<()> {
        check_all_build_ids(ids)?;
        self.build_ids = to_owned_ids(ids);
        self.is_set = true;
        Ok(())
    }

    pub fn clear_pre_release_ids(&mut self) {
        self.pre_release_ids.clear();
        self.is_set = true;
    }

    pub fn clear_build_ids(&mut self) {
        self.build_ids.clear();
        self.is_set = true;
    }

    /// Precedence ordering; build ids are ignored
    pub fn precedence(&self, other: &Version) -> Ordering {
        Comparator::compare(self, other)
    }
}

fn incr(n: u64, field: Field) -> Result<u64> {
    n.checked_add(1).ok_or(SemverError::Overflow { field })
}

fn to_owned_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        Comparator::equals(self, other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release_ids.hash(state);
        self.build_ids.hash(state);
    }
}

// Versions that tie on precedence but carry different build ids are unordered,
// which keeps this consistent with the strict equality above.
impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        match Comparator::compare(self, other) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set {
            return Ok(());
        }
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release_ids.is_empty() {
            write!(f, "-{}", self.pre_release_ids.join("."))?;
        }
        if !self.build_ids.is_empty() {
            write!(f, "+{}", self.build_ids.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = SemverError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rules;

    #[test]
    fn test_new() {
        assert_eq!(Version::new(0, 0, 0, &[], &[]).unwrap().to_string(), "v0.0.0");
        assert_eq!(Version::new(1, 2, 3, &[], &[]).unwrap().to_string(), "v1.2.3");
        assert_eq!(
            Version::new(1, 2, 3, &["xxx", "XXX"], &[]).unwrap().to_string(),
            "v1.2.3-xxx.XXX"
        );
        assert_eq!(
            Version::new(1, 2, 3, &[], &["yyy", "YYY"]).unwrap().to_string(),
            "v1.2.3+yyy.YYY"
        );
        assert_eq!(
            Version::new(1, 2, 3, &["xxx", "XXX"], &["yyy", "YYY"]).unwrap().to_string(),
            "v1.2.3-xxx.XXX+yyy.YYY"
        );
    }

    #[test]
    fn test_new_rejects_bad_ids() {
        let err = Version::new(1, 2, 3, &["aaa", "a$a", "bbb"], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        assert_eq!(err.field(), Some(Field::PreRelease));

        let err = Version::new(1, 2, 3, &["0", "012", "bbb"], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LeadingZero);

        let err = Version::new(1, 2, 3, &[], &["aaa", "a$a", "bbb"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        assert_eq!(err.field(), Some(Field::Build));

        // leading zeros are fine in build ids
        assert!(Version::new(1, 2, 3, &[], &["007"]).is_ok());
    }

    #[test]
    fn test_with_rules() {
        let rules = IdRules::new().build(rules::must_be_empty());

        assert!(Version::with_rules(1, 0, 0, &["rc", "1"], &[], &rules).is_ok());
        let err = Version::with_rules(1, 0, 0, &[], &["linux"], &rules).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExternalRuleViolation);

        // built-in checks come first
        let err = Version::with_rules(1, 0, 0, &[], &["a$a"], &rules).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
    }

    #[test]
    fn test_unset_formats_empty() {
        let v = Version::default();
        assert!(!v.is_set());
        assert_eq!(v.to_string(), "");
        assert!(Version::core(0, 0, 0).is_set());
    }

    #[test]
    fn test_incr() {
        let base = Version::new(1, 2, 3, &["Pre-Rel-ID"], &["Build-ID"]).unwrap();

        let mut v = base.clone();
        v.incr_major().unwrap();
        assert_eq!(v, Version::new(2, 0, 0, &[], &["Build-ID"]).unwrap());

        let mut v = base.clone();
        v.incr_minor().unwrap();
        assert_eq!(v, Version::new(1, 3, 0, &[], &["Build-ID"]).unwrap());

        let mut v = base.clone();
        v.incr_patch().unwrap();
        assert_eq!(v, Version::new(1, 2, 4, &[], &["Build-ID"]).unwrap());

        // the base value is untouched
        assert_eq!(base.to_string(), "v1.2.3-Pre-Rel-ID+Build-ID");
    }

    #[test]
    fn test_incr_marks_unset_as_set() {
        let mut v = Version::default();
        v.incr_minor().unwrap();
        assert_eq!(v.to_string(), "v0.1.0");
    }

    #[test]
    fn test_incr_at_max_fails_and_leaves_value() {
        let mut v = Version::new(u64::MAX, 7, 8, &["rc"], &["b"]).unwrap();
        let err = v.incr_major().unwrap_err();
        assert_eq!(err, SemverError::Overflow { field: Field::Major });
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(v, Version::new(u64::MAX, 7, 8, &["rc"], &["b"]).unwrap());

        let mut v = Version::core(1, u64::MAX, 2);
        assert_eq!(v.incr_minor().unwrap_err().field(), Some(Field::Minor));
        assert_eq!(v.to_string(), format!("v1.{}.2", u64::MAX));
        // a lower field can still roll over the maxed one
        v.incr_major().unwrap();
        assert_eq!(v, Version::core(2, 0, 0));

        let mut v = Version::core(0, 0, u64::MAX);
        assert_eq!(v.incr_patch().unwrap_err().kind(), ErrorKind::Overflow);
        v.incr_minor().unwrap();
        assert_eq!(v, Version::core(0, 1, 0));
    }

    #[test]
    fn test_setters_validate() {
        let mut v = Version::must_parse("v1.2.3-rc.1+b1");

        assert!(v.set_pre_release_ids(&["rc", "01"]).is_err());
        assert!(v.set_build_ids(&["ok", ""]).is_err());
        assert_eq!(v.to_string(), "v1.2.3-rc.1+b1");

        v.set_pre_release_ids(&["beta", "2"]).unwrap();
        v.set_build_ids(&["2024", "01"]).unwrap();
        assert_eq!(v.to_string(), "v1.2.3-beta.2+2024.01");

        v.clear_pre_release_ids();
        v.clear_build_ids();
        assert_eq!(v.to_string(), "v1.2.3");
    }

    #[test]
    fn test_clone_does_not_alias() {
        let a = Version::must_parse("v1.0.0-alpha+x");
        let mut b = a.clone();
        b.set_pre_release_ids(&["beta"]).unwrap();
        b.set_build_ids(&["y"]).unwrap();

        assert_eq!(a.pre_release_ids(), ["alpha"]);
        assert_eq!(a.build_ids(), ["x"]);
    }

    #[test]
    fn test_partial_ord() {
        let a = Version::must_parse("v1.0.0-alpha");
        let b = Version::must_parse("v1.0.0");
        assert!(a < b);
        assert!(b > a);

        let x = Version::must_parse("v1.0.0+a");
        let y = Version::must_parse("v1.0.0+b");
        assert_eq!(x.partial_cmp(&y), None);
        assert_eq!(x.precedence(&y), Ordering::Equal);
        assert_eq!(x.partial_cmp(&x.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn test_from_str() {
        let v: Version = "v1.2.3-rc.1".parse().unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
        assert_eq!(v.pre_release_ids(), ["rc", "1"]);
        assert!(!v.has_build());

        assert!(Version::try_from("1.2.3").is_err());
    }

    #[test]
    #[should_panic(expected = "does not start with a 'v'")]
    fn test_must_parse_panics() {
        Version::must_parse("1.2.3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let v = Version::must_parse("v1.2.3-rc.1+build.5");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"v1.2.3-rc.1+build.5\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<Version>("\"1.2.3\"").is_err());
    }
}
