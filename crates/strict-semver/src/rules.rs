//! Caller-supplied rules over identifier lists
//!
//! Rules run after the built-in grammar checks. They let a project enforce its
//! own policy, e.g. forbid build metadata entirely or limit pre-release IDs to
//! a known set of labels.

use std::fmt;

use regex::Regex;

use crate::error::{Field, Result, SemverError};

/// A check over a whole identifier list
pub trait IdRule: Send + Sync {
    /// Return `Err` with a human readable reason if the ids are unacceptable
    fn check(&self, ids: &[String]) -> std::result::Result<(), String>;
}

impl<F> IdRule for F
where
    F: Fn(&[String]) -> std::result::Result<(), String> + Send + Sync,
{
    fn check(&self, ids: &[String]) -> std::result::Result<(), String> {
        self(ids)
    }
}

/// Ordered rule lists for pre-release and build identifiers
#[derive(Default)]
pub struct IdRules {
    pre_release: Vec<Box<dyn IdRule>>,
    build: Vec<Box<dyn IdRule>>,
}

impl IdRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule for pre-release identifiers
    pub fn pre_release(mut self, rule: impl IdRule + 'static) -> Self {
        self.pre_release.push(Box::new(rule));
        self
    }

    /// Append a rule for build identifiers
    pub fn build(mut self, rule: impl IdRule + 'static) -> Self {
        self.build.push(Box::new(rule));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pre_release.is_empty() && self.build.is_empty()
    }

    /// Run the pre-release rules in order, returning the first failure
    pub fn check_pre_release(&self, ids: &[String]) -> Result<()> {
        run(&self.pre_release, Field::PreRelease, ids)
    }

    /// Run the build rules in order, returning the first failure
    pub fn check_build(&self, ids: &[String]) -> Result<()> {
        run(&self.build, Field::Build, ids)
    }
}

fn run(rules: &[Box<dyn IdRule>], field: Field, ids: &[String]) -> Result<()> {
    for rule in rules {
        if let Err(reason) = rule.check(ids) {
            log::debug!("{} rule rejected {:?}: {}", field, ids, reason);
            return Err(SemverError::ExternalRuleViolation { field, reason });
        }
    }
    Ok(())
}

impl fmt::Debug for IdRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdRules")
            .field("pre_release", &self.pre_release.len())
            .field("build", &self.build.len())
            .finish()
    }
}

/// Reject any non-empty list
pub fn must_be_empty() -> impl IdRule {
    |ids: &[String]| {
        if ids.is_empty() {
            Ok(())
        } else {
            Err(format!("there must be no IDs, found {}", ids.len()))
        }
    }
}

/// Reject lists longer than `max`
pub fn max_ids(max: usize) -> impl IdRule {
    move |ids: &[String]| {
        if ids.len() <= max {
            Ok(())
        } else {
            Err(format!("there must be at most {} IDs, found {}", max, ids.len()))
        }
    }
}

/// Require every id to match `re`
pub fn each_matches(re: Regex) -> impl IdRule {
    move |ids: &[String]| match ids.iter().find(|id| !re.is_match(id)) {
        Some(id) => Err(format!("'{}' does not match /{}/", id, re.as_str())),
        None => Ok(()),
    }
}
