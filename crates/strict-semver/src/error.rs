//! Error types for version construction and parsing

use std::fmt;
use thiserror::Error;

/// The part of a version an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    PreRelease,
    Build,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major version",
            Field::Minor => "minor version",
            Field::Patch => "patch version",
            Field::PreRelease => "pre-release ID",
            Field::Build => "build ID",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Root cause of a [`SemverError`], with any context layers removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingPrefix,
    MalformedCore,
    NotANumber,
    LeadingZero,
    NegativeVersionNumber,
    InvalidIdentifier,
    ExternalRuleViolation,
    Overflow,
}

/// Error type for version construction, validation and parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("it does not start with a 'v'")]
    MissingPrefix,
    #[error("it cannot be split into major/minor/patch parts (found {parts} parts)")]
    MalformedCore { parts: usize },
    #[error("bad {field}: '{value}' - it is not a number")]
    NotANumber { field: Field, value: String },
    #[error("bad {field}: '{value}' - it has a leading 0")]
    LeadingZero { field: Field, value: String },
    #[error("bad {field}: {value} - it must be greater than or equal to zero")]
    NegativeVersionNumber { field: Field, value: i128 },
    #[error("bad {field}: '{id}' - it must be a non-empty string of letters, digits or hyphens")]
    InvalidIdentifier { field: Field, id: String },
    #[error("the {field}s break a rule: {reason}")]
    ExternalRuleViolation { field: Field, reason: String },
    #[error("the {field} is already {max} and cannot be incremented", max = u64::MAX)]
    Overflow { field: Field },
    #[error("bad semantic version ID '{input}' - {source}")]
    Parse {
        input: String,
        #[source]
        source: Box<SemverError>,
    },
}

impl SemverError {
    /// The underlying kind of failure, looking through any context wrapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            SemverError::MissingPrefix => ErrorKind::MissingPrefix,
            SemverError::MalformedCore { .. } => ErrorKind::MalformedCore,
            SemverError::NotANumber { .. } => ErrorKind::NotANumber,
            SemverError::LeadingZero { .. } => ErrorKind::LeadingZero,
            SemverError::NegativeVersionNumber { .. } => ErrorKind::NegativeVersionNumber,
            SemverError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            SemverError::ExternalRuleViolation { .. } => ErrorKind::ExternalRuleViolation,
            SemverError::Overflow { .. } => ErrorKind::Overflow,
            SemverError::Parse { source, .. } => source.kind(),
        }
    }

    /// The field the failure refers to, if it is specific to one
    pub fn field(&self) -> Option<Field> {
        match self {
            SemverError::MissingPrefix | SemverError::MalformedCore { .. } => None,
            SemverError::NotANumber { field, .. }
            | SemverError::LeadingZero { field, .. }
            | SemverError::NegativeVersionNumber { field, .. }
            | SemverError::InvalidIdentifier { field, .. }
            | SemverError::ExternalRuleViolation { field, .. }
            | SemverError::Overflow { field } => Some(*field),
            SemverError::Parse { source, .. } => source.field(),
        }
    }

    pub(crate) fn in_input(self, input: &str) -> Self {
        SemverError::Parse {
            input: input.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SemverError>;
