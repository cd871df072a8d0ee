//! Strict semantic versions
//!
//! This crate provides parsing, validation, formatting and precedence ordering
//! for SemVer 2.0.0 version numbers written with a leading 'v', such as
//! `v1.4.0-rc.2+linux.amd64`.
//!
//! ```
//! use strict_semver::{Comparator, Version};
//!
//! let mut v = Version::parse("v1.2.3-rc.1+build").unwrap();
//! assert!(Comparator::less(&v, &Version::core(1, 2, 3)));
//!
//! v.incr_minor().unwrap();
//! assert_eq!(v.to_string(), "v1.3.0+build");
//! ```

mod comparator;
mod error;
pub mod rules;
pub mod validator;
mod version;
mod version_list;
mod version_parser;

pub use comparator::Comparator;
pub use error::{ErrorKind, Field, Result, SemverError};
pub use rules::{IdRule, IdRules};
pub use version::Version;
pub use version_list::VersionList;
pub use version_parser::VersionParser;
