//! Version parsing, formatting and comparison
//!
//! A [`Version`] is a `major.minor.patch` triple with an optional free-form
//! label (`7.10.0-SNAPSHOT`). The label is carried along for display only:
//! equality, ordering and hashing look at the numeric triple alone.
//!
//! # Examples
//!
//! ```
//! use stackver::version::Version;
//!
//! let v = Version::parse("7.10.2-SNAPSHOT").unwrap();
//! assert_eq!(v.label, "SNAPSHOT");
//! assert!(v.is_after(&Version::new(7, 10, 1)));
//! assert!(v.is_same(&Version::new(7, 10, 2)));
//! assert_eq!(v.to_string(), "7.10.2-SNAPSHOT");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than three dot-separated segments
    #[error("version string has too few segments: {0}")]
    TooFewSegments(String),

    /// More than four dot-separated segments before the label
    #[error("version string has too many segments: {0}")]
    TooManySegments(String),

    /// Major segment is not an integer
    #[error("invalid major format. version: {version}")]
    InvalidMajor {
        /// The raw version string
        version: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// Minor segment is not an integer
    #[error("invalid minor format. version: {version}")]
    InvalidMinor {
        /// The raw version string
        version: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// Patch segment (before any `-label`) is not an integer
    #[error("invalid patch format. version: {version}")]
    InvalidPatch {
        /// The raw version string
        version: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
}

/// A parsed `major.minor.patch[-label]` version
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// Major version number
    pub major: u64,
    /// Minor version number
    pub minor: u64,
    /// Patch version number
    pub patch: u64,
    /// Free-form label after the first `-` of the patch segment (may be empty)
    pub label: String,
}

impl Version {
    /// Create a version from its numeric parts, with an empty label
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            label: String::new(),
        }
    }

    /// Parse a version string
    ///
    /// # Format
    ///
    /// ```text
    /// <major>.<minor>.<patch>[-<label>]
    /// ```
    ///
    /// The label is taken verbatim and may itself contain dots or dashes
    /// (`1.2.3-rc.1` has label `rc.1`). A fourth numeric segment is not a
    /// label: `1.2.3.4` fails on the patch segment and anything with five or
    /// more numeric segments is rejected as having too many segments.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let segments: Vec<&str> = s.splitn(3, '.').collect();
        let [major, minor, rest] = segments[..] else {
            return Err(ParseError::TooFewSegments(s.to_string()));
        };

        let (patch, label) = rest.split_once('-').unwrap_or((rest, ""));
        if 2 + patch.split('.').count() > 4 {
            return Err(ParseError::TooManySegments(s.to_string()));
        }

        let major = major.parse::<u64>().map_err(|source| ParseError::InvalidMajor {
            version: s.to_string(),
            source,
        })?;
        let minor = minor.parse::<u64>().map_err(|source| ParseError::InvalidMinor {
            version: s.to_string(),
            source,
        })?;
        let patch = patch.parse::<u64>().map_err(|source| ParseError::InvalidPatch {
            version: s.to_string(),
            source,
        })?;

        Ok(Self {
            major,
            minor,
            patch,
            label: label.to_string(),
        })
    }

    /// Parse a version string known to be valid
    ///
    /// Meant for literals in code. Never call this on external input.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid version string.
    #[must_use]
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Copy of this version with the label replaced
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Copy of this version with the patch number zeroed
    #[must_use]
    pub fn without_patch(&self) -> Self {
        Self {
            patch: 0,
            ..self.clone()
        }
    }

    /// True if major, minor and patch are all equal. Labels are ignored.
    #[must_use]
    pub const fn is_same(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// True if this version is strictly newer than `other`. Labels are ignored.
    #[must_use]
    pub const fn is_after(&self, other: &Self) -> bool {
        self.major > other.major
            || (self.major == other.major && self.minor > other.minor)
            || (self.major == other.major && self.minor == other.minor && self.patch > other.patch)
    }

    /// True if this version is the same as or newer than `other`. Labels are ignored.
    #[must_use]
    pub const fn is_same_or_after(&self, other: &Self) -> bool {
        self.is_same(other) || self.is_after(other)
    }

    /// Like [`Version::is_same_or_after`], comparing major and minor only
    #[must_use]
    pub fn is_same_or_after_ignoring_patch(&self, other: &Self) -> bool {
        self.without_patch().is_same_or_after(&other.without_patch())
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.triple().hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.label.is_empty() {
            write!(f, "-{}", self.label)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
