//! Supported version ranges
//!
//! A [`MinMaxVersion`] is an inclusive `[min, max]` window. Each component
//! family the controller manages has a built-in window; see
//! <https://www.elastic.co/support/matrix#matrix_compatibility>.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::Version;

/// Supported APM Server versions
pub const SUPPORTED_APM_SERVER_VERSIONS: MinMaxVersion =
    MinMaxVersion::new(Version::new(6, 2, 0), Version::new(8, 99, 99));

/// Supported Enterprise Search versions
pub const SUPPORTED_ENTERPRISE_SEARCH_VERSIONS: MinMaxVersion =
    MinMaxVersion::new(Version::new(7, 7, 0), Version::new(8, 99, 99));

/// Supported Kibana versions
pub const SUPPORTED_KIBANA_VERSIONS: MinMaxVersion =
    MinMaxVersion::new(Version::new(6, 8, 0), Version::new(8, 99, 99));

/// Supported Beat versions
pub const SUPPORTED_BEAT_VERSIONS: MinMaxVersion =
    MinMaxVersion::new(Version::new(7, 0, 0), Version::new(8, 99, 99));

/// Supported Elastic Agent versions
///
/// Agent shipped in 7.8.0 as an experimental release with no upgrade path
/// out of it, so the floor is 7.10.0 rather than 7.8.0.
pub const SUPPORTED_AGENT_VERSIONS: MinMaxVersion =
    MinMaxVersion::new(Version::new(7, 10, 0), Version::new(8, 99, 99));

/// A version fell outside a supported range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Version is older than the range minimum
    #[error("version {version} is lower than the lowest supported version of {min}")]
    BelowMinimum {
        /// The rejected version
        version: Version,
        /// The violated lower bound
        min: Version,
    },

    /// Version is newer than the range maximum
    #[error("version {version} is higher than the highest supported version of {max}")]
    AboveMaximum {
        /// The rejected version
        version: Version,
        /// The violated upper bound
        max: Version,
    },
}

/// Inclusive range of supported versions
///
/// `min <= max` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMaxVersion {
    /// Lowest supported version
    pub min: Version,
    /// Highest supported version
    pub max: Version,
}

impl MinMaxVersion {
    /// Create a range from its bounds
    #[must_use]
    pub const fn new(min: Version, max: Version) -> Self {
        Self { min, max }
    }

    /// Check that `v` lies within the range
    ///
    /// The minimum is checked first; only the first violation is reported.
    pub fn within_range(&self, v: &Version) -> Result<(), RangeError> {
        if !v.is_same_or_after(&self.min) {
            return Err(RangeError::BelowMinimum {
                version: v.clone(),
                min: self.min.clone(),
            });
        }
        if !self.max.is_same_or_after(v) {
            return Err(RangeError::AboveMaximum {
                version: v.clone(),
                max: self.max.clone(),
            });
        }
        Ok(())
    }

    /// Raise the minimum to `min` if it is strictly greater than the current one
    ///
    /// Never lowers the floor.
    #[must_use]
    pub fn with_min(&self, min: &Version) -> Self {
        if min.is_after(&self.min) {
            log::debug!("raising minimum supported version from {} to {}", self.min, min);
            Self {
                min: min.clone(),
                max: self.max.clone(),
            }
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for MinMaxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Component families with a built-in supported range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentFamily {
    /// APM Server
    ApmServer,
    /// Enterprise Search
    EnterpriseSearch,
    /// Kibana
    Kibana,
    /// Beats (log and metric shippers)
    Beat,
    /// Elastic Agent
    Agent,
}

impl ComponentFamily {
    /// Every family, in display order
    pub const ALL: [Self; 5] = [
        Self::ApmServer,
        Self::EnterpriseSearch,
        Self::Kibana,
        Self::Beat,
        Self::Agent,
    ];

    /// Built-in supported range for this family
    #[must_use]
    pub const fn supported_versions(self) -> MinMaxVersion {
        match self {
            Self::ApmServer => SUPPORTED_APM_SERVER_VERSIONS,
            Self::EnterpriseSearch => SUPPORTED_ENTERPRISE_SEARCH_VERSIONS,
            Self::Kibana => SUPPORTED_KIBANA_VERSIONS,
            Self::Beat => SUPPORTED_BEAT_VERSIONS,
            Self::Agent => SUPPORTED_AGENT_VERSIONS,
        }
    }

    /// Name used in config files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApmServer => "apm-server",
            Self::EnterpriseSearch => "enterprise-search",
            Self::Kibana => "kibana",
            Self::Beat => "beat",
            Self::Agent => "agent",
        }
    }
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Invalid component family: {s}. Use: apm-server, enterprise-search, kibana, beat, agent"
                )
            })
    }
}
