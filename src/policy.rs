//! Compatibility policy
//!
//! Combines the per-family supported ranges with an optional deployment-wide
//! minimum stack version. The global minimum can only raise a family's floor,
//! never lower it.

use std::collections::BTreeMap;

use crate::range::{ComponentFamily, MinMaxVersion, RangeError};
use crate::version::Version;

/// Version ranges in effect for a deployment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityPolicy {
    global_min: Option<Version>,
    overrides: BTreeMap<ComponentFamily, MinMaxVersion>,
}

impl CompatibilityPolicy {
    /// Policy with the built-in ranges and no global minimum
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deployment-wide minimum stack version
    #[must_use]
    pub fn with_global_min(mut self, min: Version) -> Self {
        self.global_min = Some(min);
        self
    }

    /// Replace the built-in range of a family
    #[must_use]
    pub fn with_range(mut self, family: ComponentFamily, range: MinMaxVersion) -> Self {
        self.overrides.insert(family, range);
        self
    }

    /// The deployment-wide minimum stack version, if any
    #[must_use]
    pub const fn global_min(&self) -> Option<&Version> {
        self.global_min.as_ref()
    }

    /// Effective range for a family, with the global minimum applied
    #[must_use]
    pub fn range_for(&self, family: ComponentFamily) -> MinMaxVersion {
        let base = self
            .overrides
            .get(&family)
            .cloned()
            .unwrap_or_else(|| family.supported_versions());
        match &self.global_min {
            Some(min) => base.with_min(min),
            None => base,
        }
    }

    /// Check a version against the effective range of a family
    pub fn check(&self, family: ComponentFamily, version: &Version) -> Result<(), RangeError> {
        let range = self.range_for(family);
        let result = range.within_range(version);
        match &result {
            Ok(()) => log::debug!("{family} version {version} is within {range}"),
            Err(e) => log::debug!("{family} rejected: {e}"),
        }
        result
    }
}
