//! Reading versions out of object labels

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use thiserror::Error;

use crate::version::{ParseError, Version};

/// Label the operator stamps on every workload it manages
pub const VERSION_LABEL: &str = "common.k8s.elastic.co/version";

/// Errors that can occur when reading a version from labels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The label is absent
    #[error("version label {label} is missing")]
    Missing {
        /// Name of the missing label
        label: String,
    },

    /// The label value is not a valid version
    #[error("version label {label} is invalid: {value}")]
    Invalid {
        /// Name of the label
        label: String,
        /// Raw label value
        value: String,
        /// Why the value did not parse
        #[source]
        source: ParseError,
    },
}

/// A string-keyed label mapping
pub trait LabelSource {
    /// Value of the label `name`, if present
    fn label(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> LabelSource for HashMap<String, String, S> {
    fn label(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl LabelSource for BTreeMap<String, String> {
    fn label(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Parse the version stored under `label_name`
pub fn from_labels<L: LabelSource + ?Sized>(labels: &L, label_name: &str) -> Result<Version, LabelError> {
    let value = labels.label(label_name).ok_or_else(|| LabelError::Missing {
        label: label_name.to_string(),
    })?;
    Version::parse(value).map_err(|source| LabelError::Invalid {
        label: label_name.to_string(),
        value: value.to_string(),
        source,
    })
}
