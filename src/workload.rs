//! Label-bearing workload objects
//!
//! Only the parts of Pods and StatefulSets the version reducers read are
//! modelled. Everything else in the Kubernetes JSON is ignored on decode.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when decoding a list of objects
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not a JSON array or `List` of the expected kind
    #[error("invalid object list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Object metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Object name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Object labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// A Pod
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// Pod metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
}

/// Pod template embedded in a workload spec
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTemplateSpec {
    /// Template metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
}

/// StatefulSet spec
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatefulSetSpec {
    /// Template for the Pods this StatefulSet creates
    #[serde(default)]
    pub template: PodTemplateSpec,
}

/// A StatefulSet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatefulSet {
    /// StatefulSet metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// StatefulSet spec
    #[serde(default)]
    pub spec: StatefulSetSpec,
}

/// An object whose labels carry a version
pub trait Labeled {
    /// The labels the version is read from
    fn version_labels(&self) -> &BTreeMap<String, String>;
}

impl Labeled for Pod {
    fn version_labels(&self) -> &BTreeMap<String, String> {
        &self.metadata.labels
    }
}

/// StatefulSets are read through their Pod template, not their own metadata
impl Labeled for StatefulSet {
    fn version_labels(&self) -> &BTreeMap<String, String> {
        &self.spec.template.metadata.labels
    }
}

impl Pod {
    /// Pod with the given name and labels
    #[must_use]
    pub fn with_labels<K, V>(name: &str, labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            metadata: ObjectMeta {
                name: name.to_string(),
                labels: collect_labels(labels),
            },
        }
    }
}

impl StatefulSet {
    /// StatefulSet with the given name and Pod template labels
    #[must_use]
    pub fn with_template_labels<K, V>(name: &str, labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            metadata: ObjectMeta {
                name: name.to_string(),
                labels: BTreeMap::new(),
            },
            spec: StatefulSetSpec {
                template: PodTemplateSpec {
                    metadata: ObjectMeta {
                        name: String::new(),
                        labels: collect_labels(labels),
                    },
                },
            },
        }
    }
}

fn collect_labels<K, V>(labels: impl IntoIterator<Item = (K, V)>) -> BTreeMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    labels.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Decode a JSON array of objects or a Kubernetes `List` (`{"items": [...]}`)
pub fn decode_list<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Object(mut list) if list.contains_key("items") => list.remove("items").unwrap_or_default(),
        other => other,
    };
    Ok(serde_json::from_value(items)?)
}
