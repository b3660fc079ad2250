//! stackver - version parsing and compatibility checks for orchestrated stack
//! components
//!
//! This library parses `major.minor.patch[-label]` versions, compares them
//! while ignoring labels, checks them against supported ranges, and finds the
//! lowest version recorded in the labels of running workloads.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod labels;
pub mod output;
pub mod policy;
pub mod range;
pub mod reduce;
pub mod version;
pub mod workload;

pub use labels::{LabelError, LabelSource, VERSION_LABEL, from_labels};
pub use policy::CompatibilityPolicy;
pub use range::{ComponentFamily, MinMaxVersion, RangeError};
pub use reduce::{min, min_in, min_in_pods, min_in_stateful_sets};
pub use version::{ParseError, Version};
