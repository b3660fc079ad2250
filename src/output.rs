//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::range::{ComponentFamily, MinMaxVersion};
use crate::version::Version;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of parsing a version string
#[derive(Debug, Serialize)]
pub struct ParseResult {
    /// Canonical form of the version
    pub version: String,
    /// Major version number
    pub major: u64,
    /// Minor version number
    pub minor: u64,
    /// Patch version number
    pub patch: u64,
    /// Label (empty if none)
    pub label: String,
}

impl From<&Version> for ParseResult {
    fn from(v: &Version) -> Self {
        Self {
            version: v.to_string(),
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            label: v.label.clone(),
        }
    }
}

/// Result of comparing two versions
#[derive(Debug, Serialize)]
pub struct CompareResult {
    /// Left-hand version
    pub a: String,
    /// Right-hand version
    pub b: String,
    /// `a` and `b` are the same version
    pub same: bool,
    /// `a` is newer than `b`
    pub after: bool,
    /// `a` is the same as or newer than `b`
    pub same_or_after: bool,
    /// `a` is the same as or newer than `b`, considering major.minor only
    pub same_or_after_ignoring_patch: bool,
}

impl CompareResult {
    /// Compare `a` against `b`
    #[must_use]
    pub fn new(a: &Version, b: &Version) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
            same: a.is_same(b),
            after: a.is_after(b),
            same_or_after: a.is_same_or_after(b),
            same_or_after_ignoring_patch: a.is_same_or_after_ignoring_patch(b),
        }
    }
}

/// Result of checking a version against a family range
#[derive(Debug, Serialize)]
pub struct RangeCheckResult {
    /// Component family
    pub family: String,
    /// Checked version
    pub version: String,
    /// Effective minimum
    pub min: String,
    /// Effective maximum
    pub max: String,
    /// Whether the version is supported
    pub supported: bool,
    /// Why the version is not supported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a minimum-version search
#[derive(Debug, Serialize)]
pub struct MinResult {
    /// Label that was read
    pub label: String,
    /// Number of objects read
    pub objects: usize,
    /// Lowest version, if any object was present
    pub min: Option<String>,
}

/// Effective range of one family
#[derive(Debug, Serialize)]
pub struct RangeInfo {
    /// Component family
    pub family: String,
    /// Effective minimum
    pub min: String,
    /// Effective maximum
    pub max: String,
}

impl RangeInfo {
    /// Describe a family's effective range
    #[must_use]
    pub fn new(family: ComponentFamily, range: &MinMaxVersion) -> Self {
        Self {
            family: family.to_string(),
            min: range.min.to_string(),
            max: range.max.to_string(),
        }
    }
}

/// Effective ranges of every family
#[derive(Debug, Serialize)]
pub struct RangeListResult {
    /// Global minimum stack version, if configured
    pub global_min: Option<String>,
    /// One entry per family
    pub ranges: Vec<RangeInfo>,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize output: {e}"),
    }
}

impl ParseResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.version);
                println!("  major: {}", self.major);
                println!("  minor: {}", self.minor);
                println!("  patch: {}", self.patch);
                if !self.label.is_empty() {
                    println!("  label: {}", self.label);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl CompareResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} vs {}", self.a, self.b);
                println!("  same:                         {}", self.same);
                println!("  after:                        {}", self.after);
                println!("  same or after:                {}", self.same_or_after);
                println!("  same or after (ignore patch): {}", self.same_or_after_ignoring_patch);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl RangeCheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.supported {
                    println!(
                        "{} {} is supported (range {} - {})",
                        self.family, self.version, self.min, self.max
                    );
                } else if let Some(error) = &self.error {
                    println!("{} {} is not supported: {}", self.family, self.version, error);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl MinResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.min {
                Some(min) => println!("{min}"),
                None => println!("No objects, no version."),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl RangeListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if let Some(min) = &self.global_min {
                    println!("Global minimum: {min}\n");
                }
                for r in &self.ranges {
                    println!("  {:<18} {} - {}", r.family, r.min, r.max);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
