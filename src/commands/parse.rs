//! Parse command - show the parts of a version string

use stackver::output::{OutputMode, ParseResult};
use stackver::version::Version;

/// Parse a version string and print its parts
pub fn parse(version: &str, mode: OutputMode) -> anyhow::Result<()> {
    let v = Version::parse(version)?;
    ParseResult::from(&v).render(mode);
    Ok(())
}
