//! Compare command

use anyhow::Context;
use stackver::output::{CompareResult, OutputMode};
use stackver::version::Version;

/// Compare two versions, ignoring labels
pub fn compare(a: &str, b: &str, mode: OutputMode) -> anyhow::Result<()> {
    let a = Version::parse(a).context("left-hand version")?;
    let b = Version::parse(b).context("right-hand version")?;
    CompareResult::new(&a, &b).render(mode);
    Ok(())
}
