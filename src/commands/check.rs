//! Check a version against a family's supported range

use stackver::config::Config;
use stackver::output::{OutputMode, RangeCheckResult};
use stackver::range::ComponentFamily;
use stackver::version::Version;

/// Check `version` against the effective range of `family`
///
/// Exits with status 1 when the version is out of range.
pub fn check(
    config: &Config,
    family: &str,
    version: &str,
    global_min: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let family: ComponentFamily = family.parse().map_err(anyhow::Error::msg)?;
    let version = Version::parse(version)?;

    let mut policy = config.policy();
    if let Some(min) = global_min {
        policy = policy.with_global_min(Version::parse(min)?);
    }

    let range = policy.range_for(family);
    let outcome = policy.check(family, &version);
    let result = RangeCheckResult {
        family: family.to_string(),
        version: version.to_string(),
        min: range.min.to_string(),
        max: range.max.to_string(),
        supported: outcome.is_ok(),
        error: outcome.err().map(|e| e.to_string()),
    };
    result.render(mode);

    if !result.supported {
        std::process::exit(1);
    }
    Ok(())
}
