//! Ranges command - effective supported range per family

use stackver::config::Config;
use stackver::output::{OutputMode, RangeInfo, RangeListResult};
use stackver::range::ComponentFamily;

/// List the effective range of every family
pub fn ranges(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let policy = config.policy();
    let result = RangeListResult {
        global_min: policy.global_min().map(ToString::to_string),
        ranges: ComponentFamily::ALL
            .into_iter()
            .map(|family| RangeInfo::new(family, &policy.range_for(family)))
            .collect(),
    };
    result.render(mode);
    Ok(())
}
