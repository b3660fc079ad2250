//! Minimum version across a set of versions or labeled objects

use crate::labels::{LabelError, from_labels};
use crate::version::Version;
use crate::workload::{Labeled, Pod, StatefulSet};

/// Smallest version in `versions`, or `None` if empty
///
/// Sorts `versions` in place (stable, ascending, labels ignored), so among
/// equal versions the one that came first wins.
pub fn min(versions: &mut [Version]) -> Option<&Version> {
    versions.sort();
    versions.first()
}

/// Lowest version read from `label_name` across `objects`
///
/// Fails on the first object whose label is missing or invalid. An empty
/// collection yields `Ok(None)`.
pub fn min_in<'a, T, I>(objects: I, label_name: &str) -> Result<Option<Version>, LabelError>
where
    T: Labeled + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut versions = objects
        .into_iter()
        .map(|object| {
            let v = from_labels(object.version_labels(), label_name);
            log::trace!("{label_name} -> {v:?}");
            v
        })
        .collect::<Result<Vec<_>, _>>()?;
    let lowest = min(&mut versions).cloned();
    log::debug!(
        "lowest {label_name} across {} object(s): {}",
        versions.len(),
        lowest.as_ref().map_or_else(|| "none".to_string(), ToString::to_string)
    );
    Ok(lowest)
}

/// Lowest version read from the labels of `pods`
pub fn min_in_pods(pods: &[Pod], label_name: &str) -> Result<Option<Version>, LabelError> {
    min_in(pods, label_name)
}

/// Lowest version read from the Pod template labels of `ssets`
pub fn min_in_stateful_sets(ssets: &[StatefulSet], label_name: &str) -> Result<Option<Version>, LabelError> {
    min_in(ssets, label_name)
}
