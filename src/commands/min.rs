//! Min command - lowest version across a list of workload objects

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use stackver::output::{MinResult, OutputMode};
use stackver::reduce::{min_in_pods, min_in_stateful_sets};
use stackver::workload::{Pod, StatefulSet, decode_list};

use crate::cli::ObjectKind;

/// Print the lowest version found under `label` in the objects of `file`
pub fn min(file: &Path, kind: ObjectKind, label: &str, mode: OutputMode) -> anyhow::Result<()> {
    let json = read_input(file)?;

    let (objects, lowest) = match kind {
        ObjectKind::Pod => {
            let pods: Vec<Pod> = decode_list(&json)?;
            (pods.len(), min_in_pods(&pods, label)?)
        },
        ObjectKind::StatefulSet => {
            let ssets: Vec<StatefulSet> = decode_list(&json)?;
            (ssets.len(), min_in_stateful_sets(&ssets, label)?)
        },
    };

    let result = MinResult {
        label: label.to_string(),
        objects,
        min: lowest.map(|v| v.to_string()),
    };
    result.render(mode);
    Ok(())
}

fn read_input(file: &Path) -> anyhow::Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}
