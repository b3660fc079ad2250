//! Tests for the minimum-version reducers

use stackver::labels::{LabelError, VERSION_LABEL};
use stackver::reduce::{min, min_in_pods, min_in_stateful_sets};
use stackver::version::Version;
use stackver::workload::{Pod, StatefulSet};

use crate::common::{pod, sset, unlabeled_pod, upgrading_pods};

#[test]
fn min_of_versions() {
    let mut versions = vec![Version::new(1, 2, 3), Version::new(1, 0, 0), Version::new(2, 0, 0)];
    assert_eq!(min(&mut versions), Some(&Version::new(1, 0, 0)));
}

#[test]
fn min_of_empty() {
    let mut versions: Vec<Version> = vec![];
    assert_eq!(min(&mut versions), None);
}

#[test]
fn min_sorts_in_place() {
    let mut versions = vec![Version::new(3, 0, 0), Version::new(1, 0, 0), Version::new(2, 0, 0)];
    let _ = min(&mut versions);
    assert_eq!(
        versions,
        vec![Version::new(1, 0, 0), Version::new(2, 0, 0), Version::new(3, 0, 0)]
    );
}

#[test]
fn min_keeps_first_of_equal_versions() {
    let mut versions = vec![
        Version::new(2, 0, 0),
        Version::new(1, 0, 0).with_label("first"),
        Version::new(1, 0, 0).with_label("second"),
    ];
    assert_eq!(min(&mut versions).map(|v| v.label.as_str()), Some("first"));
}

#[test]
fn min_in_pods_during_upgrade() {
    let lowest = min_in_pods(&upgrading_pods(), VERSION_LABEL).unwrap();
    assert_eq!(lowest, Some(Version::new(7, 16, 3)));
}

#[test]
fn min_in_no_pods() {
    assert_eq!(min_in_pods(&[], VERSION_LABEL).unwrap(), None);
}

#[test]
fn min_in_pods_fails_fast_on_missing_label() {
    let pods = vec![pod("es-0", "7.17.0"), unlabeled_pod("es-1"), pod("es-2", "7.16.0")];
    let err = min_in_pods(&pods, VERSION_LABEL).unwrap_err();
    assert!(matches!(err, LabelError::Missing { .. }));
}

#[test]
fn min_in_pods_fails_on_invalid_label() {
    let pods = vec![pod("es-0", "7.17.0"), pod("es-1", "latest")];
    let err = min_in_pods(&pods, VERSION_LABEL).unwrap_err();
    assert!(matches!(err, LabelError::Invalid { ref value, .. } if value == "latest"));
}

#[test]
fn min_in_stateful_sets_reads_template_labels() {
    let ssets = vec![sset("es-hot", "8.1.0"), sset("es-warm", "8.0.1")];
    assert_eq!(
        min_in_stateful_sets(&ssets, VERSION_LABEL).unwrap(),
        Some(Version::new(8, 0, 1))
    );
}

#[test]
fn min_in_stateful_sets_ignores_own_metadata() {
    let mut s = StatefulSet::with_template_labels("es", [("other", "1")]);
    s.metadata.labels.insert(VERSION_LABEL.to_string(), "7.0.0".to_string());
    let err = min_in_stateful_sets(&[s], VERSION_LABEL).unwrap_err();
    assert!(matches!(err, LabelError::Missing { .. }));
}

#[test]
fn min_in_pods_with_custom_label() {
    let pods = vec![
        Pod::with_labels("kb-0", [("kibana.k8s.elastic.co/version", "8.2.0")]),
        Pod::with_labels("kb-1", [("kibana.k8s.elastic.co/version", "8.1.3")]),
    ];
    assert_eq!(
        min_in_pods(&pods, "kibana.k8s.elastic.co/version").unwrap(),
        Some(Version::new(8, 1, 3))
    );
}
