//! Property-based tests for versions
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use stackver::range::MinMaxVersion;
use stackver::reduce::min;
use stackver::version::Version;

fn version() -> impl Strategy<Value = Version> {
    (0u64..20, 0u64..20, 0u64..20).prop_map(Version::from)
}

proptest! {
    /// Canonical strings survive a parse/format round trip
    #[test]
    fn canonical_round_trip(
        major in 0u64..100_000,
        minor in 0u64..100_000,
        patch in 0u64..100_000,
        label in "([A-Za-z0-9][A-Za-z0-9.-]{0,10})?"
    ) {
        let mut s = Version::new(major, minor, patch).to_string();
        if !label.is_empty() {
            s = format!("{s}-{label}");
        }
        let v = Version::parse(&s).unwrap();
        prop_assert_eq!((v.major, v.minor, v.patch), (major, minor, patch));
        prop_assert_eq!(&v.label, &label);
        prop_assert_eq!(v.to_string(), s);
    }

    /// Labels never affect comparisons
    #[test]
    fn labels_are_ignored(a in version(), b in version(), la in "[a-z]{0,5}", lb in "[a-z]{0,5}") {
        let la = a.clone().with_label(la);
        let lb = b.clone().with_label(lb);
        prop_assert_eq!(a.is_same(&b), la.is_same(&lb));
        prop_assert_eq!(a.is_after(&b), la.is_after(&lb));
        prop_assert_eq!(a.cmp(&b), la.cmp(&lb));
    }

    /// Exactly one of a > b, a == b, b > a holds
    #[test]
    fn ordering_is_total(a in version(), b in version()) {
        let outcomes = [a.is_after(&b), a.is_same(&b), b.is_after(&a)];
        prop_assert_eq!(outcomes.iter().filter(|x| **x).count(), 1);
        prop_assert_eq!(a.is_same_or_after(&b), a >= b);
    }

    /// Ignoring patch only ever widens same-or-after
    #[test]
    fn ignoring_patch_is_weaker(a in version(), b in version()) {
        if a.is_same_or_after(&b) {
            prop_assert!(a.is_same_or_after_ignoring_patch(&b));
        }
    }

    /// Raising the floor never lowers it
    #[test]
    fn with_min_is_monotonic(lo in version(), hi in version(), floor in version()) {
        let range = MinMaxVersion::new(lo.clone(), hi.clone());
        let raised = range.with_min(&floor);
        prop_assert!(raised.min.is_same_or_after(&lo));
        prop_assert!(raised.min.is_same_or_after(&floor));
        prop_assert_eq!(&raised.max, &hi);
    }

    /// The reduced minimum is no greater than any input
    #[test]
    fn min_is_lower_bound(versions in prop::collection::vec(version(), 1..10)) {
        let mut sorted = versions.clone();
        let lowest = min(&mut sorted).cloned().unwrap();
        for v in &versions {
            prop_assert!(v.is_same_or_after(&lowest));
        }
    }
}
