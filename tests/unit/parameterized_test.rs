//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use stackver::version::{ParseError, Version};
use test_case::test_case;

// =============================================================================
// Parsing Tests
// =============================================================================

#[test_case("0.0.0", (0, 0, 0), "" ; "all zeros")]
#[test_case("7.10.0", (7, 10, 0), "" ; "two digit minor")]
#[test_case("8.0.0-SNAPSHOT", (8, 0, 0), "SNAPSHOT" ; "snapshot label")]
#[test_case("8.0.0-alpha-2", (8, 0, 0), "alpha-2" ; "label with dash")]
#[test_case("8.0.0-rc.1", (8, 0, 0), "rc.1" ; "label with dot")]
fn test_parse_valid(input: &str, triple: (u64, u64, u64), label: &str) {
    let v = Version::parse(input).unwrap();
    assert_eq!((v.major, v.minor, v.patch), triple);
    assert_eq!(v.label, label);
}

fn kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::TooFewSegments(_) => "too few",
        ParseError::TooManySegments(_) => "too many",
        ParseError::InvalidMajor { .. } => "major",
        ParseError::InvalidMinor { .. } => "minor",
        ParseError::InvalidPatch { .. } => "patch",
    }
}

#[test_case("", "too few" ; "empty string")]
#[test_case("7", "too few" ; "major only")]
#[test_case("7.10", "too few" ; "no patch")]
#[test_case("1.2.3.4.5", "too many" ; "five segments")]
#[test_case("1.2.3.4.5-beta", "too many" ; "five segments with label")]
#[test_case("1.2.3.4", "patch" ; "four segments")]
#[test_case("a.2.3", "major" ; "alpha major")]
#[test_case("1..3", "minor" ; "empty minor")]
#[test_case("1.2.", "patch" ; "empty patch")]
#[test_case("1.2.-beta", "patch" ; "label without patch")]
fn test_parse_invalid(input: &str, expected: &str) {
    let err = Version::parse(input).unwrap_err();
    assert_eq!(kind(&err), expected, "{input}: {err}");
}

// =============================================================================
// Comparison Tests
// =============================================================================

#[test_case("2.0.0", "1.99.99", true ; "major wins")]
#[test_case("1.3.0", "1.2.99", true ; "minor wins")]
#[test_case("1.2.4", "1.2.3", true ; "patch wins")]
#[test_case("1.2.3", "1.2.4", false ; "older patch")]
#[test_case("1.2.3-b", "1.2.3-a", false ; "labels do not order")]
fn test_is_after(a: &str, b: &str, expected: bool) {
    let a = Version::must_parse(a);
    let b = Version::must_parse(b);
    assert_eq!(a.is_after(&b), expected);
}

#[test_case("1.2.9", "1.2.0", true ; "higher patch same minor")]
#[test_case("1.2.0", "1.2.9", true ; "lower patch same minor")]
#[test_case("1.3.0", "1.2.9", true ; "higher minor")]
#[test_case("1.1.9", "1.2.0", false ; "lower minor")]
#[test_case("0.9.9", "1.0.0", false ; "lower major")]
fn test_same_or_after_ignoring_patch(a: &str, b: &str, expected: bool) {
    let a = Version::must_parse(a);
    let b = Version::must_parse(b);
    assert_eq!(a.is_same_or_after_ignoring_patch(&b), expected);
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test_case("1.2.3" ; "plain")]
#[test_case("1.2.3-beta1" ; "label")]
#[test_case("10.20.30-rc.1" ; "dotted label")]
fn test_canonical_round_trip(input: &str) {
    assert_eq!(Version::must_parse(input).to_string(), input);
}
