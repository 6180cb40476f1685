//! Version comparison utilities.
//!
//! Patch versions are dot-separated runs of integers ("4.0.2", "3.24").
//! They are not semver: there is no prerelease or build metadata, and the
//! dataset occasionally carries malformed segments. Malformed or missing
//! segments coerce to 0 rather than erroring, so all-malformed versions
//! compare equal-lowest. That coercion is deliberate; it mirrors the data
//! pipeline's tolerance for scraped version strings.

use std::cmp::Ordering;

/// Compare two version strings by numeric dotted segments.
///
/// Segments are compared left to right, padding the shorter version with
/// zeros. `compare_versions("4.0.10", "4.0.2")` is `Ordering::Greater`.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let seg_a: Vec<u64> = a.split('.').map(parse_segment).collect();
    let seg_b: Vec<u64> = b.split('.').map(parse_segment).collect();
    let len = seg_a.len().max(seg_b.len());

    for i in 0..len {
        let x = seg_a.get(i).copied().unwrap_or(0);
        let y = seg_b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// Comparator for sorting newest-first.
#[must_use]
pub fn compare_versions_desc(a: &str, b: &str) -> Ordering {
    compare_versions(b, a)
}

fn parse_segment(seg: &str) -> u64 {
    seg.trim().parse().unwrap_or(0)
}

/// Release classification derived from a version string, shown as the
/// history-row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// Patch segment is 0 (e.g. "4.1.0" or "4.1")
    Major,
    /// Patch segment is non-zero (e.g. "4.0.2")
    Minor,
    /// Version has no parseable numeric segments
    Update,
}

impl ReleaseKind {
    /// Classify a version string.
    #[must_use]
    pub fn classify(version: &str) -> Self {
        let segments: Vec<&str> = version.split('.').collect();
        // A version counts as parseable when any segment is a real number.
        let parseable = segments
            .iter()
            .any(|s| s.trim().parse::<u64>().is_ok());
        if !parseable {
            return Self::Update;
        }
        let patch = segments.get(2).map_or(0, |s| parse_segment(s));
        if patch == 0 {
            Self::Major
        } else {
            Self::Minor
        }
    }

    /// Display label for history rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Update => "Update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_versions() {
        assert_eq!(compare_versions("1.0.0", "1.0.1"), Ordering::Less);
        assert_eq!(compare_versions("1.0.1", "1.0.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.0.0", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        // "10" > "2" numerically even though it sorts first as a string
        assert_eq!(compare_versions("4.0.10", "4.0.2"), Ordering::Greater);
    }

    #[test]
    fn test_length_padding() {
        assert_eq!(compare_versions("4.0", "4.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("4.0", "4.0.1"), Ordering::Less);
        assert_eq!(compare_versions("4.1", "4.0.9"), Ordering::Greater);
    }

    #[test]
    fn test_malformed_segments_coerce_to_zero() {
        assert_eq!(compare_versions("4.x.1", "4.0.1"), Ordering::Equal);
        assert_eq!(compare_versions("garbage", "also-garbage"), Ordering::Equal);
        assert_eq!(compare_versions("garbage", "0.0.1"), Ordering::Less);
    }

    #[test]
    fn test_descending_sort() {
        let mut versions = vec!["4.0.1", "4.0.10", "3.24.2", "4.0.2"];
        versions.sort_by(|a, b| compare_versions_desc(a, b));
        assert_eq!(versions, vec!["4.0.10", "4.0.2", "4.0.1", "3.24.2"]);
    }

    #[test]
    fn test_release_kind() {
        assert_eq!(ReleaseKind::classify("4.1.0"), ReleaseKind::Major);
        assert_eq!(ReleaseKind::classify("4.1"), ReleaseKind::Major);
        assert_eq!(ReleaseKind::classify("4.0.2"), ReleaseKind::Minor);
        assert_eq!(ReleaseKind::classify("hotfix"), ReleaseKind::Update);
        assert_eq!(ReleaseKind::classify(""), ReleaseKind::Update);
        assert_eq!(ReleaseKind::Major.label(), "Major");
    }
}
