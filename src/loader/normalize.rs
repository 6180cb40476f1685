//! Raw record normalization.
//!
//! Converts one loosely-typed dataset record into the canonical [`Patch`]
//! shape. Normalization is total: every coercion degrades to a safe
//! default and a malformed record never aborts the load.

use crate::model::{Category, Patch, PatchStats, RawPatch, RawStats};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Normalize one raw patch record. `index` is the record's position in the
/// source array and drives the id fallback and status defaults.
#[must_use]
pub fn normalize_patch(raw: &RawPatch, index: usize) -> Patch {
    let version = coerce_string(raw.version.as_ref()).unwrap_or_else(|| "Unknown".to_string());

    // Id fallback chain: explicit id, then version, then a synthetic key.
    let patch_id = coerce_string(raw.patch_id.as_ref())
        .or_else(|| coerce_string(raw.version.as_ref()))
        .unwrap_or_else(|| format!("patch-{index}"));

    let categories = normalize_categories(raw);
    let stats = resolve_stats(raw.stats.as_ref(), &categories);

    let release_date_iso =
        coerce_string(raw.release_date_iso.as_ref()).and_then(|s| parse_iso_date(&s));

    // Display date prefers the reformatted ISO date over whatever display
    // string the generator wrote.
    let release_date = release_date_iso.map_or_else(
        || {
            coerce_string(raw.release_date_display.as_ref())
                .unwrap_or_else(|| "Unknown date".to_string())
        },
        format_display_date,
    );

    let build_channel =
        coerce_string(raw.build_channel.as_ref()).unwrap_or_else(|| "LIVE".to_string());

    let status = coerce_string(raw.status.as_ref()).unwrap_or_else(|| {
        if index == 0 {
            "Current".to_string()
        } else {
            "Archived".to_string()
        }
    });

    Patch {
        patch_id,
        version,
        release_date,
        release_date_iso,
        build_channel,
        status,
        categories,
        stats,
    }
}

/// Stringify category items, drop empties, drop categories left with no
/// items.
fn normalize_categories(raw: &RawPatch) -> Vec<Category> {
    raw.categories
        .iter()
        .filter_map(|cat| {
            let items: Vec<String> = cat
                .items
                .iter()
                .filter_map(coerce_item)
                .collect();
            if items.is_empty() {
                return None;
            }
            let name =
                coerce_string(cat.name.as_ref()).unwrap_or_else(|| "Unknown".to_string());
            Some(Category { name, items })
        })
        .collect()
}

/// Explicit numeric stat fields win; missing buckets are inferred from
/// category names.
///
/// Inference scans lowercased category names for bucket keywords and adds
/// that category's item count to every bucket it matches. Overlap is
/// intentional: "Ship Fixes" counts toward both fixes and ships.
fn resolve_stats(raw: Option<&RawStats>, categories: &[Category]) -> PatchStats {
    let explicit_features = raw.and_then(|s| coerce_count(s.features.as_ref()));
    let explicit_improvements = raw.and_then(|s| coerce_count(s.improvements.as_ref()));
    let explicit_fixes = raw.and_then(|s| coerce_count(s.fixes.as_ref()));
    let explicit_ships = raw.and_then(|s| coerce_count(s.ships.as_ref()));

    let mut inferred = PatchStats::default();
    for cat in categories {
        let name = cat.name.to_lowercase();
        let count = cat.items.len() as u64;
        if name.contains("feature") {
            inferred.features += count;
        }
        if name.contains("improvement") {
            inferred.improvements += count;
        }
        if name.contains("fix") {
            inferred.fixes += count;
        }
        if name.contains("ship") || name.contains("vehicle") {
            inferred.ships += count;
        }
    }

    PatchStats {
        features: explicit_features.unwrap_or(inferred.features),
        improvements: explicit_improvements.unwrap_or(inferred.improvements),
        fixes: explicit_fixes.unwrap_or(inferred.fixes),
        ships: explicit_ships.unwrap_or(inferred.ships),
    }
}

/// Coerce a raw JSON value to a non-empty trimmed string.
fn coerce_string(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Stringify one category item; empty and non-scalar values are dropped.
fn coerce_item(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Coerce a raw stat count: a JSON number, or a string holding one.
fn coerce_count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse an ISO date ("2026-02-14") or timestamp ("2026-02-14T10:00:00Z").
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = text.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Locale-style "Mon D, YYYY" display string.
fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from(json: Value) -> RawPatch {
        serde_json::from_value(json).expect("raw patch parses")
    }

    #[test]
    fn test_stat_inference_from_category_names() {
        let raw = raw_from(json!({
            "version": "4.0.2",
            "categories": [{"name": "Bug Fixes", "items": ["a", "b"]}]
        }));
        let patch = normalize_patch(&raw, 0);
        assert_eq!(patch.stats.fixes, 2);
        assert_eq!(patch.stats.features, 0);
        assert_eq!(patch.stats.improvements, 0);
        assert_eq!(patch.stats.ships, 0);
    }

    #[test]
    fn test_overlapping_buckets_not_deduplicated() {
        let raw = raw_from(json!({
            "version": "4.0.2",
            "categories": [{"name": "Ship Fixes", "items": ["a", "b", "c"]}]
        }));
        let patch = normalize_patch(&raw, 0);
        assert_eq!(patch.stats.fixes, 3);
        assert_eq!(patch.stats.ships, 3);
    }

    #[test]
    fn test_explicit_stats_take_precedence() {
        let raw = raw_from(json!({
            "version": "4.0.2",
            "stats": {"fixes": 99},
            "categories": [{"name": "Bug Fixes", "items": ["a"]}]
        }));
        let patch = normalize_patch(&raw, 0);
        assert_eq!(patch.stats.fixes, 99);
        // features has no explicit value; inference still applies (zero here)
        assert_eq!(patch.stats.features, 0);
    }

    #[test]
    fn test_vehicle_keyword_feeds_ships_bucket() {
        let raw = raw_from(json!({
            "categories": [{"name": "Vehicle Updates", "items": ["a"]}]
        }));
        assert_eq!(normalize_patch(&raw, 0).stats.ships, 1);
    }

    #[test]
    fn test_empty_or_absent_categories() {
        let raw = raw_from(json!({"version": "4.0.2"}));
        let patch = normalize_patch(&raw, 0);
        assert!(patch.categories.is_empty());
        assert_eq!(patch.stats.total(), 0);

        let raw = raw_from(json!({
            "version": "4.0.2",
            "categories": [{"name": "Fixes", "items": ["", "  ", null]}]
        }));
        let patch = normalize_patch(&raw, 0);
        assert!(patch.categories.is_empty(), "empty categories are dropped");
    }

    #[test]
    fn test_item_stringification() {
        let raw = raw_from(json!({
            "categories": [{"name": "Fixes", "items": ["Crash fix", 42, true, null, {}]}]
        }));
        let patch = normalize_patch(&raw, 0);
        assert_eq!(patch.categories[0].items, vec!["Crash fix", "42", "true"]);
    }

    #[test]
    fn test_id_fallback_chain() {
        let raw = raw_from(json!({"patch_id": "alpha-4.0.2", "version": "4.0.2"}));
        assert_eq!(normalize_patch(&raw, 5).patch_id, "alpha-4.0.2");

        let raw = raw_from(json!({"version": "4.0.2"}));
        assert_eq!(normalize_patch(&raw, 5).patch_id, "4.0.2");

        let raw = raw_from(json!({}));
        assert_eq!(normalize_patch(&raw, 5).patch_id, "patch-5");
    }

    #[test]
    fn test_display_date_prefers_iso() {
        let raw = raw_from(json!({
            "release_date_iso": "2026-02-14",
            "release_date_display": "February 2026"
        }));
        let patch = normalize_patch(&raw, 0);
        assert_eq!(patch.release_date, "Feb 14, 2026");
        assert!(patch.release_date_iso.is_some());

        let raw = raw_from(json!({"release_date_display": "February 2026"}));
        assert_eq!(normalize_patch(&raw, 0).release_date, "February 2026");

        let raw = raw_from(json!({}));
        assert_eq!(normalize_patch(&raw, 0).release_date, "Unknown date");
    }

    #[test]
    fn test_iso_timestamp_accepted() {
        let raw = raw_from(json!({"release_date_iso": "2026-02-14T10:30:00Z"}));
        let patch = normalize_patch(&raw, 0);
        assert_eq!(
            patch.release_date_iso,
            NaiveDate::from_ymd_opt(2026, 2, 14)
        );
    }

    #[test]
    fn test_status_defaults_by_index() {
        let raw = raw_from(json!({}));
        assert_eq!(normalize_patch(&raw, 0).status, "Current");
        assert_eq!(normalize_patch(&raw, 1).status, "Archived");

        let raw = raw_from(json!({"status": "Hotfix"}));
        assert_eq!(normalize_patch(&raw, 1).status, "Hotfix");
    }

    #[test]
    fn test_channel_default() {
        let raw = raw_from(json!({}));
        assert_eq!(normalize_patch(&raw, 0).build_channel, "LIVE");
        let raw = raw_from(json!({"build_channel": "PTU"}));
        assert_eq!(normalize_patch(&raw, 0).build_channel, "PTU");
    }
}
