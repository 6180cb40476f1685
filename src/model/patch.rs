//! Canonical patch data structures and the raw dataset mirror types.
//!
//! The dataset on disk is loosely typed: field names drift between
//! snake_case and camelCase, stat counts may be absent or non-numeric, and
//! change items are occasionally numbers or nulls. The `Raw*` types accept
//! all of that; [`crate::loader::normalize`] turns them into the strict
//! [`Patch`] shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One versioned release record with its change categories and statistics.
///
/// Patches are created once at load time and are immutable afterwards;
/// selection in the UI only changes which patch is projected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patch {
    /// Unique key, used for selection and expand-state scoping
    pub patch_id: String,
    /// Dotted numeric version string ("4.0.2")
    pub version: String,
    /// Human-readable release date ("Feb 14, 2026" or "Unknown date")
    pub release_date: String,
    /// Machine release date, used only for recency pruning
    pub release_date_iso: Option<NaiveDate>,
    /// Release track the patch shipped on ("LIVE", "PTU", ...)
    pub build_channel: String,
    /// Free-text status ("Current", "Archived", ...)
    pub status: String,
    /// Ordered change categories; never contains an empty category
    pub categories: Vec<Category>,
    /// Change counts per bucket
    pub stats: PatchStats,
}

impl Patch {
    /// Total number of changes across all stat buckets.
    #[must_use]
    pub const fn change_count(&self) -> u64 {
        self.stats.total()
    }

    /// Whether the status string marks this patch as the live release.
    /// Status is free text; anything containing "live" or equal to
    /// "current" gets the live styling.
    #[must_use]
    pub fn is_live(&self) -> bool {
        let lower = self.status.to_lowercase();
        lower.contains("live") || lower == "current"
    }
}

/// A named bucket of individual change-note strings within a patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

/// Change counts per bucket.
///
/// A category may feed more than one bucket when its name matches several
/// bucket keywords ("Ship Fixes" counts toward both fixes and ships).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchStats {
    pub features: u64,
    pub improvements: u64,
    pub fixes: u64,
    pub ships: u64,
}

impl PatchStats {
    /// Sum of all four buckets.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.features + self.improvements + self.fixes + self.ships
    }
}

// ============================================================================
// Raw dataset mirror types
// ============================================================================

/// Top-level dataset file shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDataset {
    /// Generation timestamp, informational only
    #[serde(default)]
    pub generated_at: Option<String>,
    /// Window the generator pruned to, informational only
    #[serde(default)]
    pub window_months: Option<u32>,
    #[serde(default)]
    pub patches: Vec<RawPatch>,
}

/// One loosely-typed patch record as found in the dataset file.
///
/// String-ish fields are kept as [`Value`] so that numeric or null values
/// coerce instead of failing the whole dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPatch {
    #[serde(default, alias = "patchId")]
    pub patch_id: Option<Value>,
    #[serde(default)]
    pub version: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub release_date_iso: Option<Value>,
    #[serde(default, alias = "releaseDate")]
    pub release_date_display: Option<Value>,
    #[serde(default, alias = "buildChannel")]
    pub build_channel: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
    #[serde(default)]
    pub stats: Option<RawStats>,
}

/// Raw category; items may be strings, numbers or nulls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Raw stat counts; any field may be absent or non-numeric.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    #[serde(default)]
    pub features: Option<Value>,
    #[serde(default)]
    pub improvements: Option<Value>,
    #[serde(default)]
    pub fixes: Option<Value>,
    #[serde(default)]
    pub ships: Option<Value>,
}
