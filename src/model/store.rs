//! The in-memory patch store.
//!
//! Holds normalized patches sorted newest-first, pruned to a recency
//! window, with an id-keyed lookup. The store never mutates after build;
//! the UI only reads from it.

use super::Patch;
use crate::error::{LoadErrorKind, PatchNotesError, Result};
use crate::utils::compare_versions_desc;
use chrono::{Months, NaiveDate};
use indexmap::IndexMap;

/// Default trailing window beyond which dated patches are excluded.
pub const DEFAULT_WINDOW_MONTHS: u32 = 3;

/// Options controlling store construction.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Recency window in months
    pub window_months: u32,
    /// Disable pruning entirely
    pub no_prune: bool,
    /// "Today" for window arithmetic; injectable for tests
    pub today: NaiveDate,
}

impl StoreOptions {
    /// Options for the default 3-month window ending today.
    #[must_use]
    pub fn current() -> Self {
        Self {
            window_months: DEFAULT_WINDOW_MONTHS,
            no_prune: false,
            today: chrono::Utc::now().date_naive(),
        }
    }

    /// Override the window length, keeping today's cutoff.
    #[must_use]
    pub fn with_window(window_months: u32) -> Self {
        Self {
            window_months,
            ..Self::current()
        }
    }
}

/// Ordered, pruned collection of patches with id lookup.
#[derive(Debug, Clone)]
pub struct PatchStore {
    patches: Vec<Patch>,
    by_id: IndexMap<String, usize>,
    window_months: u32,
}

impl PatchStore {
    /// Build a store: sort descending by version, prune entries older than
    /// the window, index by id.
    ///
    /// Patches without a machine-readable release date are retained
    /// unconditionally; there is nothing to compare against the cutoff.
    ///
    /// # Errors
    ///
    /// Returns a load error when no patches survive pruning (reported
    /// upward; callers surface the operator-facing message).
    pub fn build(mut patches: Vec<Patch>, options: StoreOptions) -> Result<Self> {
        patches.sort_by(|a, b| compare_versions_desc(&a.version, &b.version));

        let cutoff = options
            .today
            .checked_sub_months(Months::new(options.window_months));
        if !options.no_prune {
            if let Some(cutoff) = cutoff {
                patches.retain(|p| p.release_date_iso.map_or(true, |d| d >= cutoff));
            }
        }

        if patches.is_empty() {
            return Err(PatchNotesError::load(
                "building patch store",
                LoadErrorKind::EmptyAfterPrune {
                    window_months: options.window_months,
                },
            ));
        }

        let by_id = patches
            .iter()
            .enumerate()
            .map(|(i, p)| (p.patch_id.clone(), i))
            .collect();

        Ok(Self {
            patches,
            by_id,
            window_months: options.window_months,
        })
    }

    /// All patches, newest first.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// The newest patch. The store is never empty, so this always exists.
    #[must_use]
    pub fn newest(&self) -> &Patch {
        &self.patches[0]
    }

    /// Look up a patch by id.
    #[must_use]
    pub fn get(&self, patch_id: &str) -> Option<&Patch> {
        self.by_id.get(patch_id).map(|&i| &self.patches[i])
    }

    /// Position of a patch in the newest-first ordering.
    #[must_use]
    pub fn position(&self, patch_id: &str) -> Option<usize> {
        self.by_id.get(patch_id).copied()
    }

    /// Find a patch by exact version string.
    #[must_use]
    pub fn find_by_version(&self, version: &str) -> Option<&Patch> {
        self.patches.iter().find(|p| p.version == version)
    }

    /// Number of patches retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// True only before construction validation; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Window the store was pruned to.
    #[must_use]
    pub const fn window_months(&self) -> u32 {
        self.window_months
    }
}
