//! Pure projection of (patch, view state) into renderable data.
//!
//! Nothing in this module touches ratatui. Render functions consume the
//! structures produced here, and the unit tests exercise filtering,
//! search and highlighting without a terminal.

use crate::model::{Patch, PatchStore};
use crate::tui::state::ViewState;
use crate::utils::ReleaseKind;

/// One change item with the byte ranges that matched the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    pub text: String,
    /// Non-overlapping `(start, end)` byte ranges into `text`, in order
    pub highlights: Vec<(usize, usize)>,
}

/// One category that survived filter and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCategory {
    /// Index into the patch's full category list (drives expansion keys)
    pub index: usize,
    pub name: String,
    /// Total item count before search filtering
    pub total_items: usize,
    pub expanded: bool,
    pub items: Vec<VisibleItem>,
}

/// Projection of the category panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPanel {
    pub categories: Vec<VisibleCategory>,
    /// Number of items matching a non-empty query; `None` when no search
    pub match_count: Option<usize>,
}

impl CategoryPanel {
    /// Whether the "no matches" placeholder should render instead of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Project the visible categories for a patch under the current state.
///
/// A category is visible when its name passes the active filter AND at
/// least one item survives the search query. Categories emptied by the
/// query are omitted even though their name matched the filter.
#[must_use]
pub fn category_panel(patch: &Patch, state: &ViewState) -> CategoryPanel {
    let query = state.query.trim().to_lowercase();
    let searching = !query.is_empty();

    let categories: Vec<VisibleCategory> = patch
        .categories
        .iter()
        .enumerate()
        .filter(|(_, cat)| state.filter.matches(&cat.name))
        .filter_map(|(index, cat)| {
            let items: Vec<VisibleItem> = cat
                .items
                .iter()
                .filter_map(|item| {
                    let highlights = if searching {
                        let ranges = match_ranges(item, &query);
                        if ranges.is_empty() {
                            return None;
                        }
                        ranges
                    } else {
                        Vec::new()
                    };
                    Some(VisibleItem {
                        text: item.clone(),
                        highlights,
                    })
                })
                .collect();

            if items.is_empty() {
                return None;
            }
            Some(VisibleCategory {
                index,
                name: cat.name.clone(),
                total_items: cat.items.len(),
                // Searching forces categories open so matches are visible
                expanded: searching || state.is_expanded(&patch.patch_id, index),
                items,
            })
        })
        .collect();

    let match_count = searching
        .then(|| categories.iter().map(|c| c.items.len()).sum());

    CategoryPanel {
        categories,
        match_count,
    }
}

/// All non-overlapping case-insensitive occurrences of `query_lower` in
/// `text`, first to last, as byte ranges into `text`.
///
/// Matching runs on the lowercased text; ranges are only kept when they
/// land on character boundaries of the original (lowercasing can change
/// byte lengths for a handful of non-ASCII characters, in which case the
/// item still counts as a match but that occurrence is not highlighted).
#[must_use]
pub fn match_ranges(text: &str, query_lower: &str) -> Vec<(usize, usize)> {
    if query_lower.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    let mut ranges = Vec::new();
    let mut offset = 0;

    while let Some(pos) = lower[offset..].find(query_lower) {
        let start = offset + pos;
        let end = start + query_lower.len();
        if text.is_char_boundary(start) && text.is_char_boundary(end.min(text.len())) {
            ranges.push((start, end.min(text.len())));
        }
        offset = end;
        if offset >= lower.len() {
            break;
        }
    }
    ranges
}

/// One row of the release-history sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub patch_id: String,
    pub version: String,
    pub release_date: String,
    pub status: String,
    pub is_live: bool,
    /// "Major" / "Minor" / "Update"
    pub kind_label: &'static str,
    pub change_count: u64,
}

/// Project the history sidebar, newest first.
#[must_use]
pub fn history_rows(store: &PatchStore) -> Vec<HistoryRow> {
    store
        .patches()
        .iter()
        .map(|patch| HistoryRow {
            patch_id: patch.patch_id.clone(),
            version: patch.version.clone(),
            release_date: patch.release_date.clone(),
            status: patch.status.clone(),
            is_live: patch.is_live(),
            kind_label: ReleaseKind::classify(&patch.version).label(),
            change_count: patch.change_count(),
        })
        .collect()
}
