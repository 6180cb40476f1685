//! View state: filter, search query, expansion and panel focus.
//!
//! All of this is session-local and owned by the [`crate::tui::App`]; the
//! store itself never changes. Selecting a patch resets the parts of the
//! state that are scoped to a patch (query, expansion, cursors).

use std::collections::HashSet;

/// The fixed set of change filters, cycled with `f`/`F`.
///
/// A category matches a filter when its lowercased name contains the
/// filter's key as a substring; `All` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeFilter {
    #[default]
    All,
    Features,
    Improvements,
    Fixes,
    Ships,
    Known,
}

impl ChangeFilter {
    /// Get the next filter in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Features,
            Self::Features => Self::Improvements,
            Self::Improvements => Self::Fixes,
            Self::Fixes => Self::Ships,
            Self::Ships => Self::Known,
            Self::Known => Self::All,
        }
    }

    /// Get the previous filter in the cycle.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Known,
            Self::Features => Self::All,
            Self::Improvements => Self::Features,
            Self::Fixes => Self::Improvements,
            Self::Ships => Self::Fixes,
            Self::Known => Self::Ships,
        }
    }

    /// Display name for the status bar.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Features => "Features",
            Self::Improvements => "Improvements",
            Self::Fixes => "Fixes",
            Self::Ships => "Ships",
            Self::Known => "Known Issues",
        }
    }

    /// Substring matched against lowercased category names; `None` for
    /// `All`.
    #[must_use]
    pub const fn key(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Features => Some("feature"),
            Self::Improvements => Some("improvement"),
            Self::Fixes => Some("fix"),
            Self::Ships => Some("ship"),
            Self::Known => Some("known"),
        }
    }

    /// Whether a category name passes this filter.
    #[must_use]
    pub fn matches(self, category_name: &str) -> bool {
        self.key()
            .map_or(true, |key| category_name.to_lowercase().contains(key))
    }
}

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelFocus {
    #[default]
    Categories,
    History,
}

impl PanelFocus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Categories => Self::History,
            Self::History => Self::Categories,
        }
    }
}

/// Session view state.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Active change filter
    pub filter: ChangeFilter,
    /// Free-text search query (case-insensitive substring)
    pub query: String,
    /// Whether the search prompt is capturing keystrokes
    pub search_active: bool,
    /// Expanded category keys, scoped to the selected patch
    pub expanded: HashSet<String>,
    /// Panel with keyboard focus
    pub focus: PanelFocus,
    /// Cursor into the visible category list
    pub category_cursor: usize,
    /// Cursor into the history list
    pub history_cursor: usize,
}

impl ViewState {
    /// Expansion key for one category of one patch.
    #[must_use]
    pub fn category_key(patch_id: &str, index: usize) -> String {
        format!("{patch_id}-cat-{index}")
    }

    /// Whether a category is expanded.
    #[must_use]
    pub fn is_expanded(&self, patch_id: &str, index: usize) -> bool {
        self.expanded.contains(&Self::category_key(patch_id, index))
    }

    /// Toggle one category's expansion.
    pub fn toggle_category(&mut self, patch_id: &str, index: usize) {
        let key = Self::category_key(patch_id, index);
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    /// Expand all of a patch's categories.
    pub fn expand_all(&mut self, patch_id: &str, category_count: usize) {
        for index in 0..category_count {
            self.expanded.insert(Self::category_key(patch_id, index));
        }
    }

    /// Collapse everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Reset patch-scoped state after a new selection: query cleared,
    /// first category expanded, cursors back to the top. Filter and focus
    /// survive selection changes.
    pub fn reset_for_patch(&mut self, patch_id: &str, category_count: usize) {
        self.query.clear();
        self.search_active = false;
        self.expanded.clear();
        if category_count > 0 {
            self.expanded.insert(Self::category_key(patch_id, 0));
        }
        self.category_cursor = 0;
    }

    /// Append a character to the query.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character from the query.
    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Leave search mode and discard the query.
    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.query.clear();
    }
}
