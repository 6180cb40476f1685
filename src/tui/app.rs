//! Application state for the patch-notes TUI.

use crate::model::{Patch, PatchStore};
use crate::tui::state::{PanelFocus, ViewState};
use crate::tui::viewmodel::{category_panel, history_rows, CategoryPanel, HistoryRow};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

/// Owns the store, the current selection and the session view state.
///
/// The store is immutable after load; `current` is a copy of the selected
/// patch's fields (the projection the panels render from), replaced
/// wholesale on selection.
pub struct App {
    store: PatchStore,
    current: Patch,
    pub state: ViewState,
    /// Transient status-bar message
    pub status_message: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
    /// Scroll state for the category list, persisted across frames
    pub category_list_state: ListState,
    /// Scroll state for the history list, persisted across frames
    pub history_list_state: ListState,
    /// History panel area from the last frame, for mouse hit-testing
    pub history_area: Option<Rect>,
}

impl App {
    /// Create an app with the newest patch selected.
    #[must_use]
    pub fn new(store: PatchStore) -> Self {
        let current = store.newest().clone();
        let mut state = ViewState::default();
        state.reset_for_patch(&current.patch_id, current.categories.len());
        state.history_cursor = 0;
        Self {
            store,
            current,
            state,
            status_message: None,
            show_help: false,
            should_quit: false,
            tick: 0,
            category_list_state: ListState::default(),
            history_list_state: ListState::default(),
            history_area: None,
        }
    }

    /// The currently selected patch projection.
    #[must_use]
    pub const fn current(&self) -> &Patch {
        &self.current
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &PatchStore {
        &self.store
    }

    /// Select a patch by id. Returns false (leaving the selection alone)
    /// for unknown ids. Selection resets the query and expansion state.
    pub fn select_patch(&mut self, patch_id: &str) -> bool {
        let Some(patch) = self.store.get(patch_id) else {
            return false;
        };
        self.current = patch.clone();
        self.state
            .reset_for_patch(&self.current.patch_id, self.current.categories.len());
        if let Some(position) = self.store.position(patch_id) {
            self.state.history_cursor = position;
        }
        true
    }

    /// Select a patch by exact version string (the `--select` flag).
    pub fn select_version(&mut self, version: &str) -> bool {
        let Some(id) = self
            .store
            .find_by_version(version)
            .map(|p| p.patch_id.clone())
        else {
            return false;
        };
        self.select_patch(&id)
    }

    /// Activate the history row under the cursor.
    pub fn activate_history_cursor(&mut self) {
        let rows = self.history();
        if let Some(row) = rows.get(self.state.history_cursor) {
            let id = row.patch_id.clone();
            self.select_patch(&id);
        }
    }

    /// Toggle the visible category under the cursor.
    pub fn activate_category_cursor(&mut self) {
        let panel = self.categories();
        if let Some(cat) = panel.categories.get(self.state.category_cursor) {
            let index = cat.index;
            let id = self.current.patch_id.clone();
            self.state.toggle_category(&id, index);
        }
    }

    /// Expand every category of the current patch.
    pub fn expand_all(&mut self) {
        let id = self.current.patch_id.clone();
        self.state.expand_all(&id, self.current.categories.len());
    }

    /// Collapse every category.
    pub fn collapse_all(&mut self) {
        self.state.collapse_all();
    }

    /// Cycle the change filter forward or backward.
    pub fn cycle_filter(&mut self, forward: bool) {
        self.state.filter = if forward {
            self.state.filter.next()
        } else {
            self.state.filter.prev()
        };
        self.clamp_category_cursor();
    }

    /// Move the cursor in the focused panel.
    pub fn move_cursor(&mut self, delta: isize) {
        match self.state.focus {
            PanelFocus::Categories => {
                let len = self.categories().categories.len();
                self.state.category_cursor = step(self.state.category_cursor, delta, len);
            }
            PanelFocus::History => {
                let len = self.store.len();
                self.state.history_cursor = step(self.state.history_cursor, delta, len);
            }
        }
    }

    /// Switch keyboard focus between panels.
    pub fn toggle_focus(&mut self) {
        self.state.focus = self.state.focus.toggled();
    }

    /// Project the category panel for rendering.
    #[must_use]
    pub fn categories(&self) -> CategoryPanel {
        category_panel(&self.current, &self.state)
    }

    /// Project the history sidebar for rendering.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryRow> {
        history_rows(&self.store)
    }

    /// Set a transient status-bar message.
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Keep the category cursor inside the visible list after filter or
    /// query changes.
    pub fn clamp_category_cursor(&mut self) {
        let len = self.categories().categories.len();
        if len == 0 {
            self.state.category_cursor = 0;
        } else if self.state.category_cursor >= len {
            self.state.category_cursor = len - 1;
        }
    }
}

fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta.is_negative() {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        (cursor + delta.unsigned_abs()).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, PatchStats, StoreOptions};

    fn store() -> PatchStore {
        let mk = |version: &str, cat: &str, items: &[&str]| Patch {
            patch_id: version.to_string(),
            version: version.to_string(),
            release_date: "Recent".to_string(),
            release_date_iso: None,
            build_channel: "LIVE".to_string(),
            status: "Archived".to_string(),
            categories: vec![Category {
                name: cat.to_string(),
                items: items.iter().map(|s| (*s).to_string()).collect(),
            }],
            stats: PatchStats::default(),
        };
        PatchStore::build(
            vec![
                mk("4.0.1", "Fixes", &["Crash fix"]),
                mk("4.0.2", "Features", &["Jump drive"]),
            ],
            StoreOptions::current(),
        )
        .expect("store")
    }

    #[test]
    fn test_new_selects_newest_with_first_category_expanded() {
        let app = App::new(store());
        assert_eq!(app.current().version, "4.0.2");
        assert!(app.state.is_expanded("4.0.2", 0));
        assert_eq!(app.state.history_cursor, 0);
    }

    #[test]
    fn test_select_patch_switches_projection_and_resets_query() {
        let mut app = App::new(store());
        app.state.query = "jump".to_string();

        assert!(app.select_patch("4.0.1"));
        assert_eq!(app.current().version, "4.0.1");
        assert!(app.state.query.is_empty(), "selection clears the query");
        assert!(app.state.is_expanded("4.0.1", 0));
        assert_eq!(app.state.history_cursor, 1);
        assert_eq!(app.categories().categories[0].items[0].text, "Crash fix");
    }

    #[test]
    fn test_select_unknown_patch_is_a_noop() {
        let mut app = App::new(store());
        assert!(!app.select_patch("9.9.9"));
        assert_eq!(app.current().version, "4.0.2");
    }

    #[test]
    fn test_select_by_version() {
        let mut app = App::new(store());
        assert!(app.select_version("4.0.1"));
        assert_eq!(app.current().patch_id, "4.0.1");
        assert!(!app.select_version("1.2.3"));
    }

    #[test]
    fn test_history_activation_selects_row() {
        let mut app = App::new(store());
        app.state.history_cursor = 1;
        app.activate_history_cursor();
        assert_eq!(app.current().version, "4.0.1");
    }

    #[test]
    fn test_category_activation_toggles_expansion() {
        let mut app = App::new(store());
        assert!(app.state.is_expanded("4.0.2", 0));
        app.activate_category_cursor();
        assert!(!app.state.is_expanded("4.0.2", 0));
        app.activate_category_cursor();
        assert!(app.state.is_expanded("4.0.2", 0));
    }

    #[test]
    fn test_cursor_movement_clamps_at_bounds() {
        let mut app = App::new(store());
        app.toggle_focus();
        app.move_cursor(5);
        assert_eq!(app.state.history_cursor, 1);
        app.move_cursor(-10);
        assert_eq!(app.state.history_cursor, 0);
    }

    #[test]
    fn test_filter_cycle_clamps_category_cursor() {
        let mut app = App::new(store());
        app.state.category_cursor = 0;
        // "Features" category vanishes under the Fixes filter
        app.cycle_filter(true); // Features
        app.cycle_filter(true); // Improvements
        assert_eq!(app.categories().categories.len(), 0);
        assert_eq!(app.state.category_cursor, 0);
    }
}
