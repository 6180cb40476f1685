//! Interactive terminal UI for browsing patch notes.
//!
//! The TUI splits into three layers:
//! - [`state`] holds the session view state (filter, search, expansion);
//! - [`viewmodel`] projects a patch and that state into plain renderable
//!   structures, with no ratatui types involved;
//! - [`views`] and [`ui`] draw the projections and run the event loop.

pub mod app;
pub mod events;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::App;
pub use state::{ChangeFilter, PanelFocus, ViewState};
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Styles, Theme,
};
pub use ui::run_tui;
pub use viewmodel::{category_panel, history_rows, CategoryPanel, HistoryRow, VisibleCategory};
