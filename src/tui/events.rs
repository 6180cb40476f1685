//! Keyboard event handling for the TUI.
//!
//! Two modes: search mode captures printable keys into the query; normal
//! mode dispatches navigation and action keys. Mirrors the keybindings
//! advertised by the footer hints.

use crate::config::TuiPreferences;
use crate::tui::app::App;
use crate::tui::state::PanelFocus;
use crate::tui::theme::{toggle_theme, Theme};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Handle one key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Any keypress retires the previous status message
    app.status_message = None;

    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        // Any key dismisses the help overlay
        app.show_help = false;
        return;
    }

    if app.state.search_active {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('/') => {
            app.state.search_active = true;
            app.state.query.clear();
        }
        KeyCode::Char('f') => app.cycle_filter(true),
        KeyCode::Char('F') => app.cycle_filter(false),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::Enter | KeyCode::Char(' ') => match app.state.focus {
            PanelFocus::Categories => app.activate_category_cursor(),
            // Keyboard activation of a history row, same as a click
            PanelFocus::History => app.activate_history_cursor(),
        },
        KeyCode::Char('E') => app.expand_all(),
        KeyCode::Char('C') => app.collapse_all(),
        KeyCode::Char('T') => {
            let name = toggle_theme();
            persist_theme(name);
            app.set_status_message(format!("Theme: {name}"));
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => {
            if !app.state.query.is_empty() {
                app.state.clear_search();
                app.clamp_category_cursor();
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.state.clear_search();
            app.clamp_category_cursor();
        }
        KeyCode::Enter => {
            // Keep the query applied, leave the prompt
            app.state.search_active = false;
        }
        KeyCode::Backspace => {
            app.state.pop_query_char();
            app.clamp_category_cursor();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.state.push_query_char(c);
            app.clamp_category_cursor();
        }
        _ => {}
    }
}

/// Handle one mouse event. A left click on a history row selects that
/// release; the wheel moves the cursor in the focused panel.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.show_help = false;
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(area) = app.history_area else {
                return;
            };
            if !area.contains(Position::new(mouse.column, mouse.row)) {
                return;
            }
            // Skip the block borders, then map the row through the scroll
            // offset of the last rendered frame
            let inner_top = area.y + 1;
            let inner_bottom = area.y + area.height.saturating_sub(1);
            if mouse.row < inner_top || mouse.row >= inner_bottom {
                return;
            }
            let index = app.history_list_state.offset() + (mouse.row - inner_top) as usize;
            let id = app.history().get(index).map(|row| row.patch_id.clone());
            if let Some(id) = id {
                app.state.focus = PanelFocus::History;
                app.select_patch(&id);
            }
        }
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        _ => {}
    }
}

/// Write the chosen theme back to the preferences file. Failures are
/// logged, never surfaced; losing a preference is not worth an error.
fn persist_theme(name: &str) {
    let prefs = TuiPreferences {
        theme: Theme::from_name(name).name.to_string(),
    };
    if let Err(e) = prefs.save() {
        tracing::debug!("Failed to persist theme preference: {e}");
    }
}
