//! Centralized theme and color scheme for the TUI.
//!
//! Two schemes, dark and light, runtime switchable with `T` and persisted
//! via [`crate::config::TuiPreferences`].

use ratatui::prelude::*;
use std::sync::RwLock;

/// Semantic colors for UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection_bg: Color,
    pub search_highlight_bg: Color,
    pub background_alt: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground on colored backgrounds
    pub badge_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    const fn dark_const() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection_bg: Color::Rgb(60, 60, 80),
            search_highlight_bg: Color::Rgb(100, 80, 0),
            background_alt: Color::Rgb(30, 30, 40),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            badge_fg: Color::Black,
        }
    }

    /// Dark scheme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light scheme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection_bg: Color::Rgb(200, 220, 240),
            search_highlight_bg: Color::Rgb(255, 230, 150),
            background_alt: Color::Rgb(240, 240, 245),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
            badge_fg: Color::Rgb(30, 30, 30),
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// The other theme in the dark/light rotation.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle between dark and light, returning the new name.
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected list rows)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection_bg)
            .fg(colors().text)
            .bold()
    }

    /// Search-match highlight style
    pub fn search_highlight() -> Style {
        Style::default()
            .bg(colors().search_highlight_bg)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render the build-channel badge ("LIVE", "PTU", ...)
pub fn channel_badge(channel: &str) -> Span<'static> {
    let scheme = colors();
    let bg = match channel.to_uppercase().as_str() {
        "LIVE" => scheme.success,
        "PTU" | "EPTU" => scheme.warning,
        _ => scheme.muted,
    };
    Span::styled(
        format!(" {} ", channel.to_uppercase()),
        Style::default().fg(scheme.badge_fg).bg(bg).bold(),
    )
}

/// Render the patch-status badge; live statuses get the success color.
pub fn status_badge(status: &str, is_live: bool) -> Span<'static> {
    let scheme = colors();
    let style = if is_live {
        Style::default().fg(scheme.success).bold()
    } else {
        Style::default().fg(scheme.text_muted)
    };
    Span::styled(status.to_string(), style)
}

/// Render a count badge
pub fn count_badge(count: u64) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {count} "),
        Style::default().fg(scheme.badge_fg).bg(scheme.accent).bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Footer hint pairs (key, description)
#[must_use]
pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/", "search"),
        ("f", "filter"),
        ("Tab", "panel"),
        ("↑↓/jk", "navigate"),
        ("Enter", "toggle/select"),
        ("E/C", "expand/collapse all"),
        ("T", "theme"),
        ("?", "help"),
        ("q", "quit"),
    ]
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }
    spans
}
