//! Small shared rendering helpers.

use crate::tui::theme::Styles;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Minimum usable terminal size.
pub const MIN_WIDTH: u16 = 70;
pub const MIN_HEIGHT: u16 = 18;

/// Check the terminal is large enough to render the layout.
///
/// # Errors
///
/// Returns the offending dimensions when the terminal is too small.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((width, height))
    } else {
        Ok(())
    }
}

/// Render the too-small warning in place of the normal layout.
pub fn render_size_warning(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    let message = Paragraph::new(format!(
        "Terminal too small.\nNeed at least {min_width}x{min_height}."
    ))
    .style(Styles::error())
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

/// Truncate a string to a display width, appending an ellipsis when cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Split `text` into styled spans, applying the search-highlight style to
/// each `(start, end)` byte range.
#[must_use]
pub fn highlight_spans<'a>(
    text: &'a str,
    ranges: &[(usize, usize)],
    base: Style,
) -> Vec<Span<'a>> {
    if ranges.is_empty() {
        return vec![Span::styled(text, base)];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for &(start, end) in ranges {
        if start > cursor {
            spans.push(Span::styled(&text[cursor..start], base));
        }
        spans.push(Span::styled(
            &text[start..end],
            Styles::search_highlight(),
        ));
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(Span::styled(&text[cursor..], base));
    }
    spans
}

/// Centered rect helper for overlays.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
