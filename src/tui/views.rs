//! Render functions for the patch-notes view.
//!
//! Everything here draws from the projections in [`crate::tui::viewmodel`];
//! no filtering or search logic lives in this module.

use crate::tui::app::App;
use crate::tui::state::PanelFocus;
use crate::tui::theme::{
    channel_badge, colors, count_badge, footer_hints, render_footer_hints, status_badge, Styles,
};
use crate::tui::viewmodel::{CategoryPanel, HistoryRow};
use crate::tui::widgets::{centered_rect, highlight_spans, truncate_to_width};
use crate::utils::ReleaseKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

/// Header: title, version, channel and status badges, date, stats strip.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let patch = app.current();
    let kind = ReleaseKind::classify(&patch.version).label();

    let title_line = Line::from(vec![
        Span::styled("patch-notes", Styles::header_title()),
        Span::styled(" │ ", Styles::label()),
        Span::styled(format!("Alpha {}", patch.version), Styles::value()),
        Span::raw(" "),
        channel_badge(&patch.build_channel),
        Span::raw(" "),
        status_badge(&patch.status, patch.is_live()),
        Span::styled(" │ ", Styles::label()),
        Span::styled(patch.release_date.clone(), Styles::text_muted()),
        Span::styled(" │ ", Styles::label()),
        Span::styled(kind, Styles::text_muted()),
    ]);

    let stats = &patch.stats;
    let stat = |label: &str, value: u64| {
        vec![
            Span::styled(value.to_string(), Styles::value()),
            Span::styled(format!(" {label}"), Styles::text_muted()),
        ]
    };
    let mut stats_spans = Vec::new();
    for (i, part) in [
        stat("features", stats.features),
        stat("improvements", stats.improvements),
        stat("fixes", stats.fixes),
        stat("ship & vehicle", stats.ships),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            stats_spans.push(Span::styled(" │ ", Styles::label()));
        }
        stats_spans.extend(part);
    }
    stats_spans.push(Span::raw("  "));
    stats_spans.push(count_badge(stats.total()));
    stats_spans.push(Span::styled(" changes", Styles::text_muted()));

    let header = Paragraph::new(vec![title_line, Line::from(stats_spans)]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border()),
    );
    frame.render_widget(header, area);
}

/// Category cards: collapsible sections, items with search highlights.
pub fn render_categories(frame: &mut Frame, area: Rect, app: &mut App, panel: &CategoryPanel) {
    let focused = app.state.focus == PanelFocus::Categories;
    let block = Block::default()
        .title(" Patch Notes ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    if panel.is_empty() {
        let message = if app.state.query.trim().is_empty() {
            "No categories to show under this filter.".to_string()
        } else {
            format!("No entries match \"{}\".", app.state.query.trim())
        };
        let placeholder = Paragraph::new(Line::from(vec![
            Span::styled(message, Styles::text_muted()),
            Span::raw("  "),
            Span::styled("[Esc]", Styles::shortcut_key()),
            Span::styled(" clear search", Styles::shortcut_desc()),
        ]))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = panel
        .categories
        .iter()
        .map(|cat| {
            let marker = if cat.expanded { "▾ " } else { "▸ " };
            let mut lines = vec![Line::from(vec![
                Span::styled(marker, Styles::label()),
                Span::styled(cat.name.clone(), Styles::section_title()),
                Span::styled(format!(" ({})", cat.total_items), Styles::text_muted()),
            ])];
            if cat.expanded {
                for item in &cat.items {
                    let mut spans = vec![Span::styled("    • ", Styles::label())];
                    spans.extend(
                        highlight_spans(&item.text, &item.highlights, Styles::text())
                            .into_iter()
                            .map(|s| Span::styled(s.content.into_owned(), s.style)),
                    );
                    lines.push(Line::from(spans));
                }
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    app.category_list_state
        .select(Some(app.state.category_cursor.min(panel.categories.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut app.category_list_state);
}

/// Release-history sidebar, newest first, one row per patch.
pub fn render_history(frame: &mut Frame, area: Rect, app: &mut App, rows: &[HistoryRow]) {
    let focused = app.state.focus == PanelFocus::History;
    let block = Block::default()
        .title(format!(" History ({}) ", rows.len()))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    let current_id = app.current().patch_id.clone();
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let marker = if row.patch_id == current_id {
                "▶ "
            } else {
                "  "
            };
            let label = truncate_to_width(
                &format!(
                    "{}{:<8} {:<6} {}",
                    marker, row.version, row.kind_label, row.release_date
                ),
                inner_width.saturating_sub(4),
            );
            let line = Line::from(vec![
                Span::styled(label, Styles::text()),
                Span::raw(" "),
                status_badge(&row.status, row.is_live),
            ]);
            ListItem::new(line)
        })
        .collect();

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    app.history_list_state
        .select(Some(app.state.history_cursor.min(rows.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut app.history_list_state);
    app.history_area = Some(area);
}

/// Status bar: active filter, search query and match count, messages.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, panel: &CategoryPanel) {
    let mut spans = vec![
        Span::styled(" Filter: ", Styles::shortcut_desc()),
        Span::styled(
            format!(" {} ", app.state.filter.display_name()),
            Style::default()
                .fg(colors().badge_fg)
                .bg(colors().accent)
                .bold(),
        ),
    ];

    if app.state.search_active || !app.state.query.is_empty() {
        spans.push(Span::styled(" │ ", Styles::label()));
        spans.push(Span::styled("Search: ", Styles::shortcut_desc()));
        spans.push(Span::styled(app.state.query.clone(), Styles::text()));
        if app.state.search_active {
            spans.push(Span::styled("│", Styles::shortcut_key()));
        }
        if let Some(count) = panel.match_count {
            let style = if count == 0 {
                Styles::error()
            } else {
                Styles::text_muted()
            };
            spans.push(Span::styled(format!(" ({count} matches)"), style));
        }
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ℹ ", Styles::shortcut_key()));
        spans.push(Span::styled(msg.clone(), Styles::shortcut_key()));
    }

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

/// Footer: keyboard hints.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(render_footer_hints(&footer_hints())))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    frame.render_widget(footer, area);
}

/// Help overlay listing every binding; any key closes it.
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(55, 70, area);
    frame.render_widget(Clear, popup_area);

    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::shortcut_key()),
            Span::styled(desc.to_string(), Styles::text()),
        ])
    };

    let help_text = vec![
        Line::styled("━━━ Patch Notes Help ━━━", Styles::section_title()),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation", Styles::section_title())]),
        entry("↑/↓ or j/k", "Move the cursor in the focused panel"),
        entry("PgUp/PgDn", "Move the cursor by ten rows"),
        entry("Tab", "Switch focus between notes and history"),
        entry("Enter/Space", "Toggle a category / select a release"),
        Line::from(""),
        Line::from(vec![Span::styled("Filtering", Styles::section_title())]),
        entry("f / F", "Cycle the change filter forward/backward"),
        entry("/", "Search within the selected patch"),
        entry("Esc", "Clear the search"),
        entry("E / C", "Expand / collapse all categories"),
        Line::from(""),
        Line::from(vec![Span::styled("Other", Styles::section_title())]),
        entry("T", "Toggle dark/light theme"),
        entry("?", "Toggle this help"),
        entry("q / Ctrl-C", "Quit"),
        Line::from(""),
        Line::styled("Press any key to close", Styles::text_muted()),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .style(Styles::text());

    frame.render_widget(help, popup_area);
}
