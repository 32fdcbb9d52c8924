//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  NIBS SELECTOR v0.1.0   status                  [Q]uit [?]Help  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  selection panel  ── or ──  report panel                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  key hints for the current screen                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use nibs_evidence::{Report, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{report_panel, selection_panel, theme, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = split_screen(frame.area());

    render_header(frame, header, app);
    match app.screen() {
        Screen::Selecting => selection_panel::render(frame, body, app),
        Screen::Reporting => report_panel::render(frame, body, app),
    }
    render_footer(frame, footer, app.screen());

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// How far the report can scroll on a terminal of the given size.
pub fn report_scroll_limit(report: &Report, size: Rect) -> u16 {
    let [_, body, _] = split_screen(size);
    report_panel::scroll_limit(report, body)
}

fn split_screen(size: Rect) -> [Rect; 3] {
    // Main vertical layout: header, body, footer
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .areas(size)
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(" NIBS SELECTOR ", theme::title()),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            theme::muted(),
        ),
    ];

    let status = match &app.status {
        Some(message) if message.is_error => Span::styled(
            format!("  ⚠ {} ", message.text),
            Style::default().fg(Color::Red),
        ),
        Some(message) => Span::styled(
            format!("  {} ", message.text),
            Style::default().fg(Color::Green),
        ),
        None => Span::raw(""),
    };

    let hints = vec![
        Span::styled("[Q]", theme::key()),
        Span::raw("uit "),
        Span::styled("[?]", theme::key()),
        Span::raw("Help "),
    ];

    // Calculate spacing
    let title_len: usize = title.iter().map(|s| s.width()).sum();
    let status_len = status.width();
    let hints_len: usize = hints.iter().map(|s| s.width()).sum();
    let padding = area
        .width
        .saturating_sub((title_len + status_len + hints_len + 2) as u16);

    let mut spans = title;
    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );

    frame.render_widget(header, area);
}

/// Render the footer with keyboard shortcuts for the current screen.
fn render_footer(frame: &mut Frame, area: Rect, screen: Screen) {
    let binds: &[(&str, &str)] = match screen {
        Screen::Selecting => &[
            ("[1-6]", " Disorder  "),
            ("[↑↓]", " Navigate  "),
            ("[Tab]", " Modality  "),
            ("[Enter]", " Generate  "),
            ("[X]", " Reset  "),
        ],
        Screen::Reporting => &[
            ("[↑↓]", " Scroll  "),
            ("[P]", " Print/Export  "),
            ("[B]", " Back  "),
            ("[X]", " Reset  "),
        ],
    };

    let keybinds: Vec<Span> = binds
        .iter()
        .flat_map(|(key, label)| [Span::styled(*key, theme::key()), Span::raw(*label)])
        .collect();

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border()),
        )
        .centered();

    frame.render_widget(footer, area);
}
