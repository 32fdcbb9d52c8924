//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SELECTION_KEYS: [(&str, &str); 6] = [
    ("  1-6    ", "Select disorder"),
    ("  ↑/↓    ", "Move disorder selection"),
    ("  Tab    ", "Cycle modality filter"),
    ("  a/r/t/d", "All, rTMS, TBS or tDCS filter"),
    ("  Enter/G", "Generate evidence report"),
    ("  X      ", "Reset selection"),
];

const REPORT_KEYS: [(&str, &str); 4] = [
    ("  ↑/↓    ", "Scroll report"),
    ("  P      ", "Print/export report to file"),
    ("  B/Esc  ", "Back to selection"),
    ("  X      ", "Reset selection"),
];

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a box in the middle of the screen
    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "NIBS SELECTOR HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    push_section(&mut help_text, "Selection", &SELECTION_KEYS);
    push_section(&mut help_text, "Report", &REPORT_KEYS);
    push_section(
        &mut help_text,
        "General",
        &[("  ?      ", "Toggle this help"), ("  Q      ", "Quit")],
    );

    help_text.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

fn push_section(
    lines: &mut Vec<Line<'static>>,
    heading: &'static str,
    keys: &[(&'static str, &'static str)],
) {
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (key, action) in keys {
        lines.push(Line::from(vec![
            Span::styled(*key, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::raw(*action),
        ]));
    }
    lines.push(Line::raw(""));
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
