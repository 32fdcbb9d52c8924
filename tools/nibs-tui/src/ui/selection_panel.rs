//! Selection screen: disorder list, modality filter, generate action.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  NIBS Evidence-Based Treatment Selector      │
//! ├──────────────────────────────────────────────┤
//! │  1. Select Disorder/Condition                │
//! │  [1] Major Depressive Disorder               │
//! │      3 modalities available                  │
//! │  ...                                         │
//! ├──────────────────────────────────────────────┤
//! │  2. Filter by Stimulation Modality           │
//! │  [a] All Modalities   [r] rTMS only          │
//! │  [t] Theta Burst ...  [d] tDCS only          │
//! ├──────────────────────────────────────────────┤
//! │  [ Generate Evidence Report ]                │
//! ├──────────────────────────────────────────────┤
//! │  About This Tool                             │
//! └──────────────────────────────────────────────┘
//! ```

use nibs_evidence::DisorderId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::theme;
use crate::domain::App;

const ABOUT: [&str; 3] = [
    "This evidence-based tool compiles data from recent meta-analyses, systematic reviews, \
and randomized controlled trials to help clinicians understand the efficacy of various \
non-invasive brain stimulation modalities.",
    "Data includes: Effect sizes, response rates, FDA approval status, treatment protocols, \
evidence levels, and key clinical considerations.",
    "Modalities covered: rTMS (Repetitive Transcranial Magnetic Stimulation), TBS (Theta Burst \
Stimulation), and tDCS (Transcranial Direct Current Stimulation).",
];

/// Render the selection screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Title
            Constraint::Length(15), // Disorder list
            Constraint::Length(4),  // Modality filter
            Constraint::Length(3),  // Generate
            Constraint::Min(4),     // About
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_disorder_list(frame, chunks[1], app);
    render_filter(frame, chunks[2], app);
    render_generate(frame, chunks[3], app);
    render_about(frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "NIBS Evidence-Based Treatment Selector",
            theme::title(),
        )),
        Line::raw("Non-Invasive Brain Stimulation for Neuropsychiatric Disorders"),
        Line::from(Span::styled(
            "Evidence-based decision support tool for clinicians",
            theme::muted(),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border()),
        )
        .centered();

    frame.render_widget(paragraph, area);
}

fn render_disorder_list(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.controller.selected_disorder();

    let items: Vec<ListItem> = DisorderId::ALL
        .iter()
        .map(|&id| {
            let is_selected = selected == Some(id);
            let count = app.modality_count(id);

            let line_style = if is_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let name = Line::from(vec![
                Span::styled(format!("[{}] ", id.hotkey()), theme::key()),
                Span::raw(id.label()),
            ]);
            let caption = Line::from(Span::styled(
                format!("    {count} modalities available"),
                theme::muted(),
            ));

            ListItem::new(vec![name, caption]).style(line_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" 1. Select Disorder/Condition ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );

    frame.render_widget(list, area);
}

fn render_filter(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" 2. Filter by Stimulation Modality (Optional) ")
        .title_style(theme::title())
        .borders(Borders::ALL)
        .border_style(theme::border());

    // Only offered once a disorder is chosen
    let options = app.modality_options();
    if options.is_empty() {
        let hint = Paragraph::new(Span::styled("Select a disorder first", theme::muted()))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    // Two options per row
    let current = app.controller.selected_modality();
    let rows: Vec<Line> = options
        .chunks(2)
        .map(|row| {
            let mut spans = Vec::new();
            for option in row {
                let style = if *option == current {
                    Style::default()
                        .fg(Color::Black)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!("[{}]", option.hotkey()), theme::key()));
                spans.push(Span::styled(format!(" {} ", option.label()), style));
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        })
        .collect();

    let filter = Paragraph::new(rows)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(filter, area);
}

fn render_generate(frame: &mut Frame, area: Rect, app: &App) {
    let (style, border) = if app.controller.can_generate() {
        (
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Blue),
        )
    } else {
        (theme::muted(), theme::border())
    };

    let button = Paragraph::new(Span::styled(" Generate Evidence Report ", style))
        .block(Block::default().borders(Borders::ALL).border_style(border))
        .centered();

    frame.render_widget(button, area);
}

fn render_about(frame: &mut Frame, area: Rect) {
    let mut text = Vec::new();
    for (i, paragraph) in ABOUT.iter().enumerate() {
        if i > 0 {
            text.push(Line::raw(""));
        }
        text.push(Line::raw(*paragraph));
    }

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" About This Tool ")
                .title_style(theme::title())
                .borders(Borders::ALL)
                .border_style(theme::border()),
        );

    frame.render_widget(paragraph, area);
}
