//! Report screen: the evidence report as a scrollable document.

use nibs_evidence::{format::GENERATED_AT_FORMAT, EvidenceCard, Report, ReportAction};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme;
use crate::domain::App;

/// Render the report screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());

    let Some(report) = app.current_report() else {
        frame.render_widget(block, area);
        return;
    };

    // The terminal may have grown since the last scroll
    let scroll = app.report_scroll.min(scroll_limit(&report, area));
    let block = block
        .title(format!(" {} ", report.header.title()))
        .title_style(theme::title());

    let paragraph = report_paragraph(&report)
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Largest scroll offset that still fills `area` with report text.
pub fn scroll_limit(report: &Report, area: Rect) -> u16 {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = report_paragraph(report).line_count(inner.width);
    u16::try_from(rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX)
}

fn report_paragraph(report: &Report) -> Paragraph<'static> {
    Paragraph::new(report_lines(report)).wrap(Wrap { trim: false })
}

/// Lay a report out in document order.
pub fn report_lines(report: &Report) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(report.header.subtitle, theme::bold())),
        Line::from(Span::styled(
            format!(
                "Generated: {}",
                report.header.generated_at.format(GENERATED_AT_FORMAT)
            ),
            theme::muted(),
        )),
        Line::from(vec![
            Span::styled("Modality filter: ", theme::muted()),
            Span::raw(report.filter.label()),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Clinical Note:",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(report.clinical_note),
        Line::raw(""),
    ];

    if report.is_empty() {
        lines.push(Line::from(Span::styled(
            "No evidence recorded for the selected modality.",
            theme::muted(),
        )));
        lines.push(Line::raw(""));
    }

    for card in &report.cards {
        push_card(&mut lines, card);
    }

    lines.push(Line::from(Span::styled("Evidence Level Guide:", theme::bold())));
    for entry in &report.legend {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<9} ", entry.label), theme::tier(entry.tier)),
            Span::raw(entry.meaning),
        ]));
    }
    lines.push(Line::raw(""));

    let mut actions = Vec::new();
    for action in report.actions {
        let hotkey = match action {
            ReportAction::PrintExport => "[P]",
            ReportAction::Back => "[B]",
        };
        actions.push(Span::styled(hotkey, theme::key()));
        actions.push(Span::raw(format!(" {}   ", action.label())));
    }
    lines.push(Line::from(actions));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Disclaimer: ", theme::bold()),
        Span::styled(report.disclaimer, theme::muted()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Data Sources: ", theme::bold()),
        Span::styled(report.data_sources, theme::muted()),
    ]));

    lines
}

fn push_card(lines: &mut Vec<Line<'static>>, card: &EvidenceCard) {
    let record = card.record;
    let rule = Span::styled("─".repeat(60), theme::border());

    lines.push(Line::from(rule.clone()));
    let mut heading = vec![Span::styled(
        record.name,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if card.fda_cleared {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(" ✓ FDA Cleared ", theme::fda_badge()));
    }
    lines.push(Line::from(heading));
    lines.push(Line::from(rule));

    lines.push(field("Efficacy", record.efficacy, theme::efficacy(card.efficacy_class)));
    lines.push(field("Effect Size", record.effect_size, Style::default()));
    lines.push(field(
        "Evidence Level",
        record.evidence_level,
        theme::tier(card.evidence_tier),
    ));
    lines.push(field(
        "Response Rate",
        record.response_rate,
        theme::bold(),
    ));
    if let Some(remission) = card.remission() {
        lines.push(field("Remission", remission, Style::default()));
    }
    lines.push(Line::raw(""));

    section(lines, "Treatment Protocol", record.protocol.to_string());
    section(lines, "Treatment Duration", card.duration());
    lines.push(Line::from(Span::styled("Key References:", theme::bold())));
    lines.push(Line::from(Span::styled(
        format!("  {}", record.references),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    section(lines, "Clinical Notes", record.notes.to_string());

    if let Some(contraindications) = card.contraindications() {
        lines.push(Line::from(Span::styled(
            "Contraindications:",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        for item in contraindications {
            lines.push(Line::raw(format!("  • {item}")));
        }
    }
    lines.push(Line::raw(""));
}

fn field(label: &str, value: &'static str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", format!("{label}:")), theme::muted()),
        Span::styled(value, style),
    ])
}

fn section(lines: &mut Vec<Line<'static>>, label: &str, body: String) {
    lines.push(Line::from(Span::styled(format!("{label}:"), theme::bold())));
    lines.push(Line::raw(format!("  {body}")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use nibs_evidence::{
        DisorderId, DisorderRecord, ModalityFilter, ModalityId, ModalityRecord, ReportRenderer,
        StaticEvidenceStore,
    };

    fn lines_text(disorder: DisorderId, filter: ModalityFilter) -> Vec<String> {
        let store = StaticEvidenceStore::new();
        let at = Local
            .with_ymd_and_hms(2024, 6, 12, 14, 30, 0)
            .single()
            .unwrap();
        let report = ReportRenderer::new(&store)
            .render(disorder, filter, at)
            .unwrap();
        report_lines(&report)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_depression_report_has_three_cards_and_badges() {
        let lines = lines_text(DisorderId::Depression, ModalityFilter::All);
        assert_eq!(lines.iter().filter(|l| l.contains("FDA Cleared")).count(), 2);
        assert_eq!(lines.iter().filter(|l| l.starts_with("Efficacy")).count(), 3);
        assert!(lines.iter().any(|l| l == "Generated: 2024-06-12 14:30"));
    }

    #[test]
    fn test_empty_report_keeps_static_blocks() {
        let lines = lines_text(DisorderId::Ptsd, ModalityFilter::Only(ModalityId::Tbs));
        assert!(lines
            .iter()
            .any(|l| l == "No evidence recorded for the selected modality."));
        assert!(lines.iter().any(|l| l == "Evidence Level Guide:"));
        assert!(lines.iter().any(|l| l.starts_with("Disclaimer: ")));
        assert!(lines.iter().any(|l| l.contains("Back to Selection")));
    }

    #[test]
    fn test_stroke_card_hides_remission() {
        let lines = lines_text(DisorderId::Stroke, ModalityFilter::All);
        assert!(!lines.iter().any(|l| l.starts_with("Remission")));
        assert_eq!(lines.iter().filter(|l| l.starts_with("Response Rate")).count(), 2);
    }

    static UNLISTED: [(ModalityId, ModalityRecord); 1] = [(
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.30-0.40",
            fda_approved: false,
            evidence_level: "Level 2",
            response_rate: "30-40%",
            remission_rate: "15-20%",
            sessions: "15 sessions",
            protocol: "1 Hz right DLPFC",
            frequency: "Daily",
            references: "Open-label series",
            contraindications: &[],
            notes: "No screening exclusions recorded.",
        },
    )];

    static UNLISTED_RECORD: DisorderRecord = DisorderRecord {
        id: DisorderId::Ocd,
        display_name: "Obsessive-Compulsive Disorder",
        modalities: &UNLISTED,
    };

    #[test]
    fn test_card_without_contraindications_omits_block() {
        let at = Local
            .with_ymd_and_hms(2024, 6, 12, 14, 30, 0)
            .single()
            .unwrap();
        let report = Report::build(&UNLISTED_RECORD, ModalityFilter::All, at);
        let lines: Vec<String> = report_lines(&report)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(lines.iter().any(|l| l == "Clinical Notes:"));
        assert!(!lines.iter().any(|l| l == "Contraindications:"));
        assert!(!lines.iter().any(|l| l.starts_with("  • ")));
    }

    #[test]
    fn test_scroll_limit_tracks_viewport() {
        let store = StaticEvidenceStore::new();
        let report = ReportRenderer::new(&store)
            .render_now(DisorderId::Depression, ModalityFilter::All)
            .unwrap();

        let short = scroll_limit(&report, Rect::new(0, 0, 100, 20));
        let tall = scroll_limit(&report, Rect::new(0, 0, 100, 30));
        assert!(short > 0);
        assert_eq!(short - tall, 10);
        assert_eq!(scroll_limit(&report, Rect::new(0, 0, 200, 300)), 0);

        // Narrower text wraps onto more rows
        assert!(scroll_limit(&report, Rect::new(0, 0, 50, 20)) > short);
    }
}
