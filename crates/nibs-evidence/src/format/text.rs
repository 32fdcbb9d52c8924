//! Plain-text report rendering.

use std::fmt;

use crate::service::{EvidenceCard, Report};

/// `chrono` format used for the "Generated:" line.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

const RULE_WIDTH: usize = 72;

/// Render a report as plain text.
pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

/// `Display` adapter laying a report out as plain text.
pub struct TextReport<'a>(pub &'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "{}", report.header.title())?;
        writeln!(f, "{}", report.header.subtitle)?;
        writeln!(
            f,
            "Generated: {}",
            report.header.generated_at.format(GENERATED_AT_FORMAT)
        )?;
        writeln!(f, "Modality filter: {}", report.filter.label())?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(f, "Clinical Note:")?;
        writeln!(f, "{}", report.clinical_note)?;
        writeln!(f)?;

        if report.cards.is_empty() {
            writeln!(f, "No evidence recorded for the selected modality.")?;
            writeln!(f)?;
        }

        for card in &report.cards {
            write_card(f, card, &light)?;
        }

        writeln!(f, "{light}")?;
        writeln!(f, "Evidence Level Guide:")?;
        for entry in &report.legend {
            writeln!(f, "  {:<9} {}", entry.label, entry.meaning)?;
        }
        writeln!(f)?;
        writeln!(f, "Disclaimer: {}", report.disclaimer)?;
        writeln!(f)?;
        writeln!(f, "Data Sources: {}", report.data_sources)
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &EvidenceCard, rule: &str) -> fmt::Result {
    let record = card.record;

    writeln!(f, "{rule}")?;
    if card.fda_cleared {
        writeln!(f, "{}  [FDA Cleared]", record.name)?;
    } else {
        writeln!(f, "{}", record.name)?;
    }
    writeln!(f, "{rule}")?;
    writeln!(f, "Efficacy:          {}", record.efficacy)?;
    writeln!(f, "Effect Size:       {}", record.effect_size)?;
    writeln!(f, "Evidence Level:    {}", record.evidence_level)?;
    writeln!(f, "Response Rate:     {}", record.response_rate)?;
    if let Some(remission) = card.remission() {
        writeln!(f, "Remission:         {}", remission)?;
    }
    writeln!(f)?;
    writeln!(f, "Treatment Protocol:")?;
    writeln!(f, "  {}", record.protocol)?;
    writeln!(f, "Treatment Duration:")?;
    writeln!(f, "  {}", card.duration())?;
    writeln!(f, "Key References:")?;
    writeln!(f, "  {}", record.references)?;
    writeln!(f, "Clinical Notes:")?;
    writeln!(f, "  {}", record.notes)?;
    if let Some(contraindications) = card.contraindications() {
        writeln!(f, "Contraindications:")?;
        for item in contraindications {
            writeln!(f, "  - {}", item)?;
        }
    }
    writeln!(f)
}
