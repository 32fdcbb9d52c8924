//! Shared colours and styles.

use nibs_evidence::{EfficacyClass, EvidenceTier};
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const BORDER: Color = Color::DarkGray;
pub const KEY: Color = Color::Yellow;
pub const MUTED: Color = Color::DarkGray;
const ORANGE: Color = Color::Rgb(234, 88, 12);

/// Panel title style.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn key() -> Style {
    Style::default().fg(KEY)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Efficacy text colour: green for high, yellow for moderate, orange otherwise.
pub fn efficacy(class: EfficacyClass) -> Style {
    let color = match class {
        EfficacyClass::High => Color::Green,
        EfficacyClass::Moderate => Color::Yellow,
        EfficacyClass::Other => ORANGE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Evidence-level badge colour.
pub fn tier(tier: EvidenceTier) -> Style {
    let color = match tier {
        EvidenceTier::Tier1A => Color::Green,
        EvidenceTier::Tier1B => Color::Blue,
        EvidenceTier::Tier2 => Color::Yellow,
        EvidenceTier::Tier3 | EvidenceTier::Unrecognized => Color::Gray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// "FDA Cleared" badge.
pub fn fda_badge() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}
