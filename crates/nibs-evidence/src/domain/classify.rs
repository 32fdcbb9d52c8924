//! Efficacy and evidence-level classification.
//!
//! Both helpers bucket free-text labels for colour-coding. Efficacy uses an
//! ordered first-match-wins substring rule list, so a label containing both
//! "High" and "Moderate" lands in [`EfficacyClass::High`].

use serde::Serialize;

/// Efficacy bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficacyClass {
    High,
    Moderate,
    Other,
}

/// Evidence-level bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EvidenceTier {
    Tier1A,
    Tier1B,
    Tier2,
    Tier3,
    Unrecognized,
}

/// Ordered (substring, class) rules. Case-sensitive; order matters.
pub const EFFICACY_RULES: [(&str, EfficacyClass); 2] = [
    ("High", EfficacyClass::High),
    ("Moderate", EfficacyClass::Moderate),
];

/// Classify a free-text efficacy label.
pub fn classify_efficacy(text: &str) -> EfficacyClass {
    EFFICACY_RULES
        .iter()
        .find(|(needle, _)| text.contains(*needle))
        .map(|(_, class)| *class)
        .unwrap_or(EfficacyClass::Other)
}

/// Classify an evidence-level label by exact match.
pub fn classify_evidence_level(level: &str) -> EvidenceTier {
    match level {
        "Level 1A" => EvidenceTier::Tier1A,
        "Level 1B" => EvidenceTier::Tier1B,
        "Level 2" => EvidenceTier::Tier2,
        "Level 3" => EvidenceTier::Tier3,
        _ => EvidenceTier::Unrecognized,
    }
}

impl EvidenceTier {
    /// Tiers shown in the legend, strongest first.
    pub const LEGEND: [EvidenceTier; 4] = [
        EvidenceTier::Tier1A,
        EvidenceTier::Tier1B,
        EvidenceTier::Tier2,
        EvidenceTier::Tier3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EvidenceTier::Tier1A => "Level 1A",
            EvidenceTier::Tier1B => "Level 1B",
            EvidenceTier::Tier2 => "Level 2",
            EvidenceTier::Tier3 => "Level 3",
            EvidenceTier::Unrecognized => "Unrecognized",
        }
    }

    /// Plain-language meaning shown in the legend.
    pub fn meaning(&self) -> &'static str {
        match self {
            EvidenceTier::Tier1A => {
                "Multiple high-quality RCTs and meta-analyses, strong consensus"
            }
            EvidenceTier::Tier1B => "Multiple RCTs with some heterogeneity, good evidence",
            EvidenceTier::Tier2 => "Limited RCTs, emerging evidence, requires more research",
            EvidenceTier::Tier3 => "Case series, preliminary studies, insufficient evidence",
            EvidenceTier::Unrecognized => "Evidence level not recognized",
        }
    }
}
