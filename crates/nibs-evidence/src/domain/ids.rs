//! Disorder and modality identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::EvidenceError;

/// Unique identifier for each disorder in the evidence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisorderId {
    /// Major Depressive Disorder
    Depression,
    /// Obsessive-Compulsive Disorder
    Ocd,
    /// Stroke rehabilitation, motor recovery
    Stroke,
    /// Neuropathic pain and fibromyalgia
    ChronicPain,
    /// Post-Traumatic Stress Disorder
    Ptsd,
    /// Schizophrenia, auditory hallucinations
    Schizophrenia,
}

impl DisorderId {
    /// All disorder IDs in picker order.
    pub const ALL: [DisorderId; 6] = [
        DisorderId::Depression,
        DisorderId::Ocd,
        DisorderId::Stroke,
        DisorderId::ChronicPain,
        DisorderId::Ptsd,
        DisorderId::Schizophrenia,
    ];

    /// Get the external identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisorderId::Depression => "depression",
            DisorderId::Ocd => "ocd",
            DisorderId::Stroke => "stroke",
            DisorderId::ChronicPain => "chronicPain",
            DisorderId::Ptsd => "ptsd",
            DisorderId::Schizophrenia => "schizophrenia",
        }
    }

    /// Get the label shown in the disorder picker.
    ///
    /// Must stay equal to the store record's `display_name`.
    pub fn label(&self) -> &'static str {
        match self {
            DisorderId::Depression => "Major Depressive Disorder",
            DisorderId::Ocd => "Obsessive-Compulsive Disorder",
            DisorderId::Stroke => "Stroke Rehabilitation (Motor Recovery)",
            DisorderId::ChronicPain => "Chronic Pain (Neuropathic/Fibromyalgia)",
            DisorderId::Ptsd => "Post-Traumatic Stress Disorder",
            DisorderId::Schizophrenia => "Schizophrenia (Auditory Hallucinations)",
        }
    }

    /// Position in picker order (0-based).
    pub fn index(&self) -> usize {
        match self {
            DisorderId::Depression => 0,
            DisorderId::Ocd => 1,
            DisorderId::Stroke => 2,
            DisorderId::ChronicPain => 3,
            DisorderId::Ptsd => 4,
            DisorderId::Schizophrenia => 5,
        }
    }

    /// Get the keyboard shortcut for this disorder.
    pub fn hotkey(&self) -> char {
        (b'1' + self.index() as u8) as char
    }

    /// Get disorder by hotkey.
    pub fn from_hotkey(key: char) -> Option<DisorderId> {
        match key {
            '1' => Some(DisorderId::Depression),
            '2' => Some(DisorderId::Ocd),
            '3' => Some(DisorderId::Stroke),
            '4' => Some(DisorderId::ChronicPain),
            '5' => Some(DisorderId::Ptsd),
            '6' => Some(DisorderId::Schizophrenia),
            _ => None,
        }
    }
}

impl fmt::Display for DisorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisorderId {
    type Err = EvidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisorderId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EvidenceError::UnknownDisorder(s.to_string()))
    }
}

/// Stimulation modality identifier used as the evidence map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalityId {
    /// Repetitive Transcranial Magnetic Stimulation
    Rtms,
    /// Theta Burst Stimulation
    Tbs,
    /// Transcranial Direct Current Stimulation
    Tdcs,
}

impl ModalityId {
    pub const ALL: [ModalityId; 3] = [ModalityId::Rtms, ModalityId::Tbs, ModalityId::Tdcs];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalityId::Rtms => "rtms",
            ModalityId::Tbs => "tbs",
            ModalityId::Tdcs => "tdcs",
        }
    }
}

impl fmt::Display for ModalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modality filter applied to the report's evidence cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalityFilter {
    /// Show every modality recorded for the disorder.
    #[default]
    All,
    /// Show a single modality.
    Only(ModalityId),
}

impl ModalityFilter {
    /// The fixed global option list, in dropdown order.
    pub const OPTIONS: [ModalityFilter; 4] = [
        ModalityFilter::All,
        ModalityFilter::Only(ModalityId::Rtms),
        ModalityFilter::Only(ModalityId::Tbs),
        ModalityFilter::Only(ModalityId::Tdcs),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalityFilter::All => "all",
            ModalityFilter::Only(id) => id.as_str(),
        }
    }

    /// Get the option label.
    pub fn label(&self) -> &'static str {
        match self {
            ModalityFilter::All => "All Modalities",
            ModalityFilter::Only(ModalityId::Rtms) => "rTMS only",
            ModalityFilter::Only(ModalityId::Tbs) => "Theta Burst Stimulation only",
            ModalityFilter::Only(ModalityId::Tdcs) => "tDCS only",
        }
    }

    /// Check whether a modality key passes this filter.
    pub fn matches(&self, modality: ModalityId) -> bool {
        match self {
            ModalityFilter::All => true,
            ModalityFilter::Only(id) => *id == modality,
        }
    }

    /// Get the keyboard shortcut for this option.
    pub fn hotkey(&self) -> char {
        match self {
            ModalityFilter::All => 'a',
            ModalityFilter::Only(ModalityId::Rtms) => 'r',
            ModalityFilter::Only(ModalityId::Tbs) => 't',
            ModalityFilter::Only(ModalityId::Tdcs) => 'd',
        }
    }

    /// Get filter option by hotkey.
    pub fn from_hotkey(key: char) -> Option<ModalityFilter> {
        match key {
            'a' | 'A' => Some(ModalityFilter::All),
            'r' | 'R' => Some(ModalityFilter::Only(ModalityId::Rtms)),
            't' | 'T' => Some(ModalityFilter::Only(ModalityId::Tbs)),
            'd' | 'D' => Some(ModalityFilter::Only(ModalityId::Tdcs)),
            _ => None,
        }
    }
}

impl fmt::Display for ModalityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalityFilter {
    type Err = EvidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalityFilter::OPTIONS
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| EvidenceError::UnknownModality(s.to_string()))
    }
}

impl Serialize for ModalityFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
