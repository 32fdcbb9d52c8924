//! Evidence records.

use serde::Serialize;

use super::{DisorderId, ModalityId};

/// Sentinel stored in `remission_rate` when remission is not reported.
pub const REMISSION_NOT_APPLICABLE: &str = "N/A";

/// One disorder's entry in the evidence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisorderRecord {
    pub id: DisorderId,
    /// Human-readable name used as the report title.
    pub display_name: &'static str,
    /// Modality evidence in display order.
    pub modalities: &'static [(ModalityId, ModalityRecord)],
}

impl DisorderRecord {
    /// Get the evidence record for a modality, if recorded.
    pub fn modality(&self, id: ModalityId) -> Option<&'static ModalityRecord> {
        let modalities: &'static [(ModalityId, ModalityRecord)] = self.modalities;
        modalities
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, record)| record)
    }

    /// Modality keys in display order.
    pub fn modality_ids(&self) -> impl Iterator<Item = ModalityId> + '_ {
        self.modalities.iter().map(|(key, _)| *key)
    }
}

/// A treatment modality's evidence profile for one disorder.
///
/// All fields are display text and are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalityRecord {
    pub name: &'static str,
    /// Free-text efficacy category, e.g. "High" or "Low-Moderate".
    pub efficacy: &'static str,
    /// Cohen's d range, e.g. "0.50-0.70".
    pub effect_size: &'static str,
    pub fda_approved: bool,
    /// One of "Level 1A", "Level 1B", "Level 2", "Level 3".
    pub evidence_level: &'static str,
    pub response_rate: &'static str,
    /// Percentage range or [`REMISSION_NOT_APPLICABLE`].
    pub remission_rate: &'static str,
    pub sessions: &'static str,
    pub protocol: &'static str,
    pub frequency: &'static str,
    pub references: &'static str,
    pub contraindications: &'static [&'static str],
    pub notes: &'static str,
}

impl ModalityRecord {
    /// Whether a remission rate is reported.
    pub fn has_remission_rate(&self) -> bool {
        self.remission_rate != REMISSION_NOT_APPLICABLE
    }
}
