//! Report Renderer - evidence report for a (disorder, filter) pair.
//!
//! A report is assembled in document order:
//!
//! 1. Header (disorder name, subtitle, generation time)
//! 2. Clinical note
//! 3. One evidence card per modality that passes the filter
//! 4. Evidence-level legend
//! 5. Actions (print/export, back)
//! 6. Disclaimer and data sources
//!
//! A filter the disorder has no record for yields zero cards; every static
//! block is still present.

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use super::selection::SelectionController;
use crate::domain::{
    classify_efficacy, classify_evidence_level, DisorderId, DisorderRecord, EfficacyClass,
    EvidenceTier, ModalityFilter, ModalityId, ModalityRecord,
};
use crate::error::EvidenceError;
use crate::ports::EvidenceLookup;

pub const REPORT_SUBTITLE: &str = "Non-Invasive Brain Stimulation Treatment Options";

pub const CLINICAL_NOTE: &str = "This report summarizes current evidence for NIBS modalities. \
Treatment selection should consider individual patient factors, contraindications, availability, \
and cost. Always verify latest clinical guidelines and regulatory status.";

pub const DISCLAIMER: &str = "This tool provides evidence-based information for educational and \
clinical reference purposes. It does not constitute medical advice. Treatment decisions should be \
made by qualified healthcare professionals considering individual patient circumstances, latest \
research, regulatory approvals, and clinical guidelines.";

pub const DATA_SOURCES: &str = "Evidence compiled from peer-reviewed meta-analyses, systematic \
reviews, and randomized controlled trials published through 2024. Effect sizes represent Cohen's d \
from meta-analytic estimates. FDA approval status accurate as of 2024.";

/// Report header block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportHeader {
    pub disorder: DisorderId,
    pub disorder_name: &'static str,
    pub subtitle: &'static str,
    /// Read from the host clock at render time.
    pub generated_at: DateTime<Local>,
}

impl ReportHeader {
    pub fn title(&self) -> String {
        format!("Evidence Report: {}", self.disorder_name)
    }
}

/// One modality's evidence card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceCard {
    pub modality: ModalityId,
    pub record: &'static ModalityRecord,
    pub fda_cleared: bool,
    pub efficacy_class: EfficacyClass,
    pub evidence_tier: EvidenceTier,
}

impl EvidenceCard {
    fn new(modality: ModalityId, record: &'static ModalityRecord) -> Self {
        Self {
            modality,
            record,
            fda_cleared: record.fda_approved,
            efficacy_class: classify_efficacy(record.efficacy),
            evidence_tier: classify_evidence_level(record.evidence_level),
        }
    }

    /// Remission rate, hidden when not reported.
    pub fn remission(&self) -> Option<&'static str> {
        self.record
            .has_remission_rate()
            .then_some(self.record.remission_rate)
    }

    /// Contraindications block, hidden when the list is empty.
    pub fn contraindications(&self) -> Option<&'static [&'static str]> {
        (!self.record.contraindications.is_empty()).then_some(self.record.contraindications)
    }

    /// "{sessions} ({frequency})"
    pub fn duration(&self) -> String {
        format!("{} ({})", self.record.sessions, self.record.frequency)
    }
}

/// Legend row mapping a tier to its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub tier: EvidenceTier,
    pub label: &'static str,
    pub meaning: &'static str,
}

impl LegendEntry {
    /// The four legend rows, strongest tier first.
    pub fn all() -> Vec<LegendEntry> {
        EvidenceTier::LEGEND
            .into_iter()
            .map(|tier| LegendEntry {
                tier,
                label: tier.label(),
                meaning: tier.meaning(),
            })
            .collect()
    }
}

/// Actions offered at the foot of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportAction {
    /// Hand the report to the host's print/export facility.
    PrintExport,
    /// Return to the selection screen.
    Back,
}

impl ReportAction {
    pub const ALL: [ReportAction; 2] = [ReportAction::PrintExport, ReportAction::Back];

    pub fn label(&self) -> &'static str {
        match self {
            ReportAction::PrintExport => "Download/Print Report",
            ReportAction::Back => "Back to Selection",
        }
    }
}

/// A fully assembled evidence report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub header: ReportHeader,
    pub filter: ModalityFilter,
    pub clinical_note: &'static str,
    pub cards: Vec<EvidenceCard>,
    pub legend: Vec<LegendEntry>,
    pub actions: [ReportAction; 2],
    pub disclaimer: &'static str,
    pub data_sources: &'static str,
}

impl Report {
    /// Assemble a report for a disorder record.
    pub fn build(
        record: &DisorderRecord,
        filter: ModalityFilter,
        generated_at: DateTime<Local>,
    ) -> Self {
        let modalities: &'static [(ModalityId, ModalityRecord)] = record.modalities;
        let cards = modalities
            .iter()
            .filter(|(key, _)| filter.matches(*key))
            .map(|(key, modality)| EvidenceCard::new(*key, modality))
            .collect();

        Self {
            header: ReportHeader {
                disorder: record.id,
                disorder_name: record.display_name,
                subtitle: REPORT_SUBTITLE,
                generated_at,
            },
            filter,
            clinical_note: CLINICAL_NOTE,
            cards,
            legend: LegendEntry::all(),
            actions: ReportAction::ALL,
            disclaimer: DISCLAIMER,
            data_sources: DATA_SOURCES,
        }
    }

    /// Whether the filter left no evidence cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Renders reports from an evidence store.
pub struct ReportRenderer<'a, S: EvidenceLookup> {
    store: &'a S,
}

impl<'a, S: EvidenceLookup> ReportRenderer<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Render a report at a given time.
    ///
    /// Returns `None` if the disorder is absent from the store.
    pub fn render(
        &self,
        disorder: DisorderId,
        filter: ModalityFilter,
        generated_at: DateTime<Local>,
    ) -> Option<Report> {
        let record = self.store.lookup(disorder)?;
        let report = Report::build(record, filter, generated_at);
        debug!(
            disorder = %disorder,
            filter = %filter,
            cards = report.cards.len(),
            "Report rendered"
        );
        Some(report)
    }

    /// Render a report stamped with the current local time.
    pub fn render_now(&self, disorder: DisorderId, filter: ModalityFilter) -> Option<Report> {
        self.render(disorder, filter, Local::now())
    }

    /// Render the report for a controller's current selection.
    pub fn render_selection(
        &self,
        controller: &SelectionController,
    ) -> Result<Report, EvidenceError> {
        let disorder = controller
            .selected_disorder()
            .ok_or(EvidenceError::NoDisorderSelected)?;
        self.render_now(disorder, controller.selected_modality())
            .ok_or_else(|| EvidenceError::UnknownDisorder(disorder.to_string()))
    }
}
