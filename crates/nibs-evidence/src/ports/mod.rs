//! Ports Layer - trait definitions
//!
//! `EvidenceLookup` is the read-only driving port the selection controller
//! and report renderer depend on. `StaticEvidenceStore` is the only adapter;
//! tests substitute their own tables through the same trait.

use crate::domain::{DisorderId, DisorderRecord};

/// Read-only access to the evidence table.
pub trait EvidenceLookup {
    /// Look up a disorder by its typed identifier.
    fn lookup(&self, id: DisorderId) -> Option<&DisorderRecord>;

    /// All disorder records in picker order.
    fn disorders(&self) -> &[DisorderRecord];

    /// Look up a disorder by its external string key.
    ///
    /// Unknown keys are silently absent.
    fn lookup_key(&self, key: &str) -> Option<&DisorderRecord> {
        let found = self.disorders().iter().find(|record| record.id.as_str() == key);
        if found.is_none() {
            tracing::debug!(key, "Lookup of unknown disorder key");
        }
        found
    }

    /// Number of modalities recorded for a disorder (0 if absent).
    fn modality_count(&self, id: DisorderId) -> usize {
        self.lookup(id).map(|record| record.modalities.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModalityFilter, ModalityId, ModalityRecord};
    use crate::error::EvidenceError;
    use crate::format::render_text;
    use crate::service::{ReportRenderer, SelectionController};
    use crate::store::DISORDERS;

    /// Table holding only the PTSD record.
    struct PtsdOnly;

    impl EvidenceLookup for PtsdOnly {
        fn lookup(&self, id: DisorderId) -> Option<&DisorderRecord> {
            self.disorders().iter().find(|record| record.id == id)
        }

        fn disorders(&self) -> &[DisorderRecord] {
            &DISORDERS[4..5]
        }
    }

    static BARE_MODALITIES: [(ModalityId, ModalityRecord); 1] = [(
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Low",
            effect_size: "0.10-0.20",
            fda_approved: false,
            evidence_level: "Level 3",
            response_rate: "15-20%",
            remission_rate: "N/A",
            sessions: "10 sessions",
            protocol: "2 mA anodal F3",
            frequency: "Daily",
            references: "Pilot data",
            contraindications: &[],
            notes: "Single pilot study.",
        },
    )];

    static BARE_TABLE: [DisorderRecord; 1] = [DisorderRecord {
        id: DisorderId::Ptsd,
        display_name: "Post-Traumatic Stress Disorder",
        modalities: &BARE_MODALITIES,
    }];

    /// Table whose only record lists no contraindications.
    struct BareTable;

    impl EvidenceLookup for BareTable {
        fn lookup(&self, id: DisorderId) -> Option<&DisorderRecord> {
            self.disorders().iter().find(|record| record.id == id)
        }

        fn disorders(&self) -> &[DisorderRecord] {
            &BARE_TABLE
        }
    }

    #[test]
    fn test_empty_contraindications_hidden() {
        let report = ReportRenderer::new(&BareTable)
            .render_now(DisorderId::Ptsd, ModalityFilter::All)
            .unwrap();
        assert_eq!(report.cards.len(), 1);
        assert!(report.cards[0].contraindications().is_none());
        assert!(report.cards[0].remission().is_none());

        let text = render_text(&report);
        assert!(text.contains("Pilot data"));
        assert!(!text.contains("Contraindications:"));
    }

    #[test]
    fn test_default_methods_on_custom_table() {
        let table = PtsdOnly;
        assert_eq!(table.modality_count(DisorderId::Ptsd), 2);
        assert_eq!(table.modality_count(DisorderId::Depression), 0);
        assert!(table.lookup_key("ptsd").is_some());
        assert!(table.lookup_key("depression").is_none());
    }

    #[test]
    fn test_renderer_over_custom_table() {
        let table = PtsdOnly;
        let renderer = ReportRenderer::new(&table);
        assert!(renderer
            .render_now(DisorderId::Ptsd, ModalityFilter::All)
            .is_some());

        let mut controller = SelectionController::new();
        controller.select_disorder(DisorderId::Ocd);
        assert_eq!(
            renderer.render_selection(&controller),
            Err(EvidenceError::UnknownDisorder("ocd".to_string()))
        );
    }
}
