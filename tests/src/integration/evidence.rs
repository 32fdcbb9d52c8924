//! # Evidence Properties
//!
//! Store lookups, classification rules and report cards checked across the
//! whole bundled table.

#[cfg(test)]
mod tests {
    use nibs_evidence::{
        classify_efficacy, classify_evidence_level, format::render_text, DisorderId,
        EfficacyClass, EvidenceLookup, EvidenceTier, ModalityFilter, ModalityId, ReportFormat,
        ReportRenderer, StaticEvidenceStore,
    };

    use super::super::fixed_time;

    // =============================================================================
    // STORE
    // =============================================================================

    #[test]
    fn test_every_disorder_resolves_with_picker_label() {
        let store = StaticEvidenceStore::new();
        for id in DisorderId::ALL {
            let record = store.lookup(id).unwrap();
            assert_eq!(record.id, id);
            assert_eq!(record.display_name, id.label());
        }
        assert_eq!(store.disorders().len(), DisorderId::ALL.len());
    }

    #[test]
    fn test_lookup_key_accepts_wire_ids_only() {
        let store = StaticEvidenceStore::new();
        for id in DisorderId::ALL {
            assert!(store.lookup_key(id.as_str()).is_some());
        }
        assert!(store.lookup_key("Depression").is_none());
        assert!(store.lookup_key("adhd").is_none());
        assert!(store.lookup_key("").is_none());
    }

    // =============================================================================
    // CLASSIFICATION
    // =============================================================================

    #[test]
    fn test_efficacy_first_match_wins() {
        assert_eq!(classify_efficacy("High"), EfficacyClass::High);
        assert_eq!(classify_efficacy("Moderate-High"), EfficacyClass::High);
        assert_eq!(classify_efficacy("Low-Moderate"), EfficacyClass::Moderate);
        assert_eq!(classify_efficacy("Low"), EfficacyClass::Other);
    }

    #[test]
    fn test_evidence_level_exact_match() {
        assert_eq!(classify_evidence_level("Level 1A"), EvidenceTier::Tier1A);
        assert_eq!(classify_evidence_level("Level 4"), EvidenceTier::Unrecognized);
        assert_eq!(classify_evidence_level("level 1a"), EvidenceTier::Unrecognized);
    }

    // =============================================================================
    // REPORT CARDS
    // =============================================================================

    #[test]
    fn test_every_pair_yields_one_verbatim_card() {
        let store = StaticEvidenceStore::new();
        let renderer = ReportRenderer::new(&store);

        for record in store.disorders() {
            for (modality, stored) in record.modalities {
                let report = renderer
                    .render(record.id, ModalityFilter::Only(*modality), fixed_time(9, 0))
                    .unwrap();
                assert_eq!(report.cards.len(), 1, "{} / {}", record.id, modality);

                let card = &report.cards[0];
                assert_eq!(card.modality, *modality);
                assert_eq!(card.record, stored);
                assert_eq!(card.fda_cleared, stored.fda_approved);
                assert_eq!(card.efficacy_class, classify_efficacy(stored.efficacy));
                assert_eq!(
                    card.evidence_tier,
                    classify_evidence_level(stored.evidence_level)
                );

                let text = render_text(&report);
                for field in [
                    stored.name,
                    stored.efficacy,
                    stored.effect_size,
                    stored.evidence_level,
                    stored.response_rate,
                    stored.protocol,
                    stored.references,
                    stored.notes,
                ] {
                    assert!(text.contains(field), "missing {field:?}");
                }
                for item in stored.contraindications {
                    assert!(text.contains(item));
                }
            }
        }
    }

    #[test]
    fn test_card_counts_follow_filter() {
        let store = StaticEvidenceStore::new();
        let renderer = ReportRenderer::new(&store);

        for id in DisorderId::ALL {
            let all = renderer
                .render(id, ModalityFilter::All, fixed_time(9, 0))
                .unwrap();
            assert_eq!(all.cards.len(), store.modality_count(id));

            let record = store.lookup(id).unwrap();
            for modality in ModalityId::ALL {
                let report = renderer
                    .render(id, ModalityFilter::Only(modality), fixed_time(9, 0))
                    .unwrap();
                let expected = usize::from(record.modality(modality).is_some());
                assert_eq!(report.cards.len(), expected, "{id} / {modality}");
            }
        }
    }

    #[test]
    fn test_ocd_tbs_is_empty_but_complete() {
        let store = StaticEvidenceStore::new();
        let report = ReportRenderer::new(&store)
            .render(
                DisorderId::Ocd,
                ModalityFilter::Only(ModalityId::Tbs),
                fixed_time(9, 0),
            )
            .unwrap();

        assert!(report.is_empty());
        assert_eq!(report.header.disorder, DisorderId::Ocd);
        assert_eq!(report.legend.len(), 4);
        assert!(!report.disclaimer.is_empty());
        assert!(!report.data_sources.is_empty());
    }

    #[test]
    fn test_depression_all_order_and_badges() {
        let store = StaticEvidenceStore::new();
        let report = ReportRenderer::new(&store)
            .render(DisorderId::Depression, ModalityFilter::All, fixed_time(9, 0))
            .unwrap();

        let keys: Vec<ModalityId> = report.cards.iter().map(|c| c.modality).collect();
        assert_eq!(keys, vec![ModalityId::Rtms, ModalityId::Tbs, ModalityId::Tdcs]);
        let badges: Vec<bool> = report.cards.iter().map(|c| c.fda_cleared).collect();
        assert_eq!(badges, vec![true, true, false]);
    }

    #[test]
    fn test_json_export_mirrors_cards() {
        let store = StaticEvidenceStore::new();
        let report = ReportRenderer::new(&store)
            .render(DisorderId::Stroke, ModalityFilter::All, fixed_time(9, 0))
            .unwrap();

        let json = ReportFormat::Json.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let cards = value["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0]["modality"], "rtms");
        assert_eq!(value["header"]["disorder"], "stroke");
    }
}
