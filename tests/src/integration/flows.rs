//! # Selection Flows
//!
//! Drives the selection controller and the TUI application model through
//! select → generate → back/reset/export, the way a clinician would.

#[cfg(test)]
mod tests {
    use nibs_evidence::{
        DisorderId, EvidenceError, ModalityFilter, ModalityId, ReportFormat, ReportRenderer,
        Screen, SelectionConfig, SelectionController, StaticEvidenceStore,
    };
    use nibs_tui::{print_report, App, AppAction, TuiConfig};

    use super::super::fixed_time;

    fn scoped() -> SelectionConfig {
        SelectionConfig {
            scope_modality_filter: true,
        }
    }

    // =============================================================================
    // CONTROLLER FLOWS
    // =============================================================================

    #[test]
    fn test_generate_disabled_until_disorder_selected() {
        let mut controller = SelectionController::new();
        assert!(!controller.can_generate());
        assert_eq!(
            controller.generate_report(),
            Err(EvidenceError::NoDisorderSelected)
        );
        assert_eq!(controller.screen(), Screen::Selecting);

        controller.select_disorder(DisorderId::Ptsd);
        assert!(controller.can_generate());
        assert!(controller.generate_report().is_ok());
        assert_eq!(controller.screen(), Screen::Reporting);
    }

    #[test]
    fn test_back_then_generate_reproduces_report() {
        let store = StaticEvidenceStore::new();
        let renderer = ReportRenderer::new(&store);
        let mut controller = SelectionController::new();

        controller.select_disorder(DisorderId::ChronicPain);
        controller
            .select_modality(ModalityFilter::Only(ModalityId::Rtms))
            .unwrap();
        controller.generate_report().unwrap();
        let disorder = controller.selected_disorder().unwrap();
        let first = renderer
            .render(disorder, controller.selected_modality(), fixed_time(10, 0))
            .unwrap();

        controller.back();
        assert_eq!(controller.screen(), Screen::Selecting);
        controller.generate_report().unwrap();
        let second = renderer
            .render(disorder, controller.selected_modality(), fixed_time(10, 5))
            .unwrap();

        assert_ne!(first.header.generated_at, second.header.generated_at);
        let mut restamped = second.clone();
        restamped.header.generated_at = first.header.generated_at;
        assert_eq!(first, restamped);
    }

    #[test]
    fn test_filter_survives_disorder_change_when_unscoped() {
        let store = StaticEvidenceStore::new();
        let mut controller = SelectionController::new();

        controller.select_disorder_in(&store, DisorderId::Depression);
        controller
            .select_modality_in(&store, ModalityFilter::Only(ModalityId::Tbs))
            .unwrap();
        controller.select_disorder_in(&store, DisorderId::Ocd);
        assert_eq!(
            controller.selected_modality(),
            ModalityFilter::Only(ModalityId::Tbs)
        );

        let report = ReportRenderer::new(&store)
            .render_selection(&controller)
            .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_scoped_mode_resets_stale_filter() {
        let store = StaticEvidenceStore::new();
        let mut controller = SelectionController::with_config(scoped());

        controller.select_disorder_in(&store, DisorderId::Depression);
        controller
            .select_modality_in(&store, ModalityFilter::Only(ModalityId::Tbs))
            .unwrap();
        controller.select_disorder_in(&store, DisorderId::Ocd);
        assert_eq!(controller.selected_modality(), ModalityFilter::All);
        assert_eq!(
            controller.select_modality_in(&store, ModalityFilter::Only(ModalityId::Tbs)),
            Err(EvidenceError::ModalityUnavailable {
                disorder: DisorderId::Ocd,
                modality: ModalityId::Tbs,
            })
        );
    }

    #[test]
    fn test_reset_returns_to_empty_selection() {
        let mut controller = SelectionController::new();
        controller.select_disorder(DisorderId::Schizophrenia);
        controller
            .select_modality(ModalityFilter::Only(ModalityId::Tdcs))
            .unwrap();
        controller.generate_report().unwrap();

        controller.reset();
        assert_eq!(controller.screen(), Screen::Selecting);
        assert_eq!(controller.selected_disorder(), None);
        assert_eq!(controller.selected_modality(), ModalityFilter::All);
        assert!(!controller.can_generate());
    }

    // =============================================================================
    // FRONT END FLOWS
    // =============================================================================

    #[test]
    fn test_keyboard_session_to_export() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig {
            export_dir: dir.path().join("reports"),
            ..TuiConfig::default()
        };
        let mut app = App::new(config.selection_config());

        // Generate is a no-op until a disorder is picked
        app.handle_key('g');
        assert_eq!(app.screen(), Screen::Selecting);

        app.handle_key('1');
        app.handle_key('r');
        app.handle_key('g');
        assert_eq!(app.screen(), Screen::Reporting);
        assert_eq!(app.current_report().map(|r| r.cards.len()), Some(1));

        let action = app.handle_key('p');
        assert_eq!(action, Some(AppAction::Export));
        app.run_action(AppAction::Export, &config);

        let path = app.last_export.clone().unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Evidence Report: Major Depressive Disorder"));
        assert!(written.contains("Modality filter: rTMS only"));

        app.handle_key('b');
        assert_eq!(app.screen(), Screen::Selecting);
        assert_eq!(app.controller.selected_disorder(), Some(DisorderId::Depression));
    }

    #[test]
    fn test_headless_print_matches_renderer() {
        let store = StaticEvidenceStore::new();
        let report = ReportRenderer::new(&store)
            .render(DisorderId::Ocd, ModalityFilter::All, fixed_time(11, 0))
            .unwrap();

        let mut text = Vec::new();
        print_report(&report, ReportFormat::Text, &mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("Generated: 2024-06-12 11:00"));
        assert!(text.contains("Evidence Level Guide:"));

        let mut json = Vec::new();
        print_report(&report, ReportFormat::Json, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["header"]["disorder"], "ocd");
        assert_eq!(value["cards"].as_array().map(Vec::len), Some(2));
    }
}
