//! Selection Controller - the two-screen state machine.
//!
//! ```text
//!            select_disorder / select_modality
//!                 ┌──────────┐
//!                 ▼          │
//!           ┌───────────┐────┘   generate_report   ┌───────────┐
//!   ──────► │ Selecting │ ──────────────────────► │ Reporting │
//!           └───────────┘ ◄────────────────────── └───────────┘
//!                                   back
//! ```
//!
//! Selections survive `back`; only `reset` clears them.

use serde::Serialize;
use tracing::debug;

use crate::domain::{DisorderId, ModalityFilter};
use crate::error::EvidenceError;
use crate::ports::EvidenceLookup;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Screen {
    /// Disorder and modality selection (initial).
    #[default]
    Selecting,
    /// Evidence report for the current selection.
    Reporting,
}

/// Controller behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionConfig {
    /// Offer only the selected disorder's own modalities as filter options.
    ///
    /// Off by default: the fixed global option list is offered and a filter
    /// the disorder lacks produces an empty report.
    pub scope_modality_filter: bool,
}

/// Owns the selection state and the screen flag.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    config: SelectionConfig,
    screen: Screen,
    selected_disorder: Option<DisorderId>,
    selected_modality: ModalityFilter,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> SelectionConfig {
        self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_disorder(&self) -> Option<DisorderId> {
        self.selected_disorder
    }

    pub fn selected_modality(&self) -> ModalityFilter {
        self.selected_modality
    }

    /// Select a disorder.
    ///
    /// In scoped mode a filter the new disorder lacks falls back to `All`.
    pub fn select_disorder_in(&mut self, store: &impl EvidenceLookup, id: DisorderId) {
        self.selected_disorder = Some(id);
        if self.config.scope_modality_filter {
            if let ModalityFilter::Only(modality) = self.selected_modality {
                let available = store
                    .lookup(id)
                    .and_then(|record| record.modality(modality))
                    .is_some();
                if !available {
                    debug!(disorder = %id, modality = %modality, "Resetting filter not offered for disorder");
                    self.selected_modality = ModalityFilter::All;
                }
            }
        }
        debug!(disorder = %id, "Disorder selected");
    }

    /// Select a disorder without consulting a store.
    ///
    /// In scoped mode availability cannot be checked here, so any
    /// single-modality filter falls back to `All`. Use
    /// [`select_disorder_in`](Self::select_disorder_in) to keep a filter the
    /// new disorder does offer.
    pub fn select_disorder(&mut self, id: DisorderId) {
        self.selected_disorder = Some(id);
        if self.config.scope_modality_filter && self.selected_modality != ModalityFilter::All {
            debug!(disorder = %id, "Resetting filter, availability unknown");
            self.selected_modality = ModalityFilter::All;
        }
        debug!(disorder = %id, "Disorder selected");
    }

    /// Set the modality filter (unscoped mode).
    pub fn select_modality(&mut self, filter: ModalityFilter) -> Result<(), EvidenceError> {
        if self.selected_disorder.is_none() {
            return Err(EvidenceError::NoDisorderSelected);
        }
        self.selected_modality = filter;
        debug!(filter = %filter, "Modality filter selected");
        Ok(())
    }

    /// Set the modality filter, honouring the scoping switch.
    pub fn select_modality_in(
        &mut self,
        store: &impl EvidenceLookup,
        filter: ModalityFilter,
    ) -> Result<(), EvidenceError> {
        let disorder = self.selected_disorder.ok_or(EvidenceError::NoDisorderSelected)?;
        if !self.modality_options(store).contains(&filter) {
            if let ModalityFilter::Only(modality) = filter {
                return Err(EvidenceError::ModalityUnavailable { disorder, modality });
            }
        }
        self.select_modality(filter)
    }

    /// Filter options to offer for the current selection.
    ///
    /// Empty until a disorder is selected.
    pub fn modality_options(&self, store: &impl EvidenceLookup) -> Vec<ModalityFilter> {
        let Some(disorder) = self.selected_disorder else {
            return Vec::new();
        };
        if !self.config.scope_modality_filter {
            return ModalityFilter::OPTIONS.to_vec();
        }
        let mut options = vec![ModalityFilter::All];
        if let Some(record) = store.lookup(disorder) {
            options.extend(record.modality_ids().map(ModalityFilter::Only));
        }
        options
    }

    /// Advance the filter to the next offered option, wrapping around.
    pub fn cycle_modality(&mut self, store: &impl EvidenceLookup) -> Result<(), EvidenceError> {
        let options = self.modality_options(store);
        if options.is_empty() {
            return Err(EvidenceError::NoDisorderSelected);
        }
        let current = options
            .iter()
            .position(|option| *option == self.selected_modality)
            .unwrap_or(0);
        let next = options[(current + 1) % options.len()];
        self.select_modality(next)
    }

    /// Whether the generate action is enabled.
    pub fn can_generate(&self) -> bool {
        self.selected_disorder.is_some()
    }

    /// Move to the report screen.
    pub fn generate_report(&mut self) -> Result<(), EvidenceError> {
        let disorder = self.selected_disorder.ok_or(EvidenceError::NoDisorderSelected)?;
        self.screen = Screen::Reporting;
        debug!(disorder = %disorder, filter = %self.selected_modality, "Report requested");
        Ok(())
    }

    /// Return to the selection screen, keeping the selection.
    pub fn back(&mut self) {
        self.screen = Screen::Selecting;
        debug!("Back to selection");
    }

    /// Clear the selection and return to the selection screen.
    pub fn reset(&mut self) {
        self.screen = Screen::Selecting;
        self.selected_disorder = None;
        self.selected_modality = ModalityFilter::All;
        debug!("Selection reset");
    }
}
