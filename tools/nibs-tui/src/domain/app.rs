//! Application state management.

use std::path::PathBuf;

use nibs_evidence::{
    DisorderId, EvidenceError, EvidenceLookup, ModalityFilter, Report, ReportRenderer, Screen,
    SelectionConfig, SelectionController, StaticEvidenceStore,
};
use ratatui::layout::Rect;
use tracing::warn;

use crate::config::TuiConfig;
use crate::export::export_report;
use crate::ui;

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Selection or report screen, per the controller.
    #[default]
    Browsing,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Side effects a key press asks the main loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Write the current report to the export directory.
    Export,
}

/// One-line message shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Evidence table.
    pub store: StaticEvidenceStore,
    /// Selection state and screen flag.
    pub controller: SelectionController,
    /// Vertical scroll offset of the report view.
    pub report_scroll: u16,
    /// Terminal area the UI is drawn into.
    pub viewport: Rect,
    /// Status line text (if any).
    pub status: Option<StatusMessage>,
    /// Path of the most recent export.
    pub last_export: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl App {
    /// Create a new application instance.
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            state: AppState::Browsing,
            store: StaticEvidenceStore::new(),
            controller: SelectionController::with_config(config),
            report_scroll: 0,
            viewport: Rect::new(0, 0, 80, 24),
            status: None,
            last_export: None,
        }
    }

    /// Apply a selection passed on the command line.
    ///
    /// A modality filter needs a disorder to apply to.
    pub fn preselect(
        &mut self,
        disorder: Option<DisorderId>,
        filter: ModalityFilter,
    ) -> Result<(), EvidenceError> {
        let Some(disorder) = disorder else {
            return match filter {
                ModalityFilter::All => Ok(()),
                ModalityFilter::Only(_) => Err(EvidenceError::NoDisorderSelected),
            };
        };
        self.controller.select_disorder_in(&self.store, disorder);
        self.controller.select_modality_in(&self.store, filter)
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    /// Report for the report screen, stamped with the current time.
    ///
    /// Rendered on every call, so each draw shows the time of that draw.
    pub fn current_report(&self) -> Option<Report> {
        if self.screen() != Screen::Reporting {
            return None;
        }
        ReportRenderer::new(&self.store)
            .render_selection(&self.controller)
            .ok()
    }

    /// Record the terminal size and pull the report scroll back into range.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.report_scroll = self.report_scroll.min(self.report_scroll_limit());
    }

    fn report_scroll_limit(&self) -> u16 {
        self.current_report()
            .map(|report| ui::report_scroll_limit(&report, self.viewport))
            .unwrap_or(0)
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: char) -> Option<AppAction> {
        match self.state {
            AppState::Browsing => match self.screen() {
                Screen::Selecting => self.handle_selecting_key(key),
                Screen::Reporting => self.handle_reporting_key(key),
            },
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Browsing;
                None
            }
            AppState::Quit => None,
        }
    }

    fn handle_selecting_key(&mut self, key: char) -> Option<AppAction> {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            '\t' => {
                let result = self.controller.cycle_modality(&self.store);
                self.note_result(result);
            }
            'g' | 'G' => self.confirm(),
            'x' | 'X' => self.reset(),
            c => {
                if let Some(id) = DisorderId::from_hotkey(c) {
                    self.select_disorder(id);
                } else if let Some(filter) = ModalityFilter::from_hotkey(c) {
                    let result = self.controller.select_modality_in(&self.store, filter);
                    self.note_result(result);
                }
            }
        }
        None
    }

    fn handle_reporting_key(&mut self, key: char) -> Option<AppAction> {
        match key {
            'q' | 'Q' => self.state = AppState::Quit,
            '?' => self.state = AppState::Help,
            'b' | 'B' => self.back(),
            'x' | 'X' => self.reset(),
            'p' | 'P' => return Some(AppAction::Export),
            _ => {}
        }
        None
    }

    fn select_disorder(&mut self, id: DisorderId) {
        self.controller.select_disorder_in(&self.store, id);
        self.status = None;
    }

    fn note_result(&mut self, result: Result<(), EvidenceError>) {
        self.status = match result {
            Ok(()) => None,
            Err(EvidenceError::NoDisorderSelected) => {
                Some(StatusMessage::error("Select a disorder first"))
            }
            Err(e) => Some(StatusMessage::error(e.to_string())),
        };
    }

    /// Move selection up, or scroll the report up.
    pub fn select_prev(&mut self) {
        if self.state != AppState::Browsing {
            return;
        }
        match self.screen() {
            Screen::Selecting => {
                let new_idx = match self.controller.selected_disorder() {
                    Some(id) if id.index() > 0 => id.index() - 1,
                    _ => DisorderId::ALL.len() - 1,
                };
                self.select_disorder(DisorderId::ALL[new_idx]);
            }
            Screen::Reporting => self.report_scroll = self.report_scroll.saturating_sub(1),
        }
    }

    /// Move selection down, or scroll the report down.
    pub fn select_next(&mut self) {
        if self.state != AppState::Browsing {
            return;
        }
        match self.screen() {
            Screen::Selecting => {
                let new_idx = match self.controller.selected_disorder() {
                    Some(id) => (id.index() + 1) % DisorderId::ALL.len(),
                    None => 0,
                };
                self.select_disorder(DisorderId::ALL[new_idx]);
            }
            Screen::Reporting => {
                self.report_scroll = self
                    .report_scroll
                    .saturating_add(1)
                    .min(self.report_scroll_limit());
            }
        }
    }

    /// Generate the report for the current selection.
    pub fn confirm(&mut self) {
        if self.state != AppState::Browsing || self.screen() == Screen::Reporting {
            return;
        }
        if let Err(e) = ReportRenderer::new(&self.store).render_selection(&self.controller) {
            self.note_result(Err(e));
            return;
        }
        if let Err(e) = self.controller.generate_report() {
            self.note_result(Err(e));
            return;
        }
        self.report_scroll = 0;
        self.status = None;
    }

    /// Return to the selection screen.
    pub fn back(&mut self) {
        self.controller.back();
        self.report_scroll = 0;
    }

    /// Escape: leave the report, or quit from the selection screen.
    pub fn escape(&mut self) {
        match (self.state, self.screen()) {
            (AppState::Help, _) => self.state = AppState::Browsing,
            (_, Screen::Reporting) => self.back(),
            (_, Screen::Selecting) => self.state = AppState::Quit,
        }
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.report_scroll = 0;
        self.status = Some(StatusMessage::info("Selection cleared"));
    }

    /// Number of modalities recorded for a disorder.
    pub fn modality_count(&self, id: DisorderId) -> usize {
        self.store.modality_count(id)
    }

    /// Filter options to show for the current selection.
    pub fn modality_options(&self) -> Vec<ModalityFilter> {
        self.controller.modality_options(&self.store)
    }

    /// Run a side effect requested by a key press.
    pub fn run_action(&mut self, action: AppAction, config: &TuiConfig) {
        match action {
            AppAction::Export => {
                let Some(report) = self.current_report() else {
                    return;
                };
                match export_report(&report, &config.export_dir, config.export_format) {
                    Ok(path) => {
                        self.status = Some(StatusMessage::info(format!(
                            "Report saved to {}",
                            path.display()
                        )));
                        self.last_export = Some(path);
                    }
                    Err(e) => {
                        warn!(error = %e, "Report export failed");
                        self.status = Some(StatusMessage::error(e.to_string()));
                    }
                }
            }
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}
