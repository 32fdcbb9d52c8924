//! NIBS-TUI: Evidence-Based Treatment Selector
//!
//! A TUI front end for picking a disorder and a stimulation modality filter
//! and reading the resulting evidence report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  NIBS SELECTOR                                  [Q]uit [?]Help   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Selecting: disorder list, modality filter, generate action     │
//! │     ── or ──                                                    │
//! │  Reporting: header, clinical note, evidence cards, legend       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [1-6] Disorder  [Tab] Modality  [Enter] Generate  [P] Print    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! State lives in [`domain::App`], which wraps the evidence crate's
//! `SelectionController`; `ui` only reads it.

pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod logging;
pub mod ui;

pub use cli::Args;
pub use config::TuiConfig;
pub use domain::{App, AppAction, AppState, StatusMessage};
pub use export::{export_report, print_report, ExportError};
pub use logging::{init_logging, LogTarget, LoggingError};
