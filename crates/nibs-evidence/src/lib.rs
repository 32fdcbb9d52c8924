//! # NIBS Evidence
//!
//! Evidence lookup and report generation for non-invasive brain stimulation
//! (NIBS) treatment options across six neuropsychiatric disorders.
//!
//! ## Architecture
//!
//! The crate follows a ports-and-adapters split:
//!
//! - **Domain Layer** (`domain/`): identifiers, evidence records and the
//!   classification helpers used for colour-coding. No I/O.
//! - **Store Layer** (`store/`): the bundled, compile-time-constant evidence
//!   table and `StaticEvidenceStore`.
//! - **Ports Layer** (`ports/`): `EvidenceLookup`, the read-only API the
//!   controller and renderer depend on.
//! - **Service Layer** (`service/`): `SelectionController` (the two-screen
//!   state machine) and `ReportRenderer`.
//! - **Format Layer** (`format/`): printable plain-text and JSON renderings of
//!   a `Report`.
//!
//! ```text
//! ┌──────────────┐   lookup    ┌───────────────────┐   Report   ┌──────────┐
//! │ EvidenceStore│ ──────────► │  ReportRenderer   │ ─────────► │  format  │
//! └──────────────┘             └───────────────────┘            └──────────┘
//!                                        ▲
//!                        (disorder, filter, screen)
//!                                        │
//!                             ┌───────────────────┐
//!                             │SelectionController│
//!                             └───────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use nibs_evidence::{
//!     DisorderId, ModalityFilter, ReportRenderer, SelectionController, StaticEvidenceStore,
//! };
//!
//! let store = StaticEvidenceStore::new();
//! let mut controller = SelectionController::new();
//! controller.select_disorder(DisorderId::Depression);
//! controller.select_modality(ModalityFilter::All).unwrap();
//! controller.generate_report().unwrap();
//!
//! let renderer = ReportRenderer::new(&store);
//! let report = renderer.render_selection(&controller).unwrap();
//! assert_eq!(report.cards.len(), 3);
//! ```

pub mod domain;
pub mod error;
pub mod format;
pub mod ports;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use domain::{
    classify_efficacy, classify_evidence_level, DisorderId, DisorderRecord, EfficacyClass,
    EvidenceTier, ModalityFilter, ModalityId, ModalityRecord, REMISSION_NOT_APPLICABLE,
};
pub use error::EvidenceError;
pub use format::ReportFormat;
pub use ports::EvidenceLookup;
pub use service::{
    EvidenceCard, LegendEntry, Report, ReportAction, ReportHeader, ReportRenderer, Screen,
    SelectionConfig, SelectionController,
};
pub use store::StaticEvidenceStore;
