//! Service Layer - selection state machine and report rendering

pub mod report;
pub mod selection;

pub use report::{
    EvidenceCard, LegendEntry, Report, ReportAction, ReportHeader, ReportRenderer, CLINICAL_NOTE,
    DATA_SOURCES, DISCLAIMER, REPORT_SUBTITLE,
};
pub use selection::{Screen, SelectionConfig, SelectionController};
