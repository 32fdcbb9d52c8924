//! Format Layer - printable renderings of a [`Report`].
//!
//! - `text`: plain text laid out like the on-screen report
//! - JSON: `serde_json` pretty serialization of the report structure

mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::EvidenceError;
use crate::service::Report;

pub use text::{render_text, TextReport, GENERATED_AT_FORMAT};

/// Output format for print/export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }

    /// File extension for exported reports.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// Render a report in this format.
    pub fn render(&self, report: &Report) -> Result<String, EvidenceError> {
        match self {
            ReportFormat::Text => Ok(render_text(report)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = EvidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(EvidenceError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisorderId, ModalityFilter};
    use crate::service::ReportRenderer;
    use crate::store::StaticEvidenceStore;

    #[test]
    fn test_parse_format() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(
            "pdf".parse::<ReportFormat>(),
            Err(EvidenceError::UnknownFormat("pdf".to_string()))
        );
    }

    #[test]
    fn test_json_carries_cards_and_keys() {
        let store = StaticEvidenceStore::new();
        let report = ReportRenderer::new(&store)
            .render_now(DisorderId::ChronicPain, ModalityFilter::All)
            .unwrap();

        let json = ReportFormat::Json.render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["header"]["disorder"], "chronicPain");
        assert_eq!(value["filter"], "all");
        let cards = value["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0]["modality"], "rtms");
        assert_eq!(cards[0]["record"]["effect_size"], "0.40-0.55");
        assert_eq!(cards[1]["efficacy_class"], "moderate");
        assert_eq!(cards[1]["evidence_tier"], "Tier2");
    }
}
