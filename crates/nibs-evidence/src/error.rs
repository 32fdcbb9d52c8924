//! Error types for the evidence crate

use thiserror::Error;

use crate::domain::{DisorderId, ModalityId};

/// Errors raised by selection, parsing and report formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvidenceError {
    #[error("No disorder selected")]
    NoDisorderSelected,

    #[error("Unknown disorder identifier: {0}")]
    UnknownDisorder(String),

    #[error("Unknown modality filter: {0}")]
    UnknownModality(String),

    #[error("Modality {modality} is not available for {disorder}")]
    ModalityUnavailable {
        disorder: DisorderId,
        modality: ModalityId,
    },

    #[error("Unknown report format: {0} (expected text or json)")]
    UnknownFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EvidenceError {
    fn from(err: serde_json::Error) -> Self {
        EvidenceError::Serialization(err.to_string())
    }
}
