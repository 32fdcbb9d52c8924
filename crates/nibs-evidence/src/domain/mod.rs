//! Domain Layer - identifiers, evidence records, classification
//!
//! RULES:
//! - No I/O operations
//! - Pure functions only

pub mod classify;
pub mod ids;
pub mod records;

pub use classify::{
    classify_efficacy, classify_evidence_level, EfficacyClass, EvidenceTier, EFFICACY_RULES,
};
pub use ids::{DisorderId, ModalityFilter, ModalityId};
pub use records::{DisorderRecord, ModalityRecord, REMISSION_NOT_APPLICABLE};
