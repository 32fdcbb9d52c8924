//! # NIBS Selector Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── evidence.rs   # Store, classification and report-card properties
//!     └── flows.rs      # Selection → report → back/export flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p nibs-tests
//! cargo test -p nibs-tests integration::flows::
//! ```

pub mod integration;
