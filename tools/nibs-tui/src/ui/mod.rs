//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Header, body and footer; picks the panel for the screen
//! - `selection_panel.rs`: Disorder list, modality filter, generate action
//! - `report_panel.rs`: Scrollable evidence report
//! - `theme.rs`: Efficacy and evidence-level colours
//! - `widgets/`: Reusable UI components

mod layout;
mod report_panel;
mod selection_panel;
mod theme;

pub mod widgets;

pub use layout::{render, report_scroll_limit};
pub use report_panel::report_lines;
