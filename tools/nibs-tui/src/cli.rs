//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use nibs_evidence::{DisorderId, ModalityFilter, ReportFormat};

/// NIBS-TUI: Evidence-Based Treatment Selector
#[derive(Parser, Debug, Clone)]
#[command(name = "nibs-tui")]
#[command(about = "Evidence-based NIBS treatment selector for clinicians")]
pub struct Args {
    /// Disorder to preselect (depression, ocd, stroke, chronicPain, ptsd, schizophrenia)
    #[arg(short, long)]
    pub disorder: Option<DisorderId>,

    /// Modality filter (all, rtms, tbs, tdcs)
    #[arg(short, long, default_value = "all")]
    pub modality: ModalityFilter,

    /// Print the report to stdout and exit (requires --disorder)
    #[arg(long)]
    pub print: bool,

    /// Report format for print/export (text, json)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Directory exported reports are written to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Offer only the selected disorder's own modalities as filter options
    #[arg(long)]
    pub scope_filter: bool,
}
