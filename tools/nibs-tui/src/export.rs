//! Print/export of the current report.
//!
//! The TUI writes a file per export; headless mode prints to stdout and
//! leaves printing to the host.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nibs_evidence::{EvidenceError, Report, ReportFormat};
use thiserror::Error;
use tracing::info;

/// Errors raised while exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to write report to output: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to render report: {0}")]
    Render(#[from] EvidenceError),
}

/// File name for an exported report: `nibs-report-{disorder}-{YYYYmmdd-HHMMSS}.{ext}`.
pub fn export_file_name(report: &Report, format: ReportFormat) -> String {
    format!(
        "nibs-report-{}-{}.{}",
        report.header.disorder,
        report.header.generated_at.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

/// Write a report into `dir`, returning the path written.
pub fn export_report(
    report: &Report,
    dir: &Path,
    format: ReportFormat,
) -> Result<PathBuf, ExportError> {
    let body = format.render(report)?;

    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(report, format));
    fs::write(&path, body).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        disorder = %report.header.disorder,
        format = %format,
        "Report exported"
    );
    Ok(path)
}

/// Write a report to an output stream.
pub fn print_report(
    report: &Report,
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<(), ExportError> {
    let body = format.render(report)?;
    out.write_all(body.as_bytes())?;
    if !body.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
