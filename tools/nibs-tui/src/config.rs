//! Front-end configuration from environment variables and CLI flags.

use std::env;
use std::path::PathBuf;

use nibs_evidence::{ReportFormat, SelectionConfig};

use crate::cli::Args;

/// Runtime configuration for the TUI and headless print mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log file; TUI mode logs nowhere without one
    pub log_file: Option<PathBuf>,

    /// Directory exported reports are written to
    pub export_dir: PathBuf,

    /// Format for print/export
    pub export_format: ReportFormat,

    /// Scope modality filter options to the selected disorder
    pub scope_modality_filter: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            export_dir: PathBuf::from("."),
            export_format: ReportFormat::Text,
            scope_modality_filter: false,
        }
    }
}

impl TuiConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NIBS_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `NIBS_LOG_FILE`: Log file path (default: unset)
    /// - `NIBS_EXPORT_DIR`: Export directory (default: .)
    /// - `NIBS_EXPORT_FORMAT`: text or json (default: text)
    /// - `NIBS_SCOPE_MODALITY_FILTER`: Scope filter options (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_level: var("NIBS_LOG_LEVEL")
                .or_else(|| var("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            log_file: var("NIBS_LOG_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),

            export_dir: var("NIBS_EXPORT_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),

            export_format: var("NIBS_EXPORT_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.export_format),

            scope_modality_filter: var("NIBS_SCOPE_MODALITY_FILTER")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.scope_modality_filter),
        }
    }

    /// Apply CLI overrides on top of the environment.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(path) = &args.log_file {
            self.log_file = Some(path.clone());
        }
        if let Some(dir) = &args.export_dir {
            self.export_dir = dir.clone();
        }
        if let Some(format) = args.format {
            self.export_format = format;
        }
        if args.scope_filter {
            self.scope_modality_filter = true;
        }
    }

    /// Selection controller switches.
    pub fn selection_config(&self) -> SelectionConfig {
        SelectionConfig {
            scope_modality_filter: self.scope_modality_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::from_lookup(lookup(&[]));
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.export_format, ReportFormat::Text);
    }

    #[test]
    fn test_env_overrides() {
        let config = TuiConfig::from_lookup(lookup(&[
            ("RUST_LOG", "debug"),
            ("NIBS_LOG_FILE", "/tmp/nibs.log"),
            ("NIBS_EXPORT_DIR", "/tmp/reports"),
            ("NIBS_EXPORT_FORMAT", "json"),
            ("NIBS_SCOPE_MODALITY_FILTER", "1"),
        ]));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/nibs.log")));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.export_format, ReportFormat::Json);
        assert!(config.scope_modality_filter);
    }

    #[test]
    fn test_nibs_log_level_wins_over_rust_log() {
        let config =
            TuiConfig::from_lookup(lookup(&[("RUST_LOG", "debug"), ("NIBS_LOG_LEVEL", "warn")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let config = TuiConfig::from_lookup(lookup(&[("NIBS_EXPORT_FORMAT", "pdf")]));
        assert_eq!(config.export_format, ReportFormat::Text);
    }

    #[test]
    fn test_args_override_env() {
        let mut config = TuiConfig::from_lookup(lookup(&[
            ("NIBS_EXPORT_DIR", "/tmp/reports"),
            ("NIBS_EXPORT_FORMAT", "json"),
        ]));
        let args = Args::try_parse_from([
            "nibs-tui",
            "--export-dir",
            "out",
            "--format",
            "text",
            "--scope-filter",
        ])
        .unwrap();
        config.apply_args(&args);

        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(config.export_format, ReportFormat::Text);
        assert!(config.selection_config().scope_modality_filter);
    }
}
