// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Export configuration: boilerplate text, option labels and layout units.
//!
//! Loaded from an optional TOML file; every key has a default matching the
//! stock school header so an empty file (or none) is a valid configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::logic::numbering::OptionLabels;

/// Environment variable overriding `option_labels` (comma separated).
pub const OPTION_LABELS_ENV: &str = "EXAMPACK_OPTION_LABELS";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Centered institutional lines rendered as level-1 headings.
    pub institution_lines: Vec<String>,
    /// Centered line below the institution, e.g. the school year.
    pub period_line: String,
    /// Ordered labels for multiple-choice options.
    pub option_labels: Vec<String>,
    /// Left indent of option lines, in twips.
    pub option_indent: u32,
    /// Left indent of discussion blocks, in twips.
    pub discussion_indent: u32,
    /// Blueprint column widths (No, competency, material, level) in percent.
    pub blueprint_columns: Vec<u32>,
    /// Analysis column widths (No, validity, construction, language) in percent.
    pub analysis_columns: Vec<u32>,
    /// Stored in the document's custom properties.
    pub creator: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            institution_lines: vec![
                "PEMERINTAH PROVINSI DINAS PENDIDIKAN".to_string(),
                "SATUAN PENDIDIKAN SMA NEGERI GENERATOR PRO".to_string(),
            ],
            period_line: "TAHUN PELAJARAN 2024/2025".to_string(),
            option_labels: ["A", "B", "C", "D", "E"].map(String::from).to_vec(),
            option_indent: 720,
            discussion_indent: 360,
            blueprint_columns: vec![8, 44, 32, 16],
            analysis_columns: vec![8, 31, 31, 30],
            creator: "exampack".to_string(),
        }
    }
}

impl ExportConfig {
    /// Load configuration from `path`, or defaults when no path is given,
    /// then apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> ExportResult<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {:?}", path))
                    .map_err(ExportError::Config)?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(OPTION_LABELS_ENV) {
            config.option_labels = parse_label_list(&raw);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> ExportResult<Self> {
        toml::from_str(raw)
            .context("Failed to parse config TOML")
            .map_err(ExportError::Config)
    }

    /// Reject configurations the builders cannot render.
    pub fn validate(&self) -> ExportResult<()> {
        if self.option_labels.is_empty() || self.option_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ExportError::Config(anyhow!(
                "option_labels must contain at least one non-empty label"
            )));
        }
        for (name, columns) in [
            ("blueprint_columns", &self.blueprint_columns),
            ("analysis_columns", &self.analysis_columns),
        ] {
            if columns.len() != 4 {
                return Err(ExportError::Config(anyhow!(
                    "{name} needs exactly 4 widths, got {}",
                    columns.len()
                )));
            }
            let total: u32 = columns.iter().sum();
            if total == 0 || total > 100 {
                return Err(ExportError::Config(anyhow!(
                    "{name} must add up to between 1 and 100 percent, got {total}"
                )));
            }
        }
        Ok(())
    }

    pub fn labels(&self) -> OptionLabels {
        OptionLabels::new(self.option_labels.clone())
    }
}

fn parse_label_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ExportConfig::default();
        config.validate().unwrap();
        assert_eq!(config.labels().len(), 5);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = ExportConfig::from_toml(
            r#"
            period_line = "TAHUN PELAJARAN 2025/2026"
            option_labels = ["A", "B", "C", "D"]
            "#,
        )
        .unwrap();

        assert_eq!(config.period_line, "TAHUN PELAJARAN 2025/2026");
        assert_eq!(config.option_labels.len(), 4);
        assert_eq!(config.option_indent, 720);
        assert_eq!(config.institution_lines.len(), 2);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("exampack.toml");
        fs::write(&path, "creator = \"Tim Kurikulum\"\n").unwrap();

        let config = ExportConfig::load(Some(&path)).unwrap();
        assert_eq!(config.creator, "Tim Kurikulum");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ExportConfig::load(Some(Path::new("/nonexistent/exampack.toml"))).unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            ExportConfig::from_toml("option_indent = \"wide\""),
            Err(ExportError::Config(_))
        ));
    }

    #[test]
    fn empty_label_alphabet_is_rejected() {
        let config = ExportConfig {
            option_labels: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn column_lists_must_have_four_entries() {
        let config = ExportConfig {
            blueprint_columns: vec![50, 50],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn label_list_parsing_trims_and_skips_blanks() {
        assert_eq!(parse_label_list(" a, b ,,c "), ["a", "b", "c"]);
    }
}
