// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Qualitative analysis report: package narrative, then a per-question grid.

use crate::config::ExportConfig;
use crate::models::{Block, ExamPackage, Paragraph, Table, TextRun};

pub const ANALYSIS_HEADER: [&str; 4] = ["No", "Validitas Isi", "Konstruksi", "Bahasa"];

/// Build the analysis report.
///
/// The "No" column is each entry's own `question_no`, copied verbatim; it is
/// never recomputed from list position.
pub fn build_analysis(exam: &ExamPackage, config: &ExportConfig) -> Vec<Block> {
    let mut table = Table::with_header(config.analysis_columns.clone(), &ANALYSIS_HEADER);
    for qa in &exam.question_analyses {
        table.push_row([
            qa.question_no.to_string(),
            qa.validity.clone(),
            qa.construction.clone(),
            qa.language.clone(),
        ]);
    }

    vec![
        Paragraph::new()
            .run(TextRun::new("1. RINGKASAN UMUM").bold())
            .spacing(Some(200), Some(100))
            .into(),
        Paragraph::text(exam.qualitative_analysis.as_str())
            .spacing(None, Some(400))
            .into(),
        Paragraph::new()
            .run(TextRun::new("2. ANALISIS BUTIR SOAL").bold())
            .spacing(Some(200), Some(200))
            .into(),
        table.into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionAnalysis;

    fn analysis(no: u32) -> QuestionAnalysis {
        QuestionAnalysis {
            question_no: no,
            validity: format!("valid {no}"),
            construction: "jelas".into(),
            language: "baku".into(),
        }
    }

    #[test]
    fn narrative_precedes_grid() {
        let exam = ExamPackage {
            qualitative_analysis: "Paket soal seimbang.".into(),
            question_analyses: vec![analysis(1)],
            ..Default::default()
        };
        let blocks = build_analysis(&exam, &ExportConfig::default());

        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].as_paragraph().unwrap().plain_text(), "1. RINGKASAN UMUM");
        assert_eq!(blocks[1].as_paragraph().unwrap().plain_text(), "Paket soal seimbang.");
        assert!(blocks[3].as_table().is_some());
    }

    #[test]
    fn no_column_uses_question_no_verbatim() {
        let exam = ExamPackage {
            question_analyses: vec![analysis(7), analysis(3), analysis(3)],
            ..Default::default()
        };
        let blocks = build_analysis(&exam, &ExportConfig::default());
        let table = blocks[3].as_table().unwrap();

        assert_eq!(table.rows.len(), 4);
        let numbers: Vec<_> = table.body_rows().map(|r| r.texts()[0].clone()).collect();
        assert_eq!(numbers, ["7", "3", "3"]);
        assert_eq!(table.rows[1].texts(), ["7", "valid 7", "jelas", "baku"]);
    }

    #[test]
    fn empty_analyses_give_header_only_grid() {
        let blocks = build_analysis(&ExamPackage::default(), &ExportConfig::default());
        let table = blocks[3].as_table().unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.header().unwrap().texts(), ANALYSIS_HEADER);
    }
}
