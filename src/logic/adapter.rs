// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Accept exam packages from the content provider and check their shape.
//!
//! Only required header fields and option counts are fatal. Cross-list
//! mismatches between questions and analyses are reported as warnings and
//! rendered as-is.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::warn;
use uuid::Uuid;

use crate::error::{ExportError, ExportResult};
use crate::logic::numbering::{NumberingMode, OptionLabels, number_questions};
use crate::models::ExamPackage;

/// Decode a provider payload (camelCase JSON).
pub fn parse_exam(json: &str) -> ExportResult<ExamPackage> {
    serde_json::from_str(json)
        .context("Exam package JSON does not match the expected shape")
        .map_err(ExportError::Parse)
}

/// Read and decode a provider payload stored on disk.
pub fn load_exam(path: &Path) -> ExportResult<ExamPackage> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read exam package {:?}", path))
        .map_err(ExportError::Parse)?;
    parse_exam(&raw)
}

/// Give every question without an id a fresh UUID.
pub fn normalize(mut exam: ExamPackage) -> ExamPackage {
    for question in exam.sections.iter_mut().flat_map(|s| s.questions.iter_mut()) {
        if question.id.trim().is_empty() {
            question.id = Uuid::new_v4().to_string();
        }
    }
    exam
}

/// Non-fatal inconsistency found while validating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Flattened question count and analysis count differ.
    AnalysisCountMismatch { questions: usize, analyses: usize },
    /// An analysis entry's `question_no` is not its 1-based position.
    AnalysisNumberMismatch { position: usize, question_no: u32 },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::AnalysisCountMismatch {
                questions,
                analyses,
            } => write!(
                f,
                "{questions} questions but {analyses} question analyses; grids will differ in length"
            ),
            ValidationWarning::AnalysisNumberMismatch {
                position,
                question_no,
            } => write!(
                f,
                "analysis entry {position} is labelled as question {question_no}"
            ),
        }
    }
}

/// Outcome of a successful validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    question_count: usize,
    warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check that `exam` can be rendered.
///
/// # Errors
///
/// - [`ExportError::InvalidModel`] when `title`, `subject` or `grade` is blank.
/// - [`ExportError::TooManyOptions`] when a question has more options than `labels`.
pub fn validate(exam: &ExamPackage, labels: &OptionLabels) -> ExportResult<ValidationReport> {
    for (field, value) in [
        ("title", &exam.title),
        ("subject", &exam.subject),
        ("grade", &exam.grade),
    ] {
        if value.trim().is_empty() {
            return Err(ExportError::InvalidModel(format!("`{field}` must not be empty")));
        }
    }

    for item in number_questions(&exam.sections, NumberingMode::PerSection) {
        let count = item.question.choices().len();
        if count > labels.len() {
            return Err(ExportError::TooManyOptions {
                section: item.section_index + 1,
                question: item.number,
                count,
                max: labels.len(),
            });
        }
    }

    let question_count = exam.question_count();
    let mut warnings = Vec::new();
    if question_count != exam.question_analyses.len() {
        warnings.push(ValidationWarning::AnalysisCountMismatch {
            questions: question_count,
            analyses: exam.question_analyses.len(),
        });
    }
    for (index, qa) in exam.question_analyses.iter().enumerate() {
        let position = index + 1;
        if qa.question_no as usize != position {
            warnings.push(ValidationWarning::AnalysisNumberMismatch {
                position,
                question_no: qa.question_no,
            });
        }
    }

    for warning in &warnings {
        warn!(title = %exam.title, "{warning}");
    }

    Ok(ValidationReport {
        question_count,
        warnings,
    })
}
