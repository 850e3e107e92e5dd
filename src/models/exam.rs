// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Exam package model as delivered by the upstream content provider.
//!
//! Keys are camelCase on the wire. Lists default to empty and free-text fields
//! default to empty strings so a partially filled package still deserializes;
//! the adapter decides what is fatal.

use serde::{Deserialize, Deserializer, Serialize};

/// The complete generated exam plus its analyses; the unit of export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamPackage {
    pub title: String,
    pub subject: String,
    pub grade: String,
    /// Package-level narrative analysis.
    pub qualitative_analysis: String,
    pub question_analyses: Vec<QuestionAnalysis>,
    pub sections: Vec<ExamSection>,
}

impl ExamPackage {
    /// Number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

/// A grouping of questions; identified only by its position in the package.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamSection {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    /// Opaque key; never rendered.
    pub id: String,
    pub text: String,
    /// Present and non-empty for multiple choice, absent or empty for essays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    pub discussion: String,
    pub cognitive_level: String,
    pub material: String,
    pub competency: String,
}

impl Question {
    /// Options to render; empty for open-response questions.
    pub fn choices(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub fn is_multiple_choice(&self) -> bool {
        !self.choices().is_empty()
    }
}

/// Per-question qualitative commentary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionAnalysis {
    /// 1-based ordinal as reported upstream; not checked against position.
    #[serde(deserialize_with = "deserialize_question_no")]
    pub question_no: u32,
    pub validity: String,
    pub construction: String,
    pub language: String,
}

/// Accept `3` as well as `3.0`; the provider's schema types this as a JSON number.
fn deserialize_question_no<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 || raw > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "questionNo must be a non-negative whole number, got {raw}"
        )));
    }
    Ok(raw as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_default_to_empty() {
        let exam: ExamPackage =
            serde_json::from_str(r#"{"title":"T","subject":"S","grade":"XII"}"#).unwrap();

        assert!(exam.sections.is_empty());
        assert!(exam.question_analyses.is_empty());
        assert_eq!(exam.qualitative_analysis, "");
        assert_eq!(exam.question_count(), 0);
    }

    #[test]
    fn question_no_accepts_integral_floats() {
        let qa: QuestionAnalysis = serde_json::from_str(
            r#"{"questionNo":3.0,"validity":"v","construction":"c","language":"l"}"#,
        )
        .unwrap();
        assert_eq!(qa.question_no, 3);
    }

    #[test]
    fn question_no_rejects_fractions_and_negatives() {
        assert!(serde_json::from_str::<QuestionAnalysis>(r#"{"questionNo":1.5}"#).is_err());
        assert!(serde_json::from_str::<QuestionAnalysis>(r#"{"questionNo":-1}"#).is_err());
    }

    #[test]
    fn absent_and_empty_options_are_both_essays() {
        let absent: Question = serde_json::from_str(r#"{"text":"Jelaskan!"}"#).unwrap();
        let empty: Question = serde_json::from_str(r#"{"text":"Jelaskan!","options":[]}"#).unwrap();

        assert_eq!(absent.options, None);
        assert!(!absent.is_multiple_choice());
        assert!(!empty.is_multiple_choice());
        assert!(empty.choices().is_empty());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let q: Question = serde_json::from_str(
            r#"{"id":"q1","text":"2+2=?","options":["3","4"],"answer":"B","discussion":"d",
                "cognitiveLevel":"L1","material":"Aritmetika","competency":"Menghitung"}"#,
        )
        .unwrap();

        assert_eq!(q.cognitive_level, "L1");
        assert_eq!(q.material, "Aritmetika");
        assert_eq!(q.choices(), ["3".to_string(), "4".to_string()]);
    }
}
