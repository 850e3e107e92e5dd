// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Question numbering and option labelling, computed at render time.
//!
//! The blueprint numbers questions across the whole package while the
//! question sheet and answer key restart at 1 in every section. Both views
//! derive their numbers from traversal position here; nothing is stored on
//! the question itself.

use crate::models::{ExamSection, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberingMode {
    /// 1..N over the concatenation of all sections.
    Flattened,
    /// 1..n restarting at the start of every section.
    PerSection,
}

/// A question paired with its display number under some [`NumberingMode`].
#[derive(Clone, Copy, Debug)]
pub struct NumberedQuestion<'a> {
    pub number: usize,
    /// 0-based index of the owning section.
    pub section_index: usize,
    pub question: &'a Question,
}

/// Walk all questions in section order, then in-section order.
pub fn number_questions(
    sections: &[ExamSection],
    mode: NumberingMode,
) -> impl Iterator<Item = NumberedQuestion<'_>> {
    sections
        .iter()
        .enumerate()
        .flat_map(|(section_index, section)| {
            section
                .questions
                .iter()
                .enumerate()
                .map(move |(position, question)| (section_index, position, question))
        })
        .enumerate()
        .map(move |(global, (section_index, position, question))| NumberedQuestion {
            number: match mode {
                NumberingMode::Flattened => global + 1,
                NumberingMode::PerSection => position + 1,
            },
            section_index,
            question,
        })
}

/// Ordered labels for multiple-choice options (A–E unless configured otherwise).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionLabels {
    labels: Vec<String>,
}

impl Default for OptionLabels {
    fn default() -> Self {
        Self::new(["A", "B", "C", "D", "E"].map(String::from).to_vec())
    }
}

impl OptionLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label for the option at `index`; `None` past the end of the alphabet.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
