// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Answer key and discussion sheet.

use std::slice;

use crate::config::ExportConfig;
use crate::logic::numbering::{NumberingMode, number_questions};
use crate::models::{Block, ExamPackage, Paragraph, TextRun};

pub const ANSWER_PREFIX: &str = "Jawaban: ";
pub const DISCUSSION_LABEL: &str = "Pembahasan: ";

/// Build the answer key.
///
/// Mirrors the question sheet traversal and its per-section numbering. Every
/// question gets exactly one bold answer line and one indented discussion
/// block, whether or not it has options and even when the strings are empty.
pub fn build_answer_key(exam: &ExamPackage, config: &ExportConfig) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for section in &exam.sections {
        blocks.push(
            Paragraph::new()
                .run(TextRun::new(section.title.as_str()).bold())
                .spacing(Some(200), None)
                .into(),
        );

        for item in number_questions(slice::from_ref(section), NumberingMode::PerSection) {
            let q = item.question;
            blocks.push(
                Paragraph::new()
                    .run(TextRun::new(format!("{}. {ANSWER_PREFIX}{}", item.number, q.answer)).bold())
                    .spacing(Some(200), None)
                    .into(),
            );
            blocks.push(
                Paragraph::new()
                    .run(TextRun::new(DISCUSSION_LABEL).bold().italic())
                    .run(TextRun::new(q.discussion.as_str()))
                    .indent(config.discussion_indent)
                    .into(),
            );
        }
    }

    blocks
}
