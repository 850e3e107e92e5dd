// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Question sheet: section headings, numbered questions and lettered options.

use std::slice;

use tracing::warn;

use crate::config::ExportConfig;
use crate::logic::numbering::{NumberingMode, OptionLabels, number_questions};
use crate::models::{Block, ExamPackage, ExamSection, HeadingLevel, Paragraph, Question, TextRun};

/// Build the question sheet.
///
/// Numbering restarts at 1 in each section. Multiple-choice questions get one
/// indented line per option labelled from the configured alphabet. An option
/// beyond the end of the alphabet is emitted without a label; the export path
/// rejects such packages before this point.
pub fn build_question_sheet(exam: &ExamPackage, config: &ExportConfig) -> Vec<Block> {
    let labels = config.labels();
    let mut blocks: Vec<Block> = Vec::new();

    for section in &exam.sections {
        push_section_heading(&mut blocks, section);
        for item in number_questions(slice::from_ref(section), NumberingMode::PerSection) {
            push_question(&mut blocks, item.number, item.question, &labels, config);
        }
    }

    blocks
}

fn push_section_heading(blocks: &mut Vec<Block>, section: &ExamSection) {
    blocks.push(
        Paragraph::new()
            .heading(HeadingLevel::Heading2)
            .run(TextRun::new(section.title.as_str()).bold().underline())
            .spacing(Some(400), Some(200))
            .into(),
    );
    blocks.push(
        Paragraph::new()
            .run(TextRun::new(section.description.as_str()).italic())
            .spacing(None, Some(200))
            .into(),
    );
}

fn push_question(
    blocks: &mut Vec<Block>,
    number: usize,
    question: &Question,
    labels: &OptionLabels,
    config: &ExportConfig,
) {
    blocks.push(
        Paragraph::text(format!("{number}. {}", question.text))
            .spacing(Some(100), None)
            .into(),
    );

    if !question.is_multiple_choice() {
        return;
    }
    for (index, option) in question.choices().iter().enumerate() {
        let line = match labels.label(index) {
            Some(label) => format!("{label}. {option}"),
            None => {
                warn!(
                    question = number,
                    option = index + 1,
                    "option has no label; emitting it unlabelled"
                );
                option.clone()
            }
        };
        blocks.push(Paragraph::text(line).indent(config.option_indent).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .map(Paragraph::plain_text)
            .collect()
    }

    fn question(text: &str, options: Option<&[&str]>) -> Question {
        Question {
            text: text.into(),
            options: options.map(|o| o.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    fn option_lines(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .filter(|p| p.indent_left.is_some())
            .map(Paragraph::plain_text)
            .collect()
    }

    #[test]
    fn numbering_restarts_in_each_section() {
        let exam = ExamPackage {
            sections: vec![
                ExamSection {
                    title: "Pilihan Ganda".into(),
                    description: "Pilih satu jawaban.".into(),
                    questions: vec![question("a", None), question("b", None)],
                },
                ExamSection {
                    title: "Essay".into(),
                    description: "Jawab dengan uraian.".into(),
                    questions: vec![question("c", None)],
                },
            ],
            ..Default::default()
        };

        let blocks = build_question_sheet(&exam, &ExportConfig::default());

        assert_eq!(
            texts(&blocks),
            [
                "Pilihan Ganda",
                "Pilih satu jawaban.",
                "1. a",
                "2. b",
                "Essay",
                "Jawab dengan uraian.",
                "1. c"
            ]
        );
    }

    #[test]
    fn section_heading_and_description_are_styled() {
        let exam = ExamPackage {
            sections: vec![ExamSection {
                title: "Essay".into(),
                description: "Uraian".into(),
                questions: Vec::new(),
            }],
            ..Default::default()
        };
        let blocks = build_question_sheet(&exam, &ExportConfig::default());
        let heading = blocks[0].as_paragraph().unwrap();
        let description = blocks[1].as_paragraph().unwrap();

        assert_eq!(heading.heading, Some(HeadingLevel::Heading2));
        assert!(heading.runs[0].bold && heading.runs[0].underline);
        assert!(description.runs[0].italic);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn options_are_lettered_in_order() {
        let exam = ExamPackage {
            sections: vec![ExamSection {
                questions: vec![question("Pilih", Some(&["x", "y", "z"]))],
                ..Default::default()
            }],
            ..Default::default()
        };

        let blocks = build_question_sheet(&exam, &ExportConfig::default());
        assert_eq!(option_lines(&blocks), ["A. x", "B. y", "C. z"]);
        let indent = blocks
            .last()
            .and_then(Block::as_paragraph)
            .and_then(|p| p.indent_left);
        assert_eq!(indent, Some(720));
    }

    #[test]
    fn essays_have_no_option_lines() {
        let exam = ExamPackage {
            sections: vec![ExamSection {
                questions: vec![question("Jelaskan", None), question("Uraikan", Some(&[]))],
                ..Default::default()
            }],
            ..Default::default()
        };

        let blocks = build_question_sheet(&exam, &ExportConfig::default());
        assert!(option_lines(&blocks).is_empty());
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn overflow_options_are_emitted_unlabelled() {
        let exam = ExamPackage {
            sections: vec![ExamSection {
                questions: vec![question("Pilih", Some(&["1", "2", "3"]))],
                ..Default::default()
            }],
            ..Default::default()
        };
        let config = ExportConfig {
            option_labels: vec!["A".into(), "B".into()],
            ..Default::default()
        };

        let blocks = build_question_sheet(&exam, &config);
        assert_eq!(option_lines(&blocks), ["A. 1", "B. 2", "3"]);
    }
}
