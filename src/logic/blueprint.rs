// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Blueprint ("kisi-kisi") grid: one row per question in flattened order.

use crate::config::ExportConfig;
use crate::logic::numbering::{NumberingMode, number_questions};
use crate::models::{Block, ExamPackage, Table};

pub const BLUEPRINT_HEADER: [&str; 4] = ["No", "Kompetensi/Indikator", "Materi", "Level"];

/// Build the blueprint table.
///
/// Numbers are global positions across all sections, not the per-section
/// numbers used on the question sheet. An exam without questions yields a
/// header-only grid.
pub fn build_blueprint(exam: &ExamPackage, config: &ExportConfig) -> Vec<Block> {
    let mut table = Table::with_header(config.blueprint_columns.clone(), &BLUEPRINT_HEADER);

    for item in number_questions(&exam.sections, NumberingMode::Flattened) {
        let q = item.question;
        table.push_row([
            item.number.to_string(),
            q.competency.clone(),
            q.material.clone(),
            q.cognitive_level.clone(),
        ]);
    }

    vec![Block::Table(table)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamSection, Question};

    fn question(competency: &str) -> Question {
        Question {
            competency: competency.into(),
            material: format!("materi {competency}"),
            cognitive_level: "L2".into(),
            ..Default::default()
        }
    }

    fn table(blocks: &[Block]) -> &Table {
        assert_eq!(blocks.len(), 1);
        blocks[0].as_table().expect("blueprint is a table")
    }

    #[test]
    fn rows_are_numbered_across_sections() {
        let exam = ExamPackage {
            sections: vec![
                ExamSection {
                    title: "Pilihan Ganda".into(),
                    questions: vec![question("k1"), question("k2")],
                    ..Default::default()
                },
                ExamSection {
                    title: "Essay".into(),
                    questions: vec![question("k3")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let blocks = build_blueprint(&exam, &ExportConfig::default());
        let table = table(&blocks);

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.header().unwrap().texts(), BLUEPRINT_HEADER);
        let numbers: Vec<_> = table.body_rows().map(|r| r.texts()[0].clone()).collect();
        assert_eq!(numbers, ["1", "2", "3"]);
        assert_eq!(
            table.rows[3].texts(),
            ["3", "k3", "materi k3", "L2"]
        );
    }

    #[test]
    fn empty_sections_give_header_only_grid() {
        let blocks = build_blueprint(&ExamPackage::default(), &ExportConfig::default());
        let table = table(&blocks);

        assert_eq!(table.rows.len(), 1);
        assert!(table.header().is_some());
    }

    #[test]
    fn column_widths_come_from_config() {
        let config = ExportConfig {
            blueprint_columns: vec![10, 40, 30, 20],
            ..Default::default()
        };
        let blocks = build_blueprint(&ExamPackage::default(), &config);
        assert_eq!(table(&blocks).column_widths, [10, 40, 30, 20]);
    }
}
