// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Domain layer: the exam model handed over by the content provider and the
//! block model the builders produce.

pub mod document;
pub mod exam;

pub use document::{Alignment, Block, HeadingLevel, Paragraph, Table, TableCell, TableRow, TextRun};
pub use exam::{ExamPackage, ExamSection, Question, QuestionAnalysis};
