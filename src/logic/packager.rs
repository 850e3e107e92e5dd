// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Assemble the four parts into one page flow and serialize it.
//!
//! Order: institutional header, blueprint, qualitative analysis, question
//! sheet, page break, answer key. Export is all-or-nothing: either a complete
//! artifact comes back or an error does, and a failed export never reaches a
//! delivery sink.

use std::path::PathBuf;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::delivery::DeliverySink;
use crate::error::{ExportError, ExportResult};
use crate::logic::adapter::validate;
use crate::logic::analysis::build_analysis;
use crate::logic::answer_key::build_answer_key;
use crate::logic::blueprint::build_blueprint;
use crate::logic::docx::{DOCX_EXTENSION, DocumentMeta, write_docx};
use crate::logic::question_sheet::build_question_sheet;
use crate::models::{Block, ExamPackage, HeadingLevel, Paragraph, TextRun};

pub const BLUEPRINT_HEADING: &str = "KISI-KISI PENULISAN SOAL";
pub const ANALYSIS_HEADING: &str = "ANALISIS KUALITATIF PAKET SOAL";
pub const QUESTION_SHEET_HEADING: &str = "LEMBAR SOAL";
pub const ANSWER_KEY_HEADING: &str = "KUNCI JAWABAN DAN PEMBAHASAN";

/// A serialized exam document ready for delivery.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    /// Suggested file name, see [`suggested_filename`].
    pub filename: String,
    /// Hex SHA-256 of the main document part; equal for equal input.
    pub document_sha256: String,
}

/// Suggest a download name: `{title}_{subject}.docx` with every whitespace
/// run in the title, leading and trailing ones included, replaced by one `_`.
pub fn suggested_filename(exam: &ExamPackage) -> String {
    let mut title = String::with_capacity(exam.title.len());
    let mut in_whitespace = false;
    for ch in exam.title.chars() {
        if !ch.is_whitespace() {
            title.push(ch);
        } else if !in_whitespace {
            title.push('_');
        }
        in_whitespace = ch.is_whitespace();
    }
    format!("{}_{}.{}", title, exam.subject, DOCX_EXTENSION)
}

/// Build the complete block sequence for `exam` without serializing it.
pub fn assemble(exam: &ExamPackage, config: &ExportConfig) -> Vec<Block> {
    let mut blocks = header_blocks(exam, config);

    let parts: [(&str, Vec<Block>, (u32, u32)); 3] = [
        (BLUEPRINT_HEADING, build_blueprint(exam, config), (400, 200)),
        (ANALYSIS_HEADING, build_analysis(exam, config), (800, 200)),
        (QUESTION_SHEET_HEADING, build_question_sheet(exam, config), (800, 400)),
    ];
    for (heading, body, (before, after)) in parts {
        debug!(part = heading, blocks = body.len(), "built document part");
        blocks.push(part_heading(heading, before, after));
        blocks.extend(body);
    }

    let answer_key = build_answer_key(exam, config);
    debug!(part = ANSWER_KEY_HEADING, blocks = answer_key.len(), "built document part");
    blocks.push(Block::PageBreak);
    blocks.push(part_heading(ANSWER_KEY_HEADING, 0, 200));
    blocks.extend(answer_key);

    blocks
}

/// Validate, assemble and serialize `exam`, stamping the current time.
pub fn export(exam: &ExamPackage, config: &ExportConfig) -> ExportResult<Artifact> {
    export_with_timestamp(exam, config, OffsetDateTime::now_utc())
}

/// Like [`export`] with a fixed document timestamp.
///
/// The timestamp only reaches the document properties; the main document
/// part depends on `exam` and `config` alone.
pub fn export_with_timestamp(
    exam: &ExamPackage,
    config: &ExportConfig,
    created_at: OffsetDateTime,
) -> ExportResult<Artifact> {
    config.validate()?;
    let report = validate(exam, &config.labels())?;
    info!(
        title = %exam.title,
        questions = report.question_count(),
        warnings = report.warnings().len(),
        "exporting exam package"
    );

    let blocks = assemble(exam, config);
    let meta = DocumentMeta {
        title: &exam.title,
        subject: &exam.subject,
        creator: &config.creator,
        created_at,
    };
    let packed = write_docx(&blocks, &meta).map_err(ExportError::Serialization)?;

    let artifact = Artifact {
        bytes: packed.bytes,
        filename: suggested_filename(exam),
        document_sha256: packed.document_sha256,
    };
    info!(
        filename = %artifact.filename,
        size = artifact.bytes.len(),
        "exam document serialized"
    );
    Ok(artifact)
}

/// Export `exam` and hand the artifact to `sink`.
///
/// Returns where the sink stored the document. A delivery failure is reported
/// as [`ExportError::Delivery`] so callers can tell the user the document was
/// built but not saved.
pub fn export_and_deliver(
    exam: &ExamPackage,
    config: &ExportConfig,
    sink: &mut dyn DeliverySink,
) -> ExportResult<PathBuf> {
    let artifact = export(exam, config)?;
    let location = sink
        .deliver(&artifact.bytes, &artifact.filename)
        .map_err(ExportError::Delivery)?;
    info!(location = %location.display(), "exam document delivered");
    Ok(location)
}

fn header_blocks(exam: &ExamPackage, config: &ExportConfig) -> Vec<Block> {
    let mut blocks: Vec<Block> = config
        .institution_lines
        .iter()
        .map(|line| {
            Block::from(
                Paragraph::text(line.as_str())
                    .heading(HeadingLevel::Heading1)
                    .centered(),
            )
        })
        .collect();

    blocks.push(
        Paragraph::text(config.period_line.as_str())
            .centered()
            .spacing(None, Some(400))
            .into(),
    );
    blocks.push(
        Paragraph::new()
            .centered()
            .run(TextRun::new(exam.title.to_uppercase()).bold().size(28))
            .into(),
    );
    blocks.push(
        Paragraph::new()
            .centered()
            .spacing(None, Some(800))
            .run(
                TextRun::new(format!(
                    "Mata Pelajaran: {} | Kelas: {}",
                    exam.subject, exam.grade
                ))
                .bold(),
            )
            .into(),
    );
    blocks
}

fn part_heading(text: &str, before: u32, after: u32) -> Block {
    Paragraph::new()
        .heading(HeadingLevel::Heading1)
        .centered()
        .spacing((before > 0).then_some(before), Some(after))
        .run(TextRun::new(text).bold())
        .into()
}
