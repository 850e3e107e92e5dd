// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! `.docx` serialization of the block model on top of `docx-rs`.
//!
//! Responsibilities:
//! - Check blocks the writer cannot represent (empty or ragged tables) before
//!   anything is built.
//! - Translate paragraphs, runs, tables and page breaks into `docx-rs` elements.
//! - Pack the document into an in-memory buffer; the buffer is only returned
//!   once the archive is finalized.

use std::io::{Cursor, Read};

use anyhow::{Context, Result, bail};
use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, PageMargin, RunFonts, Style, StyleType,
    TableLayoutType, WidthType,
};
use time::{OffsetDateTime, UtcOffset, macros::format_description};
use tracing::debug;
use zip::ZipArchive;

use crate::models::{Alignment, Block, HeadingLevel, Paragraph, Table, TextRun};
use crate::utils::sha256_hex;

/// Native extension of the produced artifact.
pub const DOCX_EXTENSION: &str = "docx";

/// Archive entry holding the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// A4 portrait, 1 inch margins, in twips.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: i32 = 1440;
const TEXT_WIDTH: usize = (PAGE_WIDTH as usize) - 2 * (PAGE_MARGIN as usize);

const BODY_FONT: &str = "Times New Roman";
/// Half-points.
const BODY_SIZE: usize = 24;

/// Document-level properties.
#[derive(Clone, Debug)]
pub struct DocumentMeta<'a> {
    pub title: &'a str,
    pub subject: &'a str,
    pub creator: &'a str,
    pub created_at: OffsetDateTime,
}

/// A finalized `.docx` archive.
#[derive(Clone, Debug)]
pub struct PackedDocument {
    pub bytes: Vec<u8>,
    /// Hex SHA-256 of `word/document.xml`; stable for identical blocks.
    pub document_sha256: String,
}

/// Serialize `blocks` into a complete `.docx` archive held in memory.
///
/// Fails without returning any bytes when a block is malformed (a table with
/// no rows, or a row whose cell count differs from the column count) or when
/// packing reports an error.
pub fn write_docx(blocks: &[Block], meta: &DocumentMeta<'_>) -> Result<PackedDocument> {
    for (index, block) in blocks.iter().enumerate() {
        if let Block::Table(table) = block {
            check_table(table).with_context(|| format!("Malformed table at block {index}"))?;
        }
    }

    let timestamp = format_timestamp(meta.created_at)?;
    let docx = DocxBuilder::default()
        .build(blocks)
        .created_at(&timestamp)
        .updated_at(&timestamp)
        .custom_property("title", meta.title)
        .custom_property("subject", meta.subject)
        .custom_property("creator", meta.creator);

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .context("Failed to pack document archive")?;
    let bytes = cursor.into_inner();

    let document_sha256 = sha256_hex(&read_part(&bytes, DOCUMENT_PART)?);
    debug!(blocks = blocks.len(), size = bytes.len(), "packed docx archive");

    Ok(PackedDocument {
        bytes,
        document_sha256,
    })
}

/// Read one entry back out of a packed archive.
pub fn read_part(bytes: &[u8], name: &str) -> Result<Vec<u8>> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).context("Packed document is not a valid archive")?;
    let mut file = archive
        .by_name(name)
        .with_context(|| format!("Packed document has no {name} entry"))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {name} from packed document"))?;
    Ok(buf)
}

fn check_table(table: &Table) -> Result<()> {
    let columns = table.column_widths.len();
    if table.rows.is_empty() {
        bail!("table has no rows");
    }
    if columns == 0 {
        bail!("table declares no columns");
    }
    for (row_index, row) in table.rows.iter().enumerate() {
        if row.cells.len() != columns {
            bail!(
                "row {} has {} cells but the table has {} columns",
                row_index + 1,
                row.cells.len(),
                columns
            );
        }
    }
    Ok(())
}

fn format_timestamp(at: OffsetDateTime) -> Result<String> {
    at.to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        ))
        .context("Failed to format document timestamp")
}

/// Walks the block list into a `Docx`.
///
/// Paragraph ids are assigned from a local counter so equal blocks always
/// produce an equal document part.
#[derive(Default)]
struct DocxBuilder {
    next_para_id: u32,
}

impl DocxBuilder {
    fn build(mut self, blocks: &[Block]) -> Docx {
        let mut docx = Docx::new()
            .page_size(PAGE_WIDTH, PAGE_HEIGHT)
            .page_margin(
                PageMargin::new()
                    .top(PAGE_MARGIN)
                    .bottom(PAGE_MARGIN)
                    .left(PAGE_MARGIN)
                    .right(PAGE_MARGIN),
            )
            .default_fonts(RunFonts::new().ascii(BODY_FONT).hi_ansi(BODY_FONT).cs(BODY_FONT))
            .default_size(BODY_SIZE)
            .add_style(heading_style(HeadingLevel::Heading1, "heading 1", 32))
            .add_style(heading_style(HeadingLevel::Heading2, "heading 2", 26));

        for (index, block) in blocks.iter().enumerate() {
            match block {
                Block::Paragraph(p) => docx = docx.add_paragraph(self.paragraph(p)),
                Block::Table(t) => {
                    docx = docx.add_table(self.table(t));
                    // Word merges adjacent tables; keep an empty paragraph between them.
                    if matches!(blocks.get(index + 1), Some(Block::Table(_)) | None) {
                        docx = docx.add_paragraph(self.empty_paragraph());
                    }
                }
                Block::PageBreak => {
                    let page_break = docx_rs::Run::new().add_break(BreakType::Page);
                    docx = docx.add_paragraph(self.empty_paragraph().add_run(page_break));
                }
            }
        }
        docx
    }

    fn empty_paragraph(&mut self) -> docx_rs::Paragraph {
        self.next_para_id += 1;
        docx_rs::Paragraph::new().id(&format!("{:08X}", self.next_para_id))
    }

    fn paragraph(&mut self, p: &Paragraph) -> docx_rs::Paragraph {
        let mut out = self.empty_paragraph();
        if let Some(level) = p.heading {
            out = out.style(level.style_id());
        }
        if p.space_before.is_some() || p.space_after.is_some() {
            let mut spacing = LineSpacing::new();
            if let Some(before) = p.space_before {
                spacing = spacing.before(before);
            }
            if let Some(after) = p.space_after {
                spacing = spacing.after(after);
            }
            out = out.line_spacing(spacing);
        }
        if let Some(left) = p.indent_left {
            out = out.indent(Some(left as i32), None, None, None);
        }
        if p.alignment == Alignment::Center {
            out = out.align(AlignmentType::Center);
        }
        for run in &p.runs {
            out = out.add_run(text_run(run));
        }
        out
    }

    fn table(&mut self, table: &Table) -> docx_rs::Table {
        let grid = table
            .column_widths
            .iter()
            .map(|pct| TEXT_WIDTH * *pct as usize / 100)
            .collect();

        let mut rows = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let mut cells = Vec::with_capacity(row.cells.len());
            for (cell, pct) in row.cells.iter().zip(&table.column_widths) {
                // Percent widths are expressed in fiftieths of a percent.
                cells.push(
                    docx_rs::TableCell::new()
                        .add_paragraph(self.paragraph(&cell.paragraph))
                        .width(*pct as usize * 50, WidthType::Pct),
                );
            }
            rows.push(docx_rs::TableRow::new(cells));
        }

        docx_rs::Table::new(rows)
            .set_grid(grid)
            .width(5000, WidthType::Pct)
            .layout(TableLayoutType::Fixed)
    }
}

fn heading_style(level: HeadingLevel, name: &str, size: usize) -> Style {
    Style::new(level.style_id(), StyleType::Paragraph)
        .name(name)
        .bold()
        .size(size)
}

fn text_run(run: &TextRun) -> docx_rs::Run {
    let mut out = docx_rs::Run::new();
    // Embedded newlines become line breaks inside the same run.
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        out = out.add_text(line.strip_suffix('\r').unwrap_or(line));
    }
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if let Some(size) = run.size {
        out = out.size(size as usize);
    }
    if run.underline {
        out = out.underline("single");
    }
    out
}
