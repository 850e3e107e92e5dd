// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Layout-level block model shared by the builders and the DOCX writer.
//!
//! Builders only ever produce these values; nothing here knows about
//! WordprocessingML. Measurements use Word's units: twips (1/20 pt) for
//! spacing and indentation, half-points for font size.

/// One block-level unit of the output document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    /// Forces the following blocks onto a new page.
    PageBreak,
}

impl Block {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(value: Paragraph) -> Self {
        Block::Paragraph(value)
    }
}

impl From<Table> for Block {
    fn from(value: Table) -> Self {
        Block::Table(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    Heading1,
    Heading2,
}

impl HeadingLevel {
    /// Style id registered in `word/styles.xml`.
    pub fn style_id(&self) -> &'static str {
        match self {
            HeadingLevel::Heading1 => "Heading1",
            HeadingLevel::Heading2 => "Heading2",
        }
    }
}

/// A styled span of text inside a paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in half-points; `None` inherits the paragraph style.
    pub size: Option<u32>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub heading: Option<HeadingLevel>,
    pub alignment: Alignment,
    /// Space before the paragraph, in twips.
    pub space_before: Option<u32>,
    /// Space after the paragraph, in twips.
    pub space_after: Option<u32>,
    /// Left indentation, in twips.
    pub indent_left: Option<u32>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single plain run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().run(TextRun::new(text))
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn heading(mut self, level: HeadingLevel) -> Self {
        self.heading = Some(level);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn spacing(mut self, before: Option<u32>, after: Option<u32>) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn indent(mut self, left: u32) -> Self {
        self.indent_left = Some(left);
        self
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A grid with a header row followed by data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Column widths as percentages of the page width.
    pub column_widths: Vec<u32>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Build a table whose first row is a bold header.
    pub fn with_header(column_widths: Vec<u32>, header: &[&str]) -> Self {
        let cells = header
            .iter()
            .map(|label| TableCell::new(Paragraph::new().run(TextRun::new(*label).bold())))
            .collect();
        Self {
            column_widths,
            rows: vec![TableRow {
                header: true,
                cells,
            }],
        }
    }

    /// Append a data row of plain-text cells.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(TableRow {
            header: false,
            cells: cells
                .into_iter()
                .map(|text| TableCell::new(Paragraph::text(text)))
                .collect(),
        });
    }

    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first().filter(|row| row.header)
    }

    pub fn body_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| !row.header)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Repeated at the top of each page when the table spans pages.
    pub header: bool,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Plain text of every cell, in column order.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.paragraph.plain_text()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableCell {
    pub paragraph: Paragraph,
}

impl TableCell {
    pub fn new(paragraph: Paragraph) -> Self {
        Self { paragraph }
    }
}
