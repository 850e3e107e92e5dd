// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Document assembly: input adapter, the four part builders, the packager and
//! the DOCX writer.

pub mod adapter;
pub mod analysis;
pub mod answer_key;
pub mod blueprint;
pub mod docx;
pub mod numbering;
pub mod packager;
pub mod question_sheet;
