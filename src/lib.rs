// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Turn a generated exam package into one `.docx` document holding the
//! blueprint ("kisi-kisi"), the qualitative analysis, the question sheet and
//! the answer key with discussions.
//!
//! ```no_run
//! use exampack::{DirectorySink, ExportConfig, export_and_deliver, load_exam};
//!
//! let exam = load_exam(std::path::Path::new("paket.json"))?;
//! let config = ExportConfig::load(None)?;
//! let mut sink = DirectorySink::new("keluaran");
//! let saved = export_and_deliver(&exam, &config, &mut sink)?;
//! println!("saved {}", saved.display());
//! # Ok::<(), exampack::ExportError>(())
//! ```

pub mod config;
pub mod delivery;
pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use config::ExportConfig;
pub use delivery::{DeliverySink, DirectorySink};
pub use error::{ExportError, ExportResult};
pub use logic::adapter::{ValidationReport, ValidationWarning, load_exam, normalize, parse_exam, validate};
pub use logic::packager::{
    Artifact, assemble, export, export_and_deliver, export_with_timestamp, suggested_filename,
};
pub use models::{ExamPackage, ExamSection, Question, QuestionAnalysis};
