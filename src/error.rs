// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Error taxonomy for the export boundary.
//!
//! Internals use `anyhow` context chains; they are wrapped into one of these
//! variants when they cross the public API so callers can tell a rejected
//! package, a failed serialization and a failed delivery apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The package is missing a required field.
    #[error("invalid exam package: {0}")]
    InvalidModel(String),

    /// A question has more options than there are labels to give them.
    #[error(
        "question {question} in section {section} has {count} options but only {max} labels are configured"
    )]
    TooManyOptions {
        /// 1-based section position.
        section: usize,
        /// 1-based position inside the section.
        question: usize,
        count: usize,
        max: usize,
    },

    /// The provider payload could not be read or decoded.
    #[error("failed to read exam package: {0:#}")]
    Parse(anyhow::Error),

    #[error("invalid configuration: {0:#}")]
    Config(anyhow::Error),

    /// Building the binary document failed; nothing was produced.
    #[error("failed to serialize document: {0:#}")]
    Serialization(anyhow::Error),

    /// The document was built but the sink could not store it.
    #[error("document built but not delivered: {0:#}")]
    Delivery(anyhow::Error),
}

impl ExportError {
    pub fn is_delivery(&self) -> bool {
        matches!(self, ExportError::Delivery(_))
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::ExportError;

    #[test]
    fn display_includes_context_chain() {
        let err = ExportError::Serialization(
            anyhow::anyhow!("disk full").context("Failed to write word/document.xml"),
        );
        let text = err.to_string();
        assert!(text.contains("Failed to write word/document.xml"));
        assert!(text.contains("disk full"));
    }

    #[test]
    fn only_delivery_is_flagged_as_delivery() {
        assert!(ExportError::Delivery(anyhow::anyhow!("x")).is_delivery());
        assert!(!ExportError::Serialization(anyhow::anyhow!("x")).is_delivery());
    }
}
