// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Delivery sinks: where a finished document goes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::logic::docx::DOCX_EXTENSION;
use crate::utils::{ensure_extension, sanitize_component};

/// Receives a complete document and stores or presents it.
pub trait DeliverySink {
    /// Store `bytes` under (a sanitized form of) `filename` and return where
    /// it ended up.
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<PathBuf>;
}

/// Writes documents into a directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    open_after_save: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            open_after_save: false,
        }
    }

    /// Open the saved document with the platform's default application.
    pub fn open_after_save(mut self, open: bool) -> Self {
        self.open_after_save = open;
        self
    }

    /// Final path for `filename` inside the target directory.
    pub fn target_path(&self, filename: &str) -> PathBuf {
        ensure_extension(self.dir.join(sanitize_component(filename)), DOCX_EXTENSION)
    }
}

impl DeliverySink for DirectorySink {
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<PathBuf> {
        // Ensure the directory exists so the write does not fail on a fresh path.
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("Failed to create output directory {:?}", self.dir))?;
        }

        let path = self.target_path(filename);
        fs::write(&path, bytes).with_context(|| format!("Failed to write document {:?}", path))?;
        info!(path = %path.display(), size = bytes.len(), "document saved");

        if self.open_after_save
            && let Err(err) = open::that(&path)
        {
            // The file is saved; failing to launch a viewer is not a delivery failure.
            warn!(path = %path.display(), error = %err, "could not open saved document");
        }

        Ok(path)
    }
}
