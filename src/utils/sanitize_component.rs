// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Filesystem-safe names for delivered documents.

use std::path::PathBuf;

/// Used when nothing printable survives sanitizing.
const FALLBACK_NAME: &str = "paket_soal";

/// Device names Windows refuses as file basenames.
const RESERVED_BASENAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Produce a filesystem-safe file name from a suggested document name.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Sékolah" → "Sekolah").
/// - Keep ASCII alphanumerics plus `-`, `_` and `.`; everything else becomes `_`.
/// - Collapse runs of `_` and `.`, drop `_` right before a dot.
/// - Trim leading dots and underscores (no hidden files, no `..`) and trailing dots.
/// - Fall back to `paket_soal` for empty names and suffix Windows device names.
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());

    for ch in transliterated.chars() {
        let mapped = match ch {
            c if c.is_ascii_alphanumeric() || c == '-' => c,
            '.' => '.',
            _ => '_',
        };
        let repeats_separator = matches!(mapped, '_' | '.') && out.ends_with(mapped);
        if !repeats_separator {
            out.push(mapped);
        }
    }

    let mut out = out.replace("_.", ".").trim_start_matches(['.', '_']).to_string();
    while out.ends_with('.') {
        out.pop();
    }

    if out.is_empty() || out.chars().all(|c| c == '_') {
        return FALLBACK_NAME.to_string();
    }

    let (basename, ext) = match out.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, Some(ext)),
        _ => (out.as_str(), None),
    };

    if RESERVED_BASENAMES.contains(&basename.to_ascii_uppercase().as_str()) {
        return match ext {
            Some(ext) => format!("{basename}_.{ext}"),
            None => format!("{basename}_"),
        };
    }

    out
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps an existing matching extension (case-insensitive); otherwise replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let matches_already = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if !matches_already {
        path.set_extension(extension);
    }
    path
}
