// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Shared helpers for packaging and delivery.

pub mod hash;
pub mod sanitize_component;

/// Hex SHA-256 digest of an in-memory buffer.
pub use hash::sha256_hex;
/// Turn a suggested filename into something every filesystem accepts.
pub use sanitize_component::{ensure_extension, sanitize_component};
