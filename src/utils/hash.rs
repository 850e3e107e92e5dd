// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ExamPack contributors

//! Content digests for produced document parts.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 of `bytes` and return its lowercase hex digest.
///
/// # Examples
///
/// ```rust
/// let digest = exampack::utils::sha256_hex(b"");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::sha256_hex;

    #[test]
    fn digest_of_known_input() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_differs_for_different_input() {
        assert_ne!(sha256_hex(b"LEMBAR SOAL"), sha256_hex(b"KUNCI JAWABAN"));
    }
}
