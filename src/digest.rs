// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use sha2::{Digest, Sha256};

/// Maps a byte sequence of any length to a non-negative integer.
///
/// The SHA-256 digest bytes are interpreted as a big-endian unsigned
/// integer. Deterministic; consumes no randomness.
pub fn digest<M: AsRef<[u8]>>(message: M) -> BigUint {
    let hash = Sha256::digest(message.as_ref());
    BigUint::from_bytes_be(&hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_sha256_vector() {
        let expected = BigUint::parse_bytes(
            b"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            16,
        )
        .unwrap();

        assert_eq!(digest("abc"), expected);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(digest("hello"), digest("hello"));
        assert_ne!(digest("hello"), digest("hellp"));
    }

    #[test]
    fn handles_empty_input() {
        let expected = BigUint::parse_bytes(
            b"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            16,
        )
        .unwrap();

        assert_eq!(digest([]), expected);
    }
}
