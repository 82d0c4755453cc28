// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during cryptographic operations.
///
/// Verification failures are deliberately *not* represented here:
/// [`crate::ElGamal::verify`] reports a cryptographically invalid or
/// out-of-range signature as `false`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid bit length: must be at least {min} bits, got {actual}")]
    InvalidBitLength { min: usize, actual: usize },

    #[error("Invalid domain parameters")]
    InvalidParameters,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Missing field `{0}` in key material")]
    MissingField(&'static str),

    #[error("Field `{0}` is not a valid hexadecimal integer")]
    MalformedHex(&'static str),

    #[error("Rejection sampling gave up after {0} attempts")]
    SamplingExhausted(usize),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
