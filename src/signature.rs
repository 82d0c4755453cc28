// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

/// A signature pair `(r, s)`, bound to exactly one message under one key.
///
/// Construction performs no range validation: the verifier owns that policy,
/// so a pair loaded from untrusted input verifies to `false` instead of
/// failing to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    #[inline]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}
