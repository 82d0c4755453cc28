// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{prime::probably_prime, BigUint};
use rand::rngs::OsRng;

use crate::{util, Error, Result};

/// Miller-Rabin rounds for an error probability of at most 2⁻¹⁰⁰.
const PRIMALITY_ROUNDS: usize = 50;

/// Smallest accepted modulus bit length. Anything below 512 bits has no
/// security value and exists for testing only.
pub const MIN_BIT_LENGTH: usize = 2;

/// The fixed generator candidate.
const GENERATOR: u32 = 2;

/// Shared domain parameters `(p, g)` of the signature scheme.
///
/// `p` is a probable prime and `g` an element of `[2, p-1]`. Both are
/// immutable once constructed; every key pair and signature refers to one
/// such pair.
///
/// ## Security
///
/// `g` is assumed, not proven, to generate the multiplicative group modulo
/// `p`. [`DomainParameters::generate`] fixes `g = 2` without checking its
/// order against the factorization of `p-1`; a production deployment should
/// verify the order of `g` (or derive `p` as a safe prime) before trusting
/// these parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParameters {
    p: BigUint,
    g: BigUint,
}

impl DomainParameters {
    /// Constructs parameters from existing values, validating the invariants.
    ///
    /// `p` must pass the primality test at the configured confidence and `g`
    /// must lie in `[2, p-1]`.
    pub fn new(p: BigUint, g: BigUint) -> Result<Self> {
        if !probably_prime(&p, PRIMALITY_ROUNDS) {
            return Err(Error::InvalidParameters);
        }

        if g < BigUint::from(2u32) || g >= p {
            return Err(Error::InvalidParameters);
        }

        Ok(Self { p, g })
    }

    /// Generates fresh parameters with a modulus of exactly `bit_length` bits.
    ///
    /// Probable primes are drawn and resampled until one with the exact bit
    /// length appears; the generator is the fixed constant 2.
    pub fn generate(bit_length: usize) -> Result<Self> {
        if bit_length < MIN_BIT_LENGTH {
            return Err(Error::InvalidBitLength {
                min: MIN_BIT_LENGTH,
                actual: bit_length,
            });
        }

        let mut rng = OsRng;
        let p = util::gen_prime_exact(bit_length, &mut rng)?;
        let g = BigUint::from(GENERATOR);

        Ok(Self { p, g })
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    #[inline]
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    #[inline]
    pub fn bit_length(&self) -> usize {
        self.p.bits()
    }
}
