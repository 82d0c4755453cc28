// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, RandBigInt, RandPrime};
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::{Error, Result};

/// Upper bound on rejection-sampling draws before giving up.
///
/// Rejection probabilities per draw are small for any realistic modulus, so
/// this bound is astronomically unlikely to trigger; it exists so that a
/// misconfigured or entropy-starved environment fails loudly instead of
/// spinning forever.
pub(crate) const MAX_DRAW_ATTEMPTS: usize = 10_000;

/// Draws probable primes until one with bit length exactly `bits` appears.
///
/// The prime generation primitive may return a number longer than requested;
/// such candidates are resampled, never truncated.
pub(crate) fn gen_prime_exact<R: RngCore + CryptoRng>(bits: usize, rng: &mut R) -> Result<BigUint> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let p = rng.gen_prime(bits);
        if p.bits() == bits {
            return Ok(p);
        }
    }
    Err(Error::SamplingExhausted(MAX_DRAW_ATTEMPTS))
}

/// Draws a scalar with bit length `p.bits() - 1`, accepting only 1 < v < p-1.
///
/// Out-of-range candidates are resampled rather than reduced modulo the
/// range, which would bias the distribution.
pub(crate) fn sample_scalar<R: RngCore + CryptoRng>(p: &BigUint, rng: &mut R) -> Result<BigUint> {
    let p_minus_one = p - 1u32;
    let one = BigUint::one();
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let v = rng.gen_biguint(p.bits() - 1);
        if v > one && v < p_minus_one {
            return Ok(v);
        }
    }
    Err(Error::SamplingExhausted(MAX_DRAW_ATTEMPTS))
}

/// Like [`sample_scalar`], additionally requiring gcd(v, p-1) = 1 so that
/// the scalar is invertible modulo p-1.
pub(crate) fn sample_invertible_scalar<R: RngCore + CryptoRng>(
    p: &BigUint,
    rng: &mut R,
) -> Result<BigUint> {
    let p_minus_one = p - 1u32;
    let one = BigUint::one();
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let v = rng.gen_biguint(p.bits() - 1);
        if v > one && v < p_minus_one && v.gcd(&p_minus_one).is_one() {
            return Ok(v);
        }
    }
    Err(Error::SamplingExhausted(MAX_DRAW_ATTEMPTS))
}
