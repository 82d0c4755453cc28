// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigInt, ModInverse};
use num_integer::Integer;
use num_traits::Zero;
use rand::rngs::OsRng;

use crate::digest::digest;
use crate::error::{Error, Result};
use crate::key::{PrivateKey, PublicKey};
use crate::signature::Signature;
use crate::util;

/// Outer retries on a degenerate `s = 0` before giving up. A single retry
/// already has probability ~2⁻ᵇⁱᵗˢ of being needed.
const MAX_SIGN_ATTEMPTS: usize = 64;

/// Stateless signing and verification over caller-supplied key material.
pub struct ElGamal;

impl ElGamal {
    /// Signs a message under the given private key.
    ///
    /// The ephemeral scalar `k` is rejection-sampled until `1 < k < p-1` and
    /// `gcd(k, p-1) = 1`, then
    ///
    /// ```text
    /// r = g^k mod p
    /// s = (H(m) - x·r) · k⁻¹ mod (p-1)
    /// ```
    ///
    /// A result of `s = 0` would reveal the private key algebraically, so
    /// the whole computation is redone with a fresh `k` until `s ≠ 0`. Each
    /// call draws its own randomness; two signatures over the same message
    /// differ.
    pub fn sign<M: AsRef<[u8]>>(message: M, key: &PrivateKey) -> Result<Signature> {
        let p = key.params().p();
        let g = key.params().g();
        let p_minus_one = p - 1u32;
        let group_order = BigInt::from(p_minus_one.clone());

        let h = BigInt::from(digest(message));
        let mut rng = OsRng;

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let k = util::sample_invertible_scalar(p, &mut rng)?;
            let r = g.modpow(&k, p);

            // gcd(k, p-1) = 1 held above, so the inverse exists.
            let k_inv = k
                .mod_inverse(&p_minus_one)
                .ok_or_else(|| Error::SigningFailed("ephemeral scalar not invertible".into()))?;

            let s = ((&h - BigInt::from(key.scalar() * &r)) * k_inv).mod_floor(&group_order);
            if s.is_zero() {
                continue;
            }

            let s = s
                .to_biguint()
                .ok_or_else(|| Error::SigningFailed("s escaped its residue range".into()))?;

            return Ok(Signature::new(r, s));
        }

        Err(Error::SamplingExhausted(MAX_SIGN_ATTEMPTS))
    }

    /// Verifies a signature pair against a message and public key.
    ///
    /// A pair outside the required ranges (`0 < r < p`, `0 < s < p-1`) is
    /// rejected before the message is hashed. For in-range pairs the check is
    ///
    /// ```text
    /// g^H(m)  ≟  y^r · r^s  (mod p)
    /// ```
    ///
    /// which avoids inverting `s` modulo `p-1` (that inverse need not
    /// exist). Cryptographic invalidity is always reported as `false`,
    /// never as an error; the inputs are immutable, so repeated calls yield
    /// the same result.
    pub fn verify<M: AsRef<[u8]>>(message: M, signature: &Signature, key: &PublicKey) -> bool {
        let p = key.params().p();
        let p_minus_one = p - 1u32;

        let r = signature.r();
        let s = signature.s();
        if r.is_zero() || r >= p || s.is_zero() || *s >= p_minus_one {
            return false;
        }

        let h = digest(message);
        let left = key.params().g().modpow(&h, p);
        let right = (key.y().modpow(r, p) * r.modpow(s, p)) % p;

        left == right
    }
}
