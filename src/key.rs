// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{util, DomainParameters, Error, Result};

/// The verifier's side of a key pair: the triple `(p, g, y)`.
///
/// `y = g^x mod p` for some private scalar `x`; the public key carries no
/// other relation to it and is freely shareable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    params: DomainParameters,
    y: BigUint,
}

impl PublicKey {
    pub fn new(params: DomainParameters, y: BigUint) -> Result<Self> {
        if y.is_zero() || &y >= params.p() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { params, y })
    }

    #[inline]
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    #[inline]
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// Private key with automatic secure erasure.
///
/// The `Zeroize` and `ZeroizeOnDrop` traits ensure the scalar `x` is wiped
/// from memory when this struct is dropped. `num-bigint-dig` implements
/// `Zeroize` for `BigUint`, which zeroes the underlying heap-allocated digit
/// vector. The domain parameters are public data and skip erasure.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    params: DomainParameters,

    /// Secret scalar with 1 < x < p-1.
    x: BigUint,
}

impl PrivateKey {
    pub fn new(params: DomainParameters, x: BigUint) -> Result<Self> {
        if x <= BigUint::one() || x >= params.p() - 1u32 {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self { params, x })
    }

    /// Recomputes the public half `y = g^x mod p`.
    ///
    /// The public key carries no independent state, so it can be rebuilt at
    /// any time, e.g. after loading a private key from disk.
    pub fn public_key(&self) -> PublicKey {
        let y = self.params.g().modpow(&self.x, self.params.p());
        PublicKey {
            params: self.params.clone(),
            y,
        }
    }

    #[inline]
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    /// Exposes the secret scalar, e.g. for persistence. Handle with care.
    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.x
    }
}

/// A freshly generated private/public pair over one set of domain parameters.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Generates a key pair for the given domain parameters.
    ///
    /// The private scalar is drawn with bit length `p.bits() - 1` and
    /// rejection-sampled into `1 < x < p-1`; the out-of-range draws are
    /// discarded rather than reduced, keeping the distribution uniform.
    pub fn generate(params: &DomainParameters) -> Result<Self> {
        let mut rng = OsRng;
        let x = util::sample_scalar(params.p(), &mut rng)?;
        let y = params.g().modpow(&x, params.p());

        let public = PublicKey::new(params.clone(), y)?;
        let private = PrivateKey::new(params.clone(), x)?;

        Ok(Self { public, private })
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}
