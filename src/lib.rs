// Copyright 2025 the gamal developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ElGamal Signature Scheme
//!
//! Digital signatures over the multiplicative group modulo a large prime,
//! built on arbitrary-precision modular arithmetic and SHA-256.
//!
//! Reference: [ElGamal (1985), IEEE Trans. Inf. Theory](https://ieeexplore.ieee.org/document/1057074)
//!
//! ## Security
//!
//! The prime modulus is a probable prime with error probability at most
//! 2⁻¹⁰⁰. The generator is fixed to 2 and is *not* verified to generate the
//! full group; see [`DomainParameters`] for the implications. The private
//! scalar is zeroized on drop via the `zeroize` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gamal::{DomainParameters, ElGamal, KeyPair};
//!
//! let params = DomainParameters::generate(2048).expect("parameter generation failed");
//! let keys = KeyPair::generate(&params).expect("key generation failed");
//!
//! let signature = ElGamal::sign("hello world", keys.private_key()).expect("signing failed");
//! assert!(ElGamal::verify("hello world", &signature, keys.public_key()));
//! ```

mod digest;
mod elgamal;
mod encode;
mod error;
mod key;
mod params;
mod signature;
mod util;

pub use digest::*;
pub use elgamal::*;
pub use encode::*;
pub use error::*;
pub use key::*;
pub use params::*;
pub use signature::*;
