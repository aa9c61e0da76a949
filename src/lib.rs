//! # blsag
//!
//! An implementation of [Back's Linkable Spontaneous Anonymous Group
//! (bLSAG)](https://www.getmonero.org/library/Zero-to-Monero-2-0-0.pdf)
//! ring signatures over the [ristretto255](https://ristretto.group/) prime-order
//! group, hashed with SHA-3.
//!
//! A signer who knows the discrete logarithm of exactly one public key in a
//! ring of `n` public keys can sign a message such that any verifier accepts
//! the signature as proof that *some* ring member signed, without learning
//! which one. Two signatures produced with the same secret scalar carry an
//! identical *key image*, letting a verifier detect double-signing across
//! signatures without deanonymizing the signer.
//!
//! ```
//! use blsag::blsag::{sign, verify, MessageDigest, Ring};
//! use blsag::group::{base_mul, random_scalar};
//!
//! let k_pi = random_scalar();
//! let mut points = vec![base_mul(&random_scalar()), base_mul(&random_scalar())];
//! let secret_index = 1;
//! points[secret_index] = base_mul(&k_pi);
//! let ring = Ring::new(points).unwrap();
//!
//! let msg = MessageDigest::new(b"Hello World!");
//! let signature = sign(&msg, &ring, secret_index, &k_pi);
//! assert!(verify(
//!     &msg,
//!     &ring,
//!     &signature.key_image,
//!     &signature.challenge,
//!     &signature.responses
//! ));
//! ```
//!
//! This crate is `#![no_std]` by default (`std` is a default feature) so it
//! can be compiled for embedded devices and WebAssembly.

#![no_std]

#[cfg(all(feature = "no_std", not(feature = "std")))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

extern crate curve25519_dalek;
extern crate rand_core;
extern crate sha3;

pub mod blsag;
pub mod error;
pub mod group;
pub mod hash;
pub mod keyimage;
pub(crate) mod prelude;
