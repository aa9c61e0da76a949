//! Deterministic key-image derivation.
//!
//! Exposed as a standalone primitive (rather than folded only into
//! [`crate::blsag::sign`]) because callers may want to precompute or display
//! a key image without running a full signature, for example to check it
//! against a double-spend ledger before spending the time to sign.

use crate::group;
use crate::hash;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use zeroize::Zeroize;

/// `Kimg = k · Hp("keyimg" || K)`, where `K` is the 32-byte canonical
/// encoding of `k · G`.
pub fn key_image(k: &Scalar, k_point: &RistrettoPoint) -> RistrettoPoint {
    let k_point_bytes = k_point.compress().to_bytes();
    let mut hp_k = hash::hash_point_to_group(&k_point_bytes);
    let image = group::variable_mul(k, &hp_k);
    hp_k.zeroize();
    image
}
