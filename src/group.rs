//! Thin semantic facade over the ristretto255 group.
//!
//! The rest of the crate never touches `curve25519_dalek` directly; it goes
//! through these free functions instead, so the one place that would need to
//! change if the underlying group library were swapped is this module.

use curve25519_dalek::constants;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
#[cfg(test)]
use curve25519_dalek::traits::Identity;
use curve25519_dalek::traits::IsIdentity;
use rand_core::OsRng;
use subtle::ConstantTimeEq;

/// Draws a uniformly random scalar from the platform CSPRNG.
pub fn random_scalar() -> Scalar {
    let mut csprng = OsRng;
    Scalar::random(&mut csprng)
}

/// `a · G`, the ristretto255 base point.
pub fn base_mul(a: &Scalar) -> RistrettoPoint {
    a * constants::RISTRETTO_BASEPOINT_POINT
}

/// `a · P`, a variable-base scalar multiplication.
///
/// Ristretto255 scalar multiplication never fails for canonical inputs (the
/// group has no small-order points to worry about once decompression
/// succeeded), so this returns the point directly. Callers on the
/// verification side that accept attacker-controlled encodings must reject
/// non-canonical bytes before reaching this facade (see
/// [`crate::blsag::Ring::new`]); this function itself trusts its inputs per
/// spec.
pub fn variable_mul(a: &Scalar, p: &RistrettoPoint) -> RistrettoPoint {
    a * p
}

/// `P + Q`.
pub fn add(p: &RistrettoPoint, q: &RistrettoPoint) -> RistrettoPoint {
    p + q
}

/// `a * b` in the scalar field.
pub fn scalar_mul(a: &Scalar, b: &Scalar) -> Scalar {
    a * b
}

/// `a - b` in the scalar field.
pub fn scalar_sub(a: &Scalar, b: &Scalar) -> Scalar {
    a - b
}

/// Constant-time byte equality of two canonical scalar encodings.
pub fn scalar_ct_eq(a: &Scalar, b: &Scalar) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// True iff `p` is the ristretto255 group identity (the all-zero encoding).
pub fn is_identity(p: &RistrettoPoint) -> bool {
    p.is_identity()
}
