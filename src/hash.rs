//! Domain-separated SHA-3 hashing primitives.
//!
//! Every hash used in the ring signature transcript is tagged with a short
//! ASCII prefix so that the two hash-to-group modes below can never collide,
//! even though both ultimately run through the same SHA3-512 uniform map.

use crate::prelude::*;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use sha3::{Digest, Sha3_256, Sha3_512};

/// Domain tag for key-image point derivation: `Hp(K) = hash_to_point("keyimg" || K)`.
pub const KIMG_DOMAIN: &[u8] = b"keyimg";
/// Domain tag for the per-round challenge scalar.
pub const ROUND_DOMAIN: &[u8] = b"blsag";

/// SHA3-256 of raw message bytes, with no domain tag. This is the digest an
/// external caller prepares as the `msg` argument to [`crate::sign`] /
/// [`crate::verify`]; it carries no tag because it isn't part of the
/// transcript hash modes below.
pub fn hash_message(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// SHA3-512 followed by the ristretto255 uniform hash-to-group map.
///
/// `bytes` must already carry its domain tag as a prefix (the `"keyimg"`
/// tag for key-image derivation in this crate).
pub fn hash_to_point(bytes: &[u8]) -> RistrettoPoint {
    let hasher = Sha3_512::new_with_prefix(bytes);
    RistrettoPoint::from_hash(hasher)
}

/// SHA3-512 followed by the ristretto255 wide-reduction scalar map.
///
/// `bytes` must already carry its domain tag as a prefix (the `"blsag"` tag
/// for the per-round challenge in this crate).
pub fn hash_to_scalar(bytes: &[u8]) -> Scalar {
    let hasher = Sha3_512::new_with_prefix(bytes);
    Scalar::from_hash(hasher)
}

/// Builds the 38-byte `"keyimg" || K` transcript and maps it to a group
/// element. `k_point` must be the 32-byte canonical encoding of a ristretto255
/// point.
pub fn hash_point_to_group(k_point: &[u8; 32]) -> RistrettoPoint {
    let mut buf = Vec::with_capacity(KIMG_DOMAIN.len() + 32);
    buf.extend_from_slice(KIMG_DOMAIN);
    buf.extend_from_slice(k_point);
    hash_to_point(&buf)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hash_message_is_plain_sha3_256() {
        let digest = hash_message(b"Hello World!");
        assert_eq!(digest.len(), 32);
        // deterministic
        assert_eq!(digest, hash_message(b"Hello World!"));
        assert_ne!(digest, hash_message(b"Hello World?"));
    }

    #[test]
    fn domain_tags_have_distinct_lengths() {
        assert_eq!(KIMG_DOMAIN.len(), 6);
        assert_eq!(ROUND_DOMAIN.len(), 5);
    }

    #[test]
    fn hash_to_point_and_scalar_are_deterministic() {
        let a = hash_to_point(b"keyimgsomefixedinput");
        let b = hash_to_point(b"keyimgsomefixedinput");
        assert_eq!(a.compress(), b.compress());

        let x = hash_to_scalar(b"blsagsomefixedinput");
        let y = hash_to_scalar(b"blsagsomefixedinput");
        assert_eq!(x, y);
    }
}
