//! Back's Linkable Spontaneous Anonymous Group (bLSAG) ring signatures.
//!
//! A signer who knows the discrete logarithm of exactly one public key in an
//! ordered ring can produce a signature that convinces a verifier some ring
//! member signed, without revealing which one. Two signatures from the same
//! secret scalar carry an identical key image, so double-signing is
//! detectable without deanonymizing the signer.
//!
//! Please read the tests at the bottom of this module for example usage.

use crate::error::RingError;
use crate::group;
use crate::hash;
use crate::keyimage::key_image;
use crate::prelude::*;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use zeroize::{Zeroize, Zeroizing};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A SHA3-256 digest of the message being signed.
///
/// Callers prepare this with [`MessageDigest::new`]; it carries no domain
/// tag of its own since it is the input to, not an output of, the transcript
/// hash modes in [`crate::hash`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageDigest(pub [u8; 32]);

impl MessageDigest {
    /// Hashes `bytes` with SHA3-256 to produce the message digest.
    pub fn new(bytes: &[u8]) -> Self {
        MessageDigest(hash::hash_message(bytes))
    }
}

/// An ordered, validated sequence of candidate signer public keys.
///
/// Order is semantically significant: the challenge chain indexes ring
/// members by position, so permuting a ring (other than the identity
/// permutation) changes what a signature over it means.
#[derive(Clone, Debug)]
pub struct Ring(Vec<RistrettoPoint>);

impl Ring {
    /// Builds a ring from already-decompressed points, rejecting the group
    /// identity as a public key.
    pub fn new(points: Vec<RistrettoPoint>) -> Result<Ring, RingError> {
        if points.is_empty() {
            return Err(RingError::EmptyRing);
        }
        for (i, p) in points.iter().enumerate() {
            if group::is_identity(p) {
                return Err(RingError::IdentityMember(i));
            }
        }
        Ok(Ring(points))
    }

    /// Builds a ring from raw 32-byte ristretto255 encodings, rejecting
    /// non-canonical encodings and the identity. This is the boundary where
    /// untrusted wire bytes become the trusted [`RistrettoPoint`]s the rest
    /// of the crate operates on.
    pub fn from_canonical_bytes(encoded: &[[u8; 32]]) -> Result<Ring, RingError> {
        let mut points = Vec::with_capacity(encoded.len());
        for (i, bytes) in encoded.iter().enumerate() {
            let point = CompressedRistretto(*bytes)
                .decompress()
                .ok_or(RingError::InvalidEncoding(i))?;
            points.push(point);
        }
        Ring::new(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[RistrettoPoint] {
        &self.0
    }
}

/// A bLSAG signature: a key image, the seed challenge, and one response per
/// ring member.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Signature {
    pub key_image: RistrettoPoint,
    pub challenge: Scalar,
    pub responses: Vec<Scalar>,
}

impl Signature {
    /// Encodes the signature as `Kimg(32) || c0(32) || r[0](32) || … || r[n-1](32)`.
    ///
    /// The ring itself is not part of the encoding; it travels out of band.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(32 * (self.responses.len() + 2));
        out.extend_from_slice(self.key_image.compress().as_bytes());
        out.extend_from_slice(self.challenge.as_bytes());
        for r in &self.responses {
            out.extend_from_slice(r.as_bytes());
        }
        out
    }

    /// Decodes a signature for a ring of `n` members from its wire encoding.
    ///
    /// Rejects malformed input (wrong length, non-canonical point or
    /// scalar encodings) with [`RingError`] rather than panicking; the
    /// caller should treat any such error as an unconditional reject, same
    /// as a failed [`verify`] call.
    pub fn from_bytes(bytes: &[u8], n: usize) -> Result<Signature, RingError> {
        let expected_len = 32 * (n + 2);
        if bytes.len() != expected_len {
            return Err(RingError::LengthMismatch {
                got: bytes.len(),
                expected: expected_len,
            });
        }

        let mut key_image_bytes = [0u8; 32];
        key_image_bytes.copy_from_slice(&bytes[0..32]);
        let key_image = CompressedRistretto(key_image_bytes)
            .decompress()
            .ok_or(RingError::InvalidEncoding(0))?;
        if group::is_identity(&key_image) {
            return Err(RingError::IdentityMember(0));
        }

        let challenge = decode_scalar(&bytes[32..64]).ok_or(RingError::InvalidEncoding(1))?;

        let mut responses = Vec::with_capacity(n);
        for i in 0..n {
            let start = 64 + i * 32;
            let r = decode_scalar(&bytes[start..start + 32])
                .ok_or(RingError::InvalidEncoding(2 + i))?;
            responses.push(r);
        }

        Ok(Signature {
            key_image,
            challenge,
            responses,
        })
    }
}

fn decode_scalar(bytes: &[u8]) -> Option<Scalar> {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(bytes);
    Scalar::from_canonical_bytes(buf).into()
}

/// Builds the 101-byte `"blsag" || msg || L || R` round transcript and maps
/// it to the next challenge scalar.
fn hash_round(msg: &MessageDigest, l: &RistrettoPoint, r: &RistrettoPoint) -> Scalar {
    let mut transcript =
        Zeroizing::new(Vec::with_capacity(hash::ROUND_DOMAIN.len() + 32 + 32 + 32));
    transcript.extend_from_slice(hash::ROUND_DOMAIN);
    transcript.extend_from_slice(&msg.0);
    transcript.extend_from_slice(l.compress().as_bytes());
    transcript.extend_from_slice(r.compress().as_bytes());
    hash::hash_to_scalar(&transcript)
}

/// Derives `Hp(K) = hash_to_point("keyimg" || K)` for one ring member.
fn hash_point_for_member(k_point: &RistrettoPoint) -> RistrettoPoint {
    hash::hash_point_to_group(&k_point.compress().to_bytes())
}

/// Validates `secret_index` against `ring`, then signs.
///
/// This is the boundary-checked entry point for callers that cannot
/// otherwise guarantee `secret_index` is in range (for example when it
/// arrives alongside untrusted wire bytes); [`sign`] itself keeps trusting
/// its inputs per spec §6.
pub fn try_sign(
    msg: &MessageDigest,
    ring: &Ring,
    secret_index: usize,
    k_pi: &Scalar,
) -> Result<Signature, RingError> {
    let len = ring.len();
    if secret_index >= len {
        return Err(RingError::IndexOutOfRange {
            index: secret_index,
            len,
        });
    }
    Ok(sign(msg, ring, secret_index, k_pi))
}

/// Produces a ring signature on `msg` over `ring`, signing as the member at
/// `secret_index` with secret scalar `k_pi`.
///
/// This trusts its inputs (`0 <= secret_index < ring.len()`,
/// `ring.as_slice()[secret_index] == k_pi * G`, `k_pi != 0`): the signer does
/// not itself verify the caller's key pair, matching the contract in
/// spec §6. An out-of-range `secret_index` panics rather than producing a
/// meaningless signature; use [`try_sign`] for a boundary-checked,
/// `Result`-returning alternative.
pub fn sign(msg: &MessageDigest, ring: &Ring, secret_index: usize, k_pi: &Scalar) -> Signature {
    let points = ring.as_slice();
    let n = points.len();
    assert!(secret_index < n, "signer index out of range for ring");

    let k_pi_point = points[secret_index];
    let mut hp_k_pi = hash_point_for_member(&k_pi_point);
    let key_image = key_image(k_pi, &k_pi_point);

    let alpha = Zeroizing::new(group::random_scalar());

    let mut r: Vec<Scalar> = (0..n)
        .map(|i| {
            if i == secret_index {
                Scalar::ZERO
            } else {
                group::random_scalar()
            }
        })
        .collect();
    let mut c: Vec<Scalar> = vec![Scalar::ZERO; n];

    // Seed the chain one step ahead of the signer.
    let l_seed = group::base_mul(&alpha);
    let r_seed = group::variable_mul(&alpha, &hp_k_pi);
    c[(secret_index + 1) % n] = hash_round(msg, &l_seed, &r_seed);

    for j in 1..n {
        let i = (secret_index + j) % n;
        let k_i_point = points[i];

        let l_i = group::add(
            &group::variable_mul(&c[i], &k_i_point),
            &group::base_mul(&r[i]),
        );

        let mut hp_k_i = hash_point_for_member(&k_i_point);
        let r_i = group::add(
            &group::variable_mul(&c[i], &key_image),
            &group::variable_mul(&r[i], &hp_k_i),
        );
        hp_k_i.zeroize();

        c[(i + 1) % n] = hash_round(msg, &l_i, &r_i);
    }

    let c_pi_k_pi = Zeroizing::new(group::scalar_mul(&c[secret_index], k_pi));
    r[secret_index] = group::scalar_sub(&alpha, &c_pi_k_pi);

    hp_k_pi.zeroize();

    Signature {
        key_image,
        challenge: c[0],
        responses: r,
    }
}

/// Verifies a signature on `msg` over `ring`. Returns `false` on any
/// malformed or invalid input; never panics, never distinguishes the reason
/// for rejection.
pub fn verify(
    msg: &MessageDigest,
    ring: &Ring,
    key_image: &RistrettoPoint,
    challenge: &Scalar,
    responses: &[Scalar],
) -> bool {
    let points = ring.as_slice();
    let n = points.len();

    if responses.len() != n {
        return false;
    }
    if group::is_identity(key_image) {
        return false;
    }

    let mut c = [*challenge, Scalar::ZERO];
    for j in 0..n {
        let s = j % 2;

        let l = group::add(
            &group::variable_mul(&c[s], &points[j]),
            &group::base_mul(&responses[j]),
        );

        let mut hp_k_j = hash_point_for_member(&points[j]);
        let r = group::add(
            &group::variable_mul(&c[s], key_image),
            &group::variable_mul(&responses[j], &hp_k_j),
        );
        hp_k_j.zeroize();

        c[s ^ 1] = hash_round(msg, &l, &r);
    }

    group::scalar_ct_eq(&c[n % 2], challenge)
}

/// Decodes a wire-encoded signature against a ring of raw point encodings
/// and verifies it in one step, folding every decode failure into `false`
/// the same as a cryptographic reject (spec §6: the verifier must tolerate
/// any byte input).
pub fn verify_bytes(msg: &MessageDigest, ring_bytes: &[[u8; 32]], signature_bytes: &[u8]) -> bool {
    let ring = match Ring::from_canonical_bytes(ring_bytes) {
        Ok(ring) => ring,
        Err(_) => return false,
    };
    let signature = match Signature::from_bytes(signature_bytes, ring.len()) {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    verify(
        msg,
        &ring,
        &signature.key_image,
        &signature.challenge,
        &signature.responses,
    )
}

/// Checks whether two signatures were produced by the same secret scalar.
pub fn link(a: &Signature, b: &Signature) -> bool {
    a.key_image.compress() == b.key_image.compress()
}
