//! Boundary errors for constructing rings and decoding signatures from bytes.
//!
//! These are distinct from the verifier's reject decision: `verify` always
//! collapses to a single `bool` (see [`crate::blsag::verify`]), since
//! distinguishing *why* a signature failed is a padding/oracle-style risk.
//! This type exists only for the trusted-construction boundary: building a
//! [`crate::blsag::Ring`] or parsing a [`crate::blsag::Signature`] out of
//! untrusted bytes before any cryptographic check runs.

use thiserror::Error;

/// Errors raised while building a [`crate::blsag::Ring`] or decoding a
/// [`crate::blsag::Signature`] from its wire encoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// A ring must contain at least one member.
    #[error("ring must contain at least one member")]
    EmptyRing,
    /// The signer index was not a valid position in the ring.
    #[error("signer index {index} out of range for ring of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A ring member's 32 bytes do not decode to a canonical ristretto255
    /// point.
    #[error("ring member at position {0} is a non-canonical point encoding")]
    InvalidEncoding(usize),
    /// A ring member decoded to the group identity, which is disallowed as a
    /// public key.
    #[error("ring member at position {0} is the group identity")]
    IdentityMember(usize),
    /// A decoded byte buffer did not have a length consistent with the
    /// expected ring size.
    #[error("response vector length {got} does not match ring size {expected}")]
    LengthMismatch { got: usize, expected: usize },
}
