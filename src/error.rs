//! Error types for curve construction, signing, verification, and the codec

use num_bigint::BigUint;
use thiserror::Error;

/// Errors that can occur during curve, signature, or codec operations
#[derive(Debug, Error)]
pub enum Error {
    /// A structurally unusable parameter (modulus below 2, scalar out of range, ...)
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The discriminant 4a³ + 27b² vanished mod p, so the curve has a
    /// repeated root and its points do not form a group
    #[error("singular curve: discriminant 4a³ + 27b² ≡ 0 (mod {p})")]
    SingularCurve {
        /// Prime modulus of the rejected curve
        p: BigUint,
    },

    /// gcd(value, modulus) ≠ 1, so no inverse exists. This is a routine
    /// outcome on teaching curves whose generator order is composite, not an
    /// internal fault
    #[error("no modular inverse exists for {value} (mod {modulus})")]
    NoModularInverse {
        /// The value that has no inverse
        value: BigUint,
        /// The modulus it was inverted against
        modulus: BigUint,
    },

    /// A caller-supplied nonce produced a degenerate signature component
    #[error("unusable nonce: {reason}")]
    UnusableNonce {
        /// Which component degenerated
        reason: &'static str,
    },

    /// The bounded retry loop in signing never produced a usable (r, s)
    #[error("no usable signature after {attempts} attempts; the generator order is unsuitable for signing")]
    SignatureExhausted {
        /// How many nonces were tried
        attempts: usize,
    },

    /// A key container was missing required fields or failed to parse in
    /// both the canonical and readable encodings
    #[error("malformed key file: {0}")]
    MalformedKeyFile(String),

    /// A signature container was missing its payload or the payload did not
    /// decode to signature components
    #[error("malformed signature file: {0}")]
    MalformedSignatureFile(String),

    /// File access failure in one of the codec helpers
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;
