//! Dual-format text containers for keys and signatures
//!
//! Keys travel in a PEM-like bordered container that carries the same
//! material twice: a human-readable `key=value` block for study, and a
//! base64 line that decodes to the identical text and serves as the
//! canonical payload for round-trip-safe transport. Import prefers the
//! canonical payload whenever its section header is present and the payload
//! parses, and falls back to the readable block otherwise.
//!
//! Signatures use a two-line container: the original message (which may
//! itself span several lines) followed by one base64 line that decodes to
//! `r=<int>\ns=<int>`.
//!
//! All file helpers go through `std::fs`, which scopes the underlying
//! handle to the call and releases it on every exit path.

mod key;
mod signature;

#[cfg(test)]
mod tests;

pub use key::{
    decode_private_key, decode_public_key, encode_private_key, encode_public_key,
    read_private_key_file, read_public_key_file, write_private_key_file, write_public_key_file,
};
pub use signature::{
    decode_signature, encode_signature, read_signature_file, write_signature_file,
};
