//! Signature containers: message text plus a base64 (r, s) payload

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::ecdsa::Signature;
use crate::error::{Error, Result};

/// Serialize a signed message: the message lines followed by one base64
/// line that decodes to `r=<int>\ns=<int>`
pub fn encode_signature(message: &str, signature: &Signature) -> String {
    let payload = format!("r={}\ns={}", signature.r, signature.s);
    format!("{}\n{}", message, STANDARD.encode(payload.as_bytes()))
}

/// Parse a signature container
///
/// The final line is the encoded signature; every preceding line belongs to
/// the (possibly multi-line) message.
pub fn decode_signature(text: &str) -> Result<(String, Signature)> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Err(Error::MalformedSignatureFile(
            "expected message line(s) followed by a base64 signature line".into(),
        ));
    }

    let payload_line = lines[lines.len() - 1].trim();
    let bytes = STANDARD
        .decode(payload_line)
        .map_err(|e| Error::MalformedSignatureFile(format!("signature payload is not base64: {e}")))?;
    let payload = String::from_utf8(bytes).map_err(|_| {
        Error::MalformedSignatureFile("signature payload is not valid UTF-8".into())
    })?;

    let mut r = None;
    let mut s = None;
    for line in payload.lines() {
        if let Some(value) = line.strip_prefix("r=") {
            r = Some(value.trim().parse().map_err(|_| {
                Error::MalformedSignatureFile("component r is not an integer".into())
            })?);
        } else if let Some(value) = line.strip_prefix("s=") {
            s = Some(value.trim().parse().map_err(|_| {
                Error::MalformedSignatureFile("component s is not an integer".into())
            })?);
        }
    }

    let r = r.ok_or_else(|| Error::MalformedSignatureFile("missing component r".into()))?;
    let s = s.ok_or_else(|| Error::MalformedSignatureFile("missing component s".into()))?;
    Ok((lines[..lines.len() - 1].join("\n"), Signature { r, s }))
}

/// Write a signature container to a file
pub fn write_signature_file(
    path: impl AsRef<Path>,
    message: &str,
    signature: &Signature,
) -> Result<()> {
    let mut text = encode_signature(message, signature);
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

/// Read a signature container from a file
pub fn read_signature_file(path: impl AsRef<Path>) -> Result<(String, Signature)> {
    decode_signature(&fs::read_to_string(path)?)
}
