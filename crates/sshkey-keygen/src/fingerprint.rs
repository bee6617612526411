// ABOUTME: SSH public key fingerprint computation.
// ABOUTME: Produces the legacy MD5 colon-hex form and the OpenSSH SHA256 base64 form.

use crate::error::{KeygenError, Result};
use base64::Engine;
use md5::Md5;
use sha2::{Digest, Sha256};
use ssh_key::PublicKey;

/// Serialize a public key in SSH wire format (RFC 4253 section 6.6).
///
/// This is the blob that appears base64 encoded in an authorized_keys line
/// and the input every fingerprint is computed over.
pub fn wire_bytes(public_key: &PublicKey) -> Result<Vec<u8>> {
    public_key.to_bytes().map_err(KeygenError::Encode)
}

/// Legacy MD5 fingerprint: lowercase hex byte pairs joined by colons,
/// e.g. `c1:b1:30:29:d7:b8:de:6c:97:77:10:d7:46:41:63:87`.
///
/// # Errors
/// Returns `KeygenError::Encode` if the key cannot be serialized.
pub fn md5_fingerprint(public_key: &PublicKey) -> Result<String> {
    let digest = Md5::digest(wire_bytes(public_key)?);
    Ok(colon_hex(&digest))
}

/// SHA256 fingerprint in the form printed by `ssh-keygen -l`:
/// `SHA256:` followed by unpadded standard base64.
///
/// # Errors
/// Returns `KeygenError::Encode` if the key cannot be serialized.
pub fn sha256_fingerprint(public_key: &PublicKey) -> Result<String> {
    let digest = Sha256::digest(wire_bytes(public_key)?);
    Ok(format!(
        "SHA256:{}",
        base64::engine::general_purpose::STANDARD_NO_PAD.encode(digest)
    ))
}

fn colon_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(":")
}
