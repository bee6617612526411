// ABOUTME: Error types for SSH key pair operations using thiserror.
// ABOUTME: Covers unsupported key types, missing keys, generation, and encoding failures.

use thiserror::Error;

/// Errors that can occur while generating or encoding an SSH key pair.
#[derive(Error, Debug)]
pub enum KeygenError {
    /// The requested or stored key type is not rsa, ed25519 or ecdsa.
    #[error("unsupported key type{}", display_type(.0))]
    UnsupportedKeyType(String),

    /// A derivation ran against a key pair whose private key is absent.
    #[error("missing one or more keys; did something happen to them after they were generated?")]
    MissingKeys,

    /// Failure persisting key material. Raised by callers that write keys to disk.
    #[error("filesystem error: {0}")]
    Filesystem(#[source] std::io::Error),

    /// Failed to generate Ed25519 or ECDSA key material.
    #[error("failed to generate key: {0}")]
    Generate(#[source] ssh_key::Error),

    /// Failed to generate RSA key material.
    #[error("failed to generate key: {0}")]
    Rsa(#[source] rsa::Error),

    /// The generated RSA key failed its consistency check.
    #[error("failed to validate key: {0}")]
    Validate(#[source] rsa::Error),

    /// Failed to encrypt or serialize key material.
    #[error("failed to encode key: {0}")]
    Encode(#[source] ssh_key::Error),
}

fn display_type(key_type: &str) -> String {
    if key_type.is_empty() {
        String::new()
    } else {
        format!(": {key_type}")
    }
}

/// Result type alias using KeygenError.
pub type Result<T> = std::result::Result<T, KeygenError>;
