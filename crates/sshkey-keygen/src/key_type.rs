// ABOUTME: Supported SSH key algorithms and their string forms.
// ABOUTME: Defines KeyType plus the advertised RSA bit sizes and defaults.

use crate::error::KeygenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default RSA modulus size when none is requested.
pub const RSA_DEFAULT_BITS: u16 = 4096;

/// RSA sizes advertised to callers that validate user input.
pub const SSH_RSA_BITS: [u16; 3] = [1024, 2048, 4096];

/// Every supported key type, in the order they are advertised.
pub const SSH_KEY_TYPES: [KeyType; 3] = [KeyType::Rsa, KeyType::Ed25519, KeyType::Ecdsa];

/// A type of SSH key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Rsa,
    Ed25519,
    Ecdsa,
}

impl KeyType {
    /// String form used by collaborators (`"rsa"`, `"ed25519"`, `"ecdsa"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Rsa => "rsa",
            KeyType::Ed25519 => "ed25519",
            KeyType::Ecdsa => "ecdsa",
        }
    }

    /// Algorithm identifier that prefixes an authorized_keys line for this type.
    pub fn ssh_algorithm(&self) -> &'static str {
        match self {
            KeyType::Rsa => "ssh-rsa",
            KeyType::Ed25519 => "ssh-ed25519",
            KeyType::Ecdsa => "ecdsa-sha2-nistp384",
        }
    }

    /// Resolve the effective bit size for a request. Only RSA has a default;
    /// every other value passes through untouched.
    pub fn resolve_bits(&self, bits: u16) -> u16 {
        if bits == 0 && *self == KeyType::Rsa {
            RSA_DEFAULT_BITS
        } else {
            bits
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = KeygenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rsa" => Ok(KeyType::Rsa),
            "ed25519" => Ok(KeyType::Ed25519),
            "ecdsa" => Ok(KeyType::Ecdsa),
            other => Err(KeygenError::UnsupportedKeyType(other.to_string())),
        }
    }
}
