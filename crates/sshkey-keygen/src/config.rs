// ABOUTME: Input configuration for the key pair factory.
// ABOUTME: KeyPairConfig carries type, RSA bits, comment, and optional passphrase.

use crate::error::Result;
use crate::key_type::KeyType;

/// Parameters for generating a new SSH key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPairConfig {
    /// Algorithm to generate.
    pub key_type: KeyType,
    /// RSA modulus size. `0` selects the default; ignored for other types.
    pub bits: u16,
    /// Key comment. Empty means derive `user@host` at generation time.
    pub comment: String,
    /// Passphrase protecting the private key. Empty means unencrypted.
    pub passphrase: Vec<u8>,
}

impl KeyPairConfig {
    pub fn new(key_type: KeyType) -> Self {
        Self {
            key_type,
            bits: 0,
            comment: String::new(),
            passphrase: Vec::new(),
        }
    }

    /// Build a config from the string form of a key type.
    ///
    /// # Errors
    /// Returns `KeygenError::UnsupportedKeyType` for anything other than
    /// `rsa`, `ed25519` or `ecdsa`.
    pub fn from_type_str(key_type: &str) -> Result<Self> {
        Ok(Self::new(key_type.parse()?))
    }

    pub fn with_bits(mut self, bits: u16) -> Self {
        self.bits = bits;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<Vec<u8>>) -> Self {
        self.passphrase = passphrase.into();
        self
    }
}

// Keep the passphrase out of logs.
impl std::fmt::Debug for KeyPairConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPairConfig")
            .field("key_type", &self.key_type)
            .field("bits", &self.bits)
            .field("comment", &self.comment)
            .field("passphrase", &format_args!("<{} bytes>", self.passphrase.len()))
            .finish()
    }
}
