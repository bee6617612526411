// ABOUTME: OpenSSH private key serialization with optional passphrase sealing.
// ABOUTME: KeySealer decides whether the key is encrypted before PEM wrapping.

use crate::error::{KeygenError, Result};
use ssh_key::{LineEnding, PrivateKey};

/// PEM label of an OpenSSH private key container.
pub const OPENSSH_PEM_LABEL: &str = "OPENSSH PRIVATE KEY";

/// Step applied to a private key before it is serialized.
pub trait KeySealer {
    /// Return the key that should be written out.
    ///
    /// # Errors
    /// Returns `KeygenError::Encode` if sealing fails.
    fn seal(&self, key: PrivateKey) -> Result<PrivateKey>;
}

/// Writes the key unencrypted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl KeySealer for Passthrough {
    fn seal(&self, key: PrivateKey) -> Result<PrivateKey> {
        Ok(key)
    }
}

/// Encrypts the key with bcrypt-pbkdf and AES-256-CTR, using a fresh salt
/// on every call.
pub struct PassphraseSealer<'a> {
    passphrase: &'a [u8],
}

impl<'a> PassphraseSealer<'a> {
    pub fn new(passphrase: &'a [u8]) -> Self {
        Self { passphrase }
    }
}

impl KeySealer for PassphraseSealer<'_> {
    fn seal(&self, key: PrivateKey) -> Result<PrivateKey> {
        key.encrypt(&mut rand::thread_rng(), self.passphrase)
            .map_err(KeygenError::Encode)
    }
}

/// Pick the sealer for a passphrase: empty means passthrough.
pub fn sealer_for(passphrase: &[u8]) -> Box<dyn KeySealer + '_> {
    if passphrase.is_empty() {
        Box::new(Passthrough)
    } else {
        Box::new(PassphraseSealer::new(passphrase))
    }
}

/// Seal a private key and encode it as an OpenSSH PEM block with LF line endings.
///
/// # Errors
/// Returns `KeygenError::Encode` if sealing or serialization fails.
pub fn encode_private_key(key: PrivateKey, sealer: &dyn KeySealer) -> Result<Vec<u8>> {
    let sealed = sealer.seal(key)?;
    let pem = sealed
        .to_openssh(LineEnding::LF)
        .map_err(KeygenError::Encode)?;

    Ok(pem.as_bytes().to_vec())
}
