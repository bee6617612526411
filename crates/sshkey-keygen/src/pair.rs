// ABOUTME: SSH key pair factory and on-demand derivations.
// ABOUTME: Generates RSA/Ed25519/ECDSA keys and derives PEM, authorized_keys, and fingerprints.

use crate::config::KeyPairConfig;
use crate::encoding::{encode_private_key, sealer_for};
use crate::error::{KeygenError, Result};
use crate::fingerprint::{md5_fingerprint, sha256_fingerprint};
use crate::identity::{IdentityProvider, SystemIdentity};
use crate::key_type::KeyType;
use serde::Serialize;
use ssh_key::private::{EcdsaKeypair, Ed25519Keypair, KeypairData, RsaKeypair};
use ssh_key::{Algorithm, EcdsaCurve, PrivateKey, PublicKey};
use tracing::debug;

/// Raw private key material, one variant per supported algorithm.
#[derive(Clone, Debug)]
pub enum KeyMaterial {
    Rsa(RsaKeypair),
    Ed25519(Ed25519Keypair),
    Ecdsa(EcdsaKeypair),
}

impl KeyMaterial {
    /// Key type matching this variant.
    pub fn key_type(&self) -> KeyType {
        match self {
            KeyMaterial::Rsa(_) => KeyType::Rsa,
            KeyMaterial::Ed25519(_) => KeyType::Ed25519,
            KeyMaterial::Ecdsa(_) => KeyType::Ecdsa,
        }
    }

    fn generate(key_type: KeyType, bits: u16) -> Result<Self> {
        let mut rng = rand::thread_rng();

        match key_type {
            KeyType::Ed25519 => {
                PrivateKey::random(&mut rng, Algorithm::Ed25519)
                    .map_err(KeygenError::Generate)?
                    .try_into()
            }
            KeyType::Ecdsa => {
                let algorithm = Algorithm::Ecdsa {
                    curve: EcdsaCurve::NistP384,
                };
                PrivateKey::random(&mut rng, algorithm)
                    .map_err(KeygenError::Generate)?
                    .try_into()
            }
            KeyType::Rsa => {
                let key = rsa::RsaPrivateKey::new(&mut rng, usize::from(bits))
                    .map_err(KeygenError::Rsa)?;
                key.validate().map_err(KeygenError::Validate)?;

                RsaKeypair::try_from(&key)
                    .map(KeyMaterial::Rsa)
                    .map_err(KeygenError::Generate)
            }
        }
    }
}

impl TryFrom<PrivateKey> for KeyMaterial {
    type Error = KeygenError;

    fn try_from(key: PrivateKey) -> Result<Self> {
        match key.key_data() {
            KeypairData::Rsa(rsa) => Ok(KeyMaterial::Rsa(rsa.clone())),
            KeypairData::Ed25519(ed) => Ok(KeyMaterial::Ed25519(ed.clone())),
            KeypairData::Ecdsa(ecdsa) => Ok(KeyMaterial::Ecdsa(ecdsa.clone())),
            KeypairData::Encrypted(_) => Err(KeygenError::MissingKeys),
            other => Err(KeygenError::UnsupportedKeyType(
                other
                    .algorithm()
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
            )),
        }
    }
}

impl From<KeyMaterial> for KeypairData {
    fn from(material: KeyMaterial) -> Self {
        match material {
            KeyMaterial::Rsa(rsa) => KeypairData::from(rsa),
            KeyMaterial::Ed25519(ed) => KeypairData::from(ed),
            KeyMaterial::Ecdsa(ecdsa) => KeypairData::from(ecdsa),
        }
    }
}

/// A generated SSH key pair.
///
/// All fields are fixed at construction. The PEM, public key and fingerprints
/// are derived from the private key on every call.
#[derive(Clone)]
pub struct SshKeyPair {
    key_type: KeyType,
    bits: u16,
    comment: String,
    passphrase: Vec<u8>,
    material: KeyMaterial,
}

impl SshKeyPair {
    /// Generate a key pair, resolving an empty comment from the running
    /// user and host.
    ///
    /// # Errors
    /// Returns an error if key generation or the RSA consistency check fails.
    pub fn new(config: KeyPairConfig) -> Result<Self> {
        Self::with_identity(config, &SystemIdentity)
    }

    /// Generate a key pair using `identity` to derive a default comment.
    ///
    /// # Errors
    /// Returns an error if key generation or the RSA consistency check fails.
    pub fn with_identity(config: KeyPairConfig, identity: &dyn IdentityProvider) -> Result<Self> {
        let KeyPairConfig {
            key_type,
            bits,
            comment,
            passphrase,
        } = config;

        let comment = if comment.is_empty() {
            identity.default_comment()
        } else {
            comment
        };
        let bits = key_type.resolve_bits(bits);

        debug!(%key_type, bits, encrypted = !passphrase.is_empty(), "Generating SSH key pair");
        let material = KeyMaterial::generate(key_type, bits)?;

        Ok(Self {
            key_type,
            bits,
            comment,
            passphrase,
            material,
        })
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Effective bit size. For RSA this is the modulus size actually generated.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn passphrase(&self) -> &[u8] {
        &self.passphrase
    }

    /// The raw private key material.
    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    /// Build an unencrypted ssh-key private key carrying the comment.
    fn private_key(&self) -> Result<PrivateKey> {
        if self.material.key_type() != self.key_type {
            return Err(KeygenError::UnsupportedKeyType(self.key_type.to_string()));
        }

        PrivateKey::new(KeypairData::from(self.material.clone()), self.comment.as_str())
            .map_err(KeygenError::Encode)
    }

    /// Public half of the key without a comment.
    fn public_key_raw(&self) -> Result<PublicKey> {
        let private_key = self.private_key()?;
        Ok(PublicKey::from(private_key.public_key().key_data().clone()))
    }

    /// The private key in OpenSSH PEM format, encrypted when a passphrase was set.
    ///
    /// # Errors
    /// Returns an error if sealing or serialization fails.
    pub fn private_key_pem(&self) -> Result<Vec<u8>> {
        let private_key = self.private_key()?;
        encode_private_key(private_key, sealer_for(&self.passphrase).as_ref())
    }

    /// The public key as an authorized_keys line: `<algorithm> <base64> <comment>`.
    ///
    /// The comment is appended verbatim, so a default `user@host\n` comment
    /// keeps its trailing newline. No suffix is added when the comment is empty.
    ///
    /// # Errors
    /// Returns `KeygenError::Encode` if the key cannot be serialized.
    pub fn public_key(&self) -> Result<Vec<u8>> {
        let encoded = self
            .public_key_raw()?
            .to_openssh()
            .map_err(KeygenError::Encode)?;

        let mut line = encoded.trim().as_bytes().to_vec();
        if !self.comment.is_empty() {
            line.push(b' ');
            line.extend_from_slice(self.comment.as_bytes());
        }

        Ok(line)
    }

    /// Legacy MD5 fingerprint of the public key (`aa:bb:...`).
    ///
    /// # Errors
    /// Returns `KeygenError::Encode` if the key cannot be serialized.
    pub fn md5(&self) -> Result<String> {
        md5_fingerprint(&self.public_key_raw()?)
    }

    /// SHA256 fingerprint of the public key (`SHA256:...`).
    ///
    /// # Errors
    /// Returns `KeygenError::Encode` if the key cannot be serialized.
    pub fn sha256(&self) -> Result<String> {
        sha256_fingerprint(&self.public_key_raw()?)
    }

    /// Flatten every derivation into a serializable record.
    ///
    /// # Errors
    /// Returns the first derivation error encountered.
    pub fn to_record(&self) -> Result<KeyPairRecord> {
        let sha256 = self.sha256()?;

        Ok(KeyPairRecord {
            id: sha256.clone(),
            key_type: self.key_type,
            bits: self.bits,
            comment: self.comment.clone(),
            private_key: String::from_utf8_lossy(&self.private_key_pem()?).into_owned(),
            public_key: String::from_utf8_lossy(&self.public_key()?).into_owned(),
            fingerprint_md5: self.md5()?,
            fingerprint_sha256: sha256,
        })
    }
}

impl std::fmt::Debug for SshKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SshKeyPair")
            .field("key_type", &self.key_type)
            .field("bits", &self.bits)
            .field("comment", &self.comment)
            .field("encrypted", &!self.passphrase.is_empty())
            .finish_non_exhaustive()
    }
}

/// Flat view of a generated key pair, identified by its SHA256 fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct KeyPairRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub key_type: KeyType,
    pub bits: u16,
    pub comment: String,
    pub private_key: String,
    pub public_key: String,
    pub fingerprint_md5: String,
    pub fingerprint_sha256: String,
}
