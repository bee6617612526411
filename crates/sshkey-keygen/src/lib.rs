// ABOUTME: SSH key pair generation and OpenSSH encoding.
// ABOUTME: Creates RSA/Ed25519/ECDSA keys, PEM private keys, authorized_keys lines, and fingerprints.

//! # sshkey-keygen
//!
//! Generates SSH key pairs and renders them in the formats OpenSSH uses.
//!
//! ## Features
//!
//! - **Generation**: RSA (default 4096 bits, consistency-checked), Ed25519, and
//!   ECDSA on NIST P-384
//! - **Private keys**: OpenSSH PEM containers, passphrase-encrypted on request
//! - **Public keys**: single `authorized_keys` lines with the key comment appended
//! - **Fingerprints**: legacy MD5 colon-hex and `SHA256:` base64
//!
//! ## Example
//!
//! ```no_run
//! use sshkey_keygen::{KeyPairConfig, KeyType, SshKeyPair};
//!
//! let config = KeyPairConfig::new(KeyType::Ed25519).with_comment("deploy@ci");
//! let pair = SshKeyPair::new(config).expect("key should generate");
//!
//! let public_key = pair.public_key().expect("public key should encode");
//! println!("{}", String::from_utf8_lossy(&public_key));
//! println!("Fingerprint: {}", pair.sha256().expect("fingerprint should compute"));
//! ```

mod config;
mod encoding;
mod error;
mod fingerprint;
mod identity;
mod key_type;
mod pair;

pub use config::KeyPairConfig;
pub use encoding::{
    encode_private_key, sealer_for, KeySealer, PassphraseSealer, Passthrough, OPENSSH_PEM_LABEL,
};
pub use error::{KeygenError, Result};
pub use fingerprint::{md5_fingerprint, sha256_fingerprint, wire_bytes};
pub use identity::{IdentityProvider, StaticIdentity, SystemIdentity};
pub use key_type::{KeyType, RSA_DEFAULT_BITS, SSH_KEY_TYPES, SSH_RSA_BITS};
pub use pair::{KeyMaterial, KeyPairRecord, SshKeyPair};

// Re-export ssh_key types for convenience
pub use ssh_key::{PrivateKey, PublicKey};
