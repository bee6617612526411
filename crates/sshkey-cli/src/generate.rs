// ABOUTME: The generate command: merge flags with config, validate, and build a key pair
// ABOUTME: Optionally writes the private and public key files to disk

use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::{bail, Context, Result};
use sshkey_keygen::{
    KeyPairConfig, KeyPairRecord, KeyType, KeygenError, SshKeyPair, SSH_KEY_TYPES, SSH_RSA_BITS,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Flags given to `sshkey generate`. Unset values fall back to the config file.
#[derive(Debug, Default, Clone)]
pub struct GenerateArgs {
    pub key_type: Option<String>,
    pub bits: Option<u16>,
    pub comment: Option<String>,
    pub passphrase: Option<String>,
    pub format: Option<OutputFormat>,
    pub out: Option<PathBuf>,
}

/// A fully resolved generate request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub config: KeyPairConfig,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
}

impl GenerateRequest {
    /// Merge flags over config defaults and validate the result.
    pub fn resolve(args: GenerateArgs, defaults: &CliConfig) -> Result<Self> {
        let key_type = match args.key_type {
            Some(value) => value.parse::<KeyType>()?,
            None => defaults
                .key_type
                .context("No key type given; pass --type or set `type` in the config file")?,
        };
        let bits = args.bits.or(defaults.bits).unwrap_or(0);
        validate_bits(bits)?;

        let mut config = KeyPairConfig::new(key_type).with_bits(bits);
        if let Some(comment) = args.comment.or_else(|| defaults.comment.clone()) {
            config = config.with_comment(comment);
        }
        if let Some(passphrase) = args.passphrase {
            config = config.with_passphrase(passphrase);
        }

        Ok(Self {
            config,
            format: args.format.or(defaults.format).unwrap_or_default(),
            out: args.out,
        })
    }
}

/// Reject bit sizes outside the advertised set. Zero means "use the default".
pub fn validate_bits(bits: u16) -> Result<()> {
    if bits != 0 && !SSH_RSA_BITS.contains(&bits) {
        bail!(
            "Unsupported key size {bits}; expected one of {}",
            join(SSH_RSA_BITS.iter())
        );
    }
    Ok(())
}

/// Generate the key pair described by `request` and flatten it into a record.
pub fn generate(request: &GenerateRequest) -> Result<KeyPairRecord> {
    let pair = SshKeyPair::new(request.config.clone()).context("Key generation failed")?;
    let record = pair.to_record().context("Key encoding failed")?;

    info!(key_type = %record.key_type, fingerprint = %record.fingerprint_sha256, "Generated key pair");
    Ok(record)
}

/// Write the private key to `path` (0600 on Unix) and the public key to `path.pub`.
pub fn write_key_files(record: &KeyPairRecord, path: &Path) -> Result<PathBuf, KeygenError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(KeygenError::Filesystem)?;
    }

    std::fs::write(path, record.private_key.as_bytes()).map_err(KeygenError::Filesystem)?;

    // Set restrictive permissions on Unix (0600 = rw-------)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .map_err(KeygenError::Filesystem)?;
    }

    let mut pub_path = path.as_os_str().to_owned();
    pub_path.push(".pub");
    let pub_path = PathBuf::from(pub_path);

    let mut public_key = record.public_key.trim_end().to_string();
    public_key.push('\n');
    std::fs::write(&pub_path, public_key).map_err(KeygenError::Filesystem)?;

    Ok(pub_path)
}

/// Text listing of supported key types and RSA sizes.
pub fn describe_types() -> String {
    format!(
        "Key types: {}\nRSA bits:  {} (default {})\n",
        join(SSH_KEY_TYPES.iter()),
        join(SSH_RSA_BITS.iter()),
        sshkey_keygen::RSA_DEFAULT_BITS
    )
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}
