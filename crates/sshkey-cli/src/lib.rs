// ABOUTME: CLI library components for the sshkey command.
// ABOUTME: Config loading, request resolution, key file writing, and output rendering.

//! # sshkey-cli
//!
//! Command-line front end for `sshkey-keygen`.
//!
//! ```text
//! sshkey
//! ├── generate --type <rsa|ed25519|ecdsa>   # Generate a key pair
//! │     [--bits N] [--comment C] [--passphrase P]
//! │     [--format text|json] [--out PATH]
//! ├── types                                  # List key types and RSA sizes
//! └── version                                # Show version info
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Print a new ed25519 key pair
//! sshkey generate --type ed25519
//!
//! # Write an encrypted RSA key to ./id_rsa and ./id_rsa.pub
//! SSHKEY_PASSPHRASE=secret sshkey generate --type rsa --bits 2048 --out id_rsa
//!
//! # JSON for scripts
//! sshkey generate --type ecdsa --format json
//! ```

pub mod config;
pub mod generate;
pub mod output;

/// Version of the sshkey CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
