// ABOUTME: Rendering of generated key pairs for the terminal
// ABOUTME: Plain text for humans or JSON for scripts

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sshkey_keygen::KeyPairRecord;
use std::fmt::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a record. When `include_private` is false the private key is left
/// out of the text form and blanked in the JSON form.
pub fn render(record: &KeyPairRecord, format: OutputFormat, include_private: bool) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut record = record.clone();
            if !include_private {
                record.private_key.clear();
            }
            serde_json::to_string_pretty(&record).context("Failed to serialize key pair")
        }
        OutputFormat::Text => Ok(render_text(record, include_private)),
    }
}

fn render_text(record: &KeyPairRecord, include_private: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Type:        {}", record.key_type);
    if record.bits > 0 {
        let _ = writeln!(out, "Bits:        {}", record.bits);
    }
    let _ = writeln!(out, "MD5:         {}", record.fingerprint_md5);
    let _ = writeln!(out, "SHA256:      {}", record.fingerprint_sha256);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", record.public_key.trim_end());
    if include_private {
        let _ = writeln!(out);
        out.push_str(&record.private_key);
    }
    out
}
