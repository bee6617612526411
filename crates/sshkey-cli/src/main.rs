// ABOUTME: Entry point for the sshkey command.
// ABOUTME: Dispatches to the generate, types, and version subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sshkey_cli::config::CliConfig;
use sshkey_cli::generate::{self, GenerateArgs, GenerateRequest};
use sshkey_cli::output::{self, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sshkey")]
#[command(about = "Generate OpenSSH key pairs")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults to ~/.config/sshkey/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new key pair
    Generate {
        /// Key type: rsa, ed25519 or ecdsa
        #[arg(short = 't', long = "type")]
        key_type: Option<String>,

        /// RSA key size in bits (1024, 2048 or 4096; default 4096)
        #[arg(short, long)]
        bits: Option<u16>,

        /// Key comment (defaults to user@host)
        #[arg(short = 'C', long)]
        comment: Option<String>,

        /// Passphrase used to encrypt the private key
        #[arg(long, env = "SSHKEY_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the private key to this path and the public key to PATH.pub
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List supported key types and RSA sizes
    Types,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        sshkey_log::init_for("sshkey_keygen", tracing::Level::DEBUG);
    } else {
        sshkey_log::init();
    }

    match cli.command {
        Commands::Generate {
            key_type,
            bits,
            comment,
            passphrase,
            format,
            out,
        } => {
            let defaults = CliConfig::load(cli.config.as_deref())?;
            let args = GenerateArgs {
                key_type,
                bits,
                comment,
                passphrase,
                format,
                out,
            };
            run_generate(GenerateRequest::resolve(args, &defaults)?)
        }
        Commands::Types => {
            print!("{}", generate::describe_types());
            Ok(())
        }
        Commands::Version => {
            println!("sshkey {}", sshkey_cli::VERSION);
            Ok(())
        }
    }
}

fn run_generate(request: GenerateRequest) -> Result<()> {
    let record = generate::generate(&request)?;

    if let Some(path) = &request.out {
        let pub_path = generate::write_key_files(&record, path)
            .with_context(|| format!("Failed to write key to {}", path.display()))?;
        eprintln!("Private: {}", path.display());
        eprintln!("Public:  {}", pub_path.display());
    }

    print!(
        "{}",
        output::render(&record, request.format, request.out.is_none())?
    );
    if request.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
