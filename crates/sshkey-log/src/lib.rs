// ABOUTME: Shared logging setup for sshkey binaries
// ABOUTME: init() for quiet stderr logging, init_for() for crate-scoped verbosity

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Standard logging to stderr. Default: WARN level, RUST_LOG override.
/// Stdout is left alone so generated keys can be piped.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();
}

/// Crate-filtered logging to stderr at `level` for the named crate and WARN
/// for everything else. Used when the CLI runs with `--verbose`.
pub fn init_for(crate_name: &str, level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter_for(crate_name, level))
        .init();
}

fn filter_for(crate_name: &str, level: Level) -> EnvFilter {
    let directive = format!("{crate_name}={level}");
    EnvFilter::from_default_env()
        .add_directive(Level::WARN.into())
        .add_directive(directive.parse().unwrap_or_else(|_| level.into()))
}
