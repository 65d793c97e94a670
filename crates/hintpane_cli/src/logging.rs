//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::GlobalArgs;

/// Picks the log filter used when `RUST_LOG` is not set.
pub fn default_filter(global: &GlobalArgs) -> &'static str {
    if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs a stderr subscriber. Stdout is reserved for reports.
pub fn init(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(global)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "hintpane starting");
    Ok(())
}
