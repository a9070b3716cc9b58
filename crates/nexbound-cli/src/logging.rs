use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so REPL output on
/// stdout stays clean. `RUST_LOG` takes precedence over the default filter.
pub fn init(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "nexbound=debug"
    } else {
        "nexbound=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
