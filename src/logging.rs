//! Log output for the command-line tool.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MAMBA_LOG";

/// Install a stderr subscriber.
///
/// `verbose` forces `debug`; otherwise the filter comes from `MAMBA_LOG`,
/// defaulting to `warn`. Does nothing if a subscriber is already set.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
