use tracing_subscriber::EnvFilter;

/// Takes precedence over `--verbose` when set, e.g. `SAYINGS_LOG=sayings=trace`.
const LOG_ENV: &str = "SAYINGS_LOG";

/// Installs a fmt subscriber on stderr. Stdout is reserved for command output.
pub(super) fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Already installed (e.g. by a test harness) is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
