//! Diagnostic logging to stderr, filtered by `LEAVEPLANNER_LOG`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LEAVEPLANNER_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
