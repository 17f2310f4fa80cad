//! Log setup for the `aoc` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `AOC_LOG=debug`.
pub const LOG_ENV: &str = "AOC_LOG";

/// Install a stderr subscriber. `AOC_LOG` overrides the default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
