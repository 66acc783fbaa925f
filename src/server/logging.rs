//! Logging setup for the server binary.
//!
//! Logs go to stderr. `RUST_LOG` wins when set; otherwise the level comes
//! from the `-v` count.

use tracing_subscriber::{EnvFilter, fmt};

/// Maps a verbosity count to a filter directive.
/// 0 = info, 1 = debug, 2+ = trace
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Call once at startup.
pub fn init_logging(verbosity: u8) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for_verbosity(verbosity))
    };

    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
