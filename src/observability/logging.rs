//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the CLI
//! - Resolve the log level from environment and configuration
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - Logs go to stderr so command output on stdout stays machine-readable
//! - The library never installs a subscriber on its own

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` if set and valid, else `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    // Both cases share one test so nothing else observes RUST_LOG mid-change.
    #[test]
    fn test_env_filter_prefers_rust_log() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));

        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::WARN));

        std::env::remove_var("RUST_LOG");
    }
}
