//! tracing subscriber setup for the binary
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so embedding callers keep control of their own output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "TRIPSPLIT_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter from `TRIPSPLIT_LOG`, falling back to `default_level`
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global tracing subscriber, writing to stderr
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(build_filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_is_used_without_env() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        let filter = build_filter("tripsplit=debug");
        assert!(filter.to_string().contains("tripsplit=debug"));
    }
}
