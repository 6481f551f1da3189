//! Logging Infrastructure
//!
//! Structured logging setup for the embedding shell. Level comes from
//! `RUST_LOG` when set.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the logger with a default level used when `RUST_LOG` is unset
pub fn init_logger_with_level(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
