//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the client logs at info.

use tracing_subscriber::EnvFilter;

/// Default filter directive
pub const DEFAULT_FILTER: &str = "desk_client=info";

/// Initialize the logger, as JSON lines when `json` is set.
pub fn init_logger(json: bool) {
    init_logger_with(None, json);
}

/// Initialize the logger with an explicit fallback filter and output format.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger_with(default_filter: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or(DEFAULT_FILTER)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_init_is_harmless() {
        init_logger_with(Some("desk_client=debug"), true);
        init_logger(false);
        tracing::info!(kind = "sale", "logger ready");
    }
}
