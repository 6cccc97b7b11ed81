//! Common logger configuration for SDK consumers and tests.
//!
//! The SDK crates only emit `tracing` events; they never install a subscriber
//! themselves. Binaries call [`init`] once at startup, tests call
//! [`init_for_testing`].

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{
    filter::Targets,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

/// The log target used for wire-level decode events in `sdk-objects`, e.g.
/// unknown enum tokens falling back to `Undefined`.
pub const WIRE_TARGET: &str = "sdk_objects::wire";

/// Initialize a global `tracing` logger.
///
/// + The logger will print enabled `tracing` events and spans to stdout.
/// + The default log level includes INFO, WARN, and ERROR events.
/// + You can change the log level or module filtering with an appropriate
///   `RUST_LOG` env var set, e.g. `RUST_LOG=info,sdk_objects::wire=debug` to
///   see every unknown wire token the SDK tolerated. Read more here:
///   <https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/targets/struct.Targets.html>
///
/// Panics if a logger is already initialized. This will fail if used in tests,
/// since multiple test threads will compete to set the global logger.
pub fn init() {
    try_init().expect("Failed to setup logger");
}

/// Use this to initialize the global logger in tests.
pub fn init_for_testing() {
    // Quickly skip logger setup if no env var set.
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    // Don't panic if there's already a logger setup. Multiple tests might try
    // setting the global logger.
    let _ = try_init();
}

/// Try to initialize a global logger. Will return an `Err` if there is another
/// global logger already set.
pub fn try_init() -> Result<(), TryInitError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = targets_filter(rust_log.as_deref());

    let stdout_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_level(true)
        .with_target(true)
        .with_ansi(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stdout_log).try_init()
}

/// Build the [`Targets`] filter from a `RUST_LOG` value.
///
/// Defaults to INFO logs if `RUST_LOG` is unset or we can't parse it.
pub fn targets_filter(rust_log: Option<&str>) -> Targets {
    rust_log
        .and_then(|rust_log| Targets::from_str(rust_log).ok())
        .unwrap_or_else(|| Targets::new().with_default(Level::INFO))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_filter_is_info() {
        let filter = targets_filter(None);
        assert!(filter.would_enable("sdk_objects", &Level::INFO));
        assert!(!filter.would_enable("sdk_objects", &Level::DEBUG));
        assert!(!filter.would_enable(WIRE_TARGET, &Level::DEBUG));
    }

    #[test]
    fn rust_log_can_enable_wire_debug() {
        let filter = targets_filter(Some("info,sdk_objects::wire=debug"));
        assert!(filter.would_enable(WIRE_TARGET, &Level::DEBUG));
        assert!(!filter.would_enable("sdk_objects::fragment", &Level::DEBUG));
    }

    #[test]
    fn unparseable_rust_log_falls_back_to_info() {
        let filter = targets_filter(Some("sdk_objects=not_a_level"));
        assert!(filter.would_enable("anything", &Level::INFO));
        assert!(!filter.would_enable("anything", &Level::DEBUG));
    }

    #[test]
    fn init_for_testing_is_idempotent() {
        init_for_testing();
        init_for_testing();
    }
}
