//! Opt-in logging setup for the sift crates.
//!
//! Converters emit structured `tracing` events: a `debug!` per rendered
//! query and one per operation a dialect drops. Applications with their own
//! subscriber pick those up automatically and can ignore this module; for
//! everything else, [`init`] installs a subscriber configured entirely
//! through environment variables.
//!
//! # Environment Variables
//!
//! - `SIFT_DEBUG=true|1|yes` - enable debug logging
//! - `SIFT_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `SIFT_LOG_FORMAT=json|pretty|compact` - set the output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use sift_filter::logging;
//!
//! // Once at startup; a no-op unless SIFT_DEBUG or SIFT_LOG_LEVEL is set.
//! logging::init();
//!
//! // Or pin the level in code.
//! logging::init_with_level("debug");
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Whether `SIFT_DEBUG` requests debug logging.
///
/// Accepts "true", "1", or "yes" (case-insensitive).
pub fn is_debug_enabled() -> bool {
    matches!(
        env::var("SIFT_DEBUG").as_deref().map(str::to_lowercase).as_deref(),
        Ok("true") | Ok("1") | Ok("yes")
    )
}

/// The effective log level.
///
/// `SIFT_LOG_LEVEL` wins when it names a valid level; otherwise "debug"
/// when `SIFT_DEBUG` is on and "warn" when it is not.
pub fn get_log_level() -> &'static str {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    env::var("SIFT_LOG_LEVEL")
        .ok()
        .map(|v| v.to_lowercase())
        .and_then(|v| LEVELS.iter().find(|l| **l == v).copied())
        .unwrap_or(if is_debug_enabled() { "debug" } else { "warn" })
}

/// The effective log format from `SIFT_LOG_FORMAT`; "json" unless "pretty"
/// or "compact" is requested.
pub fn get_log_format() -> &'static str {
    match env::var("SIFT_LOG_FORMAT").map(|v| v.to_lowercase()).as_deref() {
        Ok("pretty") => "pretty",
        Ok("compact") => "compact",
        _ => "json",
    }
}

/// Install the env-configured subscriber.
///
/// A no-op unless `SIFT_DEBUG` or `SIFT_LOG_LEVEL` is set, and on every
/// call after the first. Does nothing without the `tracing-subscriber`
/// feature; events still flow to whatever subscriber the application
/// installs itself.
pub fn init() {
    if !is_debug_enabled() && env::var("SIFT_LOG_LEVEL").is_err() {
        return;
    }
    init_with_level(get_log_level());
}

/// Install the subscriber at an explicit level, ignoring `SIFT_DEBUG` and
/// `SIFT_LOG_LEVEL`. The format still comes from `SIFT_LOG_FORMAT`.
///
/// Subsequent calls are no-ops.
pub fn init_with_level(level: &str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        install_subscriber(level);
        #[cfg(not(feature = "tracing-subscriber"))]
        let _ = level;
    });
}

/// Install a debug-level subscriber. Shorthand for
/// `init_with_level("debug")`.
pub fn init_debug() {
    init_with_level("debug");
}

#[cfg(feature = "tracing-subscriber")]
fn install_subscriber(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let directives = ["sift", "sift_filter", "sift_sql", "sift_jira", "sift_youtrack"]
        .map(|target| format!("{target}={level}"))
        .join(",");
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match get_log_format() {
        "pretty" => registry.with(fmt::layer().pretty()).init(),
        "compact" => registry.with(fmt::layer().compact()).init(),
        _ => registry.with(fmt::layer().json()).init(),
    }

    tracing::info!(level, format = get_log_format(), "sift logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-dependent assertions stay out of here: cargo runs tests in
    // parallel and other tests may legitimately export SIFT_* variables.
    // These pin the parsing of values we control.

    #[test]
    fn test_level_parsing_rejects_junk() {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        assert!(LEVELS.contains(&get_log_level()));
    }

    #[test]
    fn test_format_is_always_valid() {
        assert!(matches!(get_log_format(), "json" | "pretty" | "compact"));
    }
}
