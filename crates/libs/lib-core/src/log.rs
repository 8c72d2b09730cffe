//! # Logging
//!
//! Installs the global `tracing` subscriber for a chirpy binary.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `LOG_LEVEL` nor `RUST_LOG` is usable.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Pick the filter directive from a `LOG_LEVEL` value.
///
/// Unknown levels fall back to `info`.
pub fn level_directive(log_level: Option<&str>) -> &'static str {
    match log_level.map(|l| l.trim().to_lowercase()).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => DEFAULT_LOG_LEVEL,
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set and valid; otherwise `LOG_LEVEL` picks a level.
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), String> {
    let level = std::env::var("LOG_LEVEL").ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level.as_deref())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| format!("Failed to set global tracing subscriber: {e}"))?;

    tracing::info!("Log level: {}", level_directive(level.as_deref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive(Some("DEBUG")), "debug");
        assert_eq!(level_directive(Some(" warn ")), "warn");
        assert_eq!(level_directive(Some("verbose")), "info");
        assert_eq!(level_directive(None), "info");
    }
}
