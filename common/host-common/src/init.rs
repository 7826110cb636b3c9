//! Logging initialization
//!
//! Provides standardized tracing setup for the host binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
///
/// Sets up logging to stderr (stdout is reserved for program output) with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - A default level for the specified crate
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for production/log aggregation).
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The name of the calling crate (e.g., "sysinfo_report")
/// * `default_level` - Level applied to that crate when RUST_LOG does not say otherwise
///
/// # Example
///
/// ```rust,ignore
/// host_common::init_tracing("sysinfo_report", "info")?;
/// ```
pub fn init_tracing(crate_name: &str, default_level: &str) -> anyhow::Result<()> {
    let filter = build_filter(crate_name, default_level)?;

    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn build_filter(crate_name: &str, default_level: &str) -> anyhow::Result<EnvFilter> {
    let directive = format!("{}={}", crate_name, default_level);
    Ok(EnvFilter::from_default_env().add_directive(directive.parse()?))
}

fn json_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
