//! Tracing setup for hosts embedding `xrchart-rs`.
//!
//! Nothing here runs implicitly: hosts either call [`init_default_tracing`]
//! (behind the `telemetry` feature) or install their own subscriber and
//! filters before creating an engine.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, defaulting
/// to `info` when unset.
///
/// Returns `true` on success, `false` when the `telemetry` feature is off
/// or another global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
