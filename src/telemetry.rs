//! Tracing setup helpers for hosts embedding `balanz-charts`.
//!
//! Widget geometry emits `tracing` events (frame builds, driver misuse) but
//! never installs a subscriber on its own. Hosts either call
//! `init_default_tracing` or wire their own subscriber and filters.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Returns `true` on
/// success and `false` when the feature is disabled or another subscriber
/// already claimed the global default.
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
