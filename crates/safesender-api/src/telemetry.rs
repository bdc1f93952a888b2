//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Production logs are JSON for ingestion; development logs stay
/// human-readable. `RUST_LOG` overrides the default `info` filter.
pub fn init_telemetry(environment: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env = environment.to_lowercase();
    if env == "production" || env == "prod" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
