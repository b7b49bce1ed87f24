//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize tracing subscriber with an explicit fallback filter
///
/// `RUST_LOG` still wins when set; `filter` applies when it is not.
/// Pass [`crate::Config::log_filter`] to honor configuration.
pub fn init_tracing_with(filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
