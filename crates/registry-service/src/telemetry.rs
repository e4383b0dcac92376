//! Tracing setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "registry_storage=info,registry_auth=info,registry_service=info";

/// Install the global tracing subscriber
///
/// Filter comes from `RUST_LOG`, falling back to `default_filter` (or
/// [`DEFAULT_FILTER`]). Calling it again after a subscriber is installed is
/// a no-op.
pub fn init_tracing(default_filter: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.unwrap_or(DEFAULT_FILTER).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
