//! Tracing setup for host applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber.
///
/// Defaults to `pokedex_cache=info`; `RUST_LOG` overrides it. Returns false
/// when a subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pokedex_cache=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
