//! Logging initialization
//!
//! Console logging through `tracing-subscriber` with env-filter control.
//! Diagnostics are observability-only: nothing in the extraction contract
//! depends on them.

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize logging at the default `info` level.
///
/// `RUST_LOG` overrides the default directive when set.
pub fn init_logging() -> Result<()> {
    init_logging_with_filter("info")
}

/// Initialize logging with an explicit default filter directive.
pub fn init_logging_with_filter(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}
