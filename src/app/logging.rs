// SPDX-License-Identifier: MPL-2.0
//! Log output setup.
//!
//! The filter is chosen in this order: `RUST_LOG`, then `[logging] filter`
//! from `settings.toml`, then [`DEFAULT_LOG_FILTER`].

use super::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter used by [`init`].
pub fn resolve_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| match configured {
            Some(filter) => EnvFilter::try_new(filter),
            None => EnvFilter::try_new(DEFAULT_LOG_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(configured: Option<&str>) {
    let result = tracing_subscriber::registry()
        .with(resolve_filter(configured))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();

    if result.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
