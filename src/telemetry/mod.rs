//! Tracing setup.

use tracing_subscriber::{fmt, EnvFilter, prelude::*};

/// Directives used when RUST_LOG is unset or unparseable.
const DEFAULT_DIRECTIVES: &str = "info,poseparty=debug,tower_http=info,axum=info";

/// Install the global subscriber: `RUST_LOG` filter plus a compact fmt layer.
///
/// Route resolution logs at trace, e.g. `RUST_LOG=poseparty::route=trace`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init()?;
    Ok(())
}
