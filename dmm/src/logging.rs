//! Diagnostics for the `dmm` CLI.
//!
//! Only the application layers (`render`, `io`, the binary) emit events; the
//! command model in `core` never logs. Rendered command lines own stdout, so
//! every event goes to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "dmm=warn";

/// Install the global subscriber: `RUST_LOG` filter, compact stderr output
/// without timestamps.
///
/// ```bash
/// RUST_LOG=dmm=debug dmm batch commands.toml
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
