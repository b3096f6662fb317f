//! Console logging setup for binaries built on this crate.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global subscriber writing compact lines to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`, which shows
/// room width clamp warnings. Stdout stays free for program output.
/// Calling this more than once is harmless: later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
