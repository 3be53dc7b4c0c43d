//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! progress and summary lines the user reads.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` for
/// this crate when `verbose` is on. Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,nvim_scaffold_cli_lib=debug,nvim_scaffold=debug"
    } else {
        "warn"
    }
}
