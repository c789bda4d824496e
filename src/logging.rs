//! Tracing setup for the command-line binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "expense_tracker=info";

/// Initializes the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence; calling this more than once has no effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // try_init: a subscriber installed by a host application wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
