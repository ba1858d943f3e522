//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The filter comes from `CLAIMFLOW_LOG` when set, otherwise from the
/// configured level. Safe to call more than once; only the first call
/// installs a subscriber (tests in particular hit this path repeatedly).
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env("CLAIMFLOW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
