use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Filtering comes from `RUST_LOG` (e.g. `RUST_LOG=ls8_vm=debug`); logging is
/// off when it is unset or unparsable.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        tracing_subscriber::fmt()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(env_filter)
            .init();
    });
}
