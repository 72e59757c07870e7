//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set, e.g. `RUST_LOG=mpl_eval=trace`.
/// Logs go to stderr as an indented span tree. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .try_init();
        }
    });
}
