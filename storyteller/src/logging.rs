//! Tracing initialization for the CLI.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "storyteller=info,story_core=info,match_feed=warn";

/// Install the global subscriber.
///
/// Reads `STORYTELLER_LOG` for per-crate levels, e.g.
/// `STORYTELLER_LOG=story_core=debug,match_feed=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("STORYTELLER_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
