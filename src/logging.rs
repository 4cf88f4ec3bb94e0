//! tracing subscriber setup. Diagnostics go to stderr, user-facing output
//! stays on stdout through `ui::messages`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the `-v` count to a level; 0 falls back to the configured one.
fn level_for(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. RUST_LOG wins over everything else.
/// Calling it twice is harmless (the second install is ignored).
pub fn setup_logging(verbose: u8, configured: &str) {
    let level = level_for(verbose, configured);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rcheckin={}", level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    tracing::debug!("Logging initialized at level: {}", level);
}
