use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: compact lines on stderr, filtered by
/// `RUST_LOG` (defaults to `info`).
///
/// stdout is left to command output so it can be piped.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
