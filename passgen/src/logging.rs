use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Only problems reach stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]. stdout is left to the password output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
