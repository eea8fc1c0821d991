use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "expense_tracker_backend=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to info-level
/// output for this crate. Calling it again is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
