use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber shared by both binaries.
///
/// The filter comes from `RUST_LOG`, falling back to `default_directive`.
/// Writing to stderr keeps the driver's stdout pure JSON.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
