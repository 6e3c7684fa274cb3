use tracing_subscriber::EnvFilter;

type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Installs a global fmt subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG`, falling back to `debug` in debug builds and
/// `info` otherwise. Fails if a global subscriber is already set.
pub fn init_logging() -> DynResult<()> {
    #[cfg(debug_assertions)]
    let default_level = "debug";
    #[cfg(not(debug_assertions))]
    let default_level = "info";

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
