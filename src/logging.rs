use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; when the settings
/// file enables debug logging the level drops to `debug` and `RUST_LOG`
/// may override it.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Force `info` regardless of RUST_LOG so an environment variable
        // left over in the shell cannot make the output verbose.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
