use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays a clean document.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the default level from
/// `warn` to `info`, `-vv` to `debug` and `-vvv` to `trace`.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(error = %err, "Global subscriber already installed");
    }
}
