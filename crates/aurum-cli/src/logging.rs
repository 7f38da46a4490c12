use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `aurum=debug`.
const LOG_ENV: &str = "AURUM_LOG";

/// Installs the stderr subscriber. `AURUM_LOG` wins over `-v` flags.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| match verbosity {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
