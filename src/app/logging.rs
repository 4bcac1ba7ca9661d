//! Console logging setup using `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Initialise stderr logging for the CLI.
///
/// Controlled by `RUST_LOG` (default: `info`). Stdout stays reserved for the
/// prompt observation and the generated result.
pub fn init_cli() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();
}
