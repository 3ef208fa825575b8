use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for console binaries.
/// `RUST_LOG` wins when set; otherwise info overall with the data layer at
/// debug so store traffic is visible. Writes compact lines to stdout.
pub fn init_logging_default() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service=debug,store=debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}
