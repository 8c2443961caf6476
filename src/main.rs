//! perfmon: a small desktop widget showing CPU, memory and GPU utilization
//! with a rolling one-hour average.
//!
//! Run with:  `RUST_LOG=info perfmon`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging. RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("perfmon v{} starting", env!("CARGO_PKG_VERSION"));

    perfmon_window::run()?;

    tracing::info!("perfmon stopped");
    Ok(())
}
