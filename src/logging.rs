use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LogTarget;

/// Install the global `tracing` subscriber.
pub(crate) fn init(filter: &str, target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter: {filter}"))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
