use crate::commands::fetch;
use crate::core::config::Config;
use crate::error::FetchError;
use crate::platform::ResourceProvider;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Render the random-message report and hand it to the colorizer.
///
/// Fails with [`FetchError::ColorizerMissing`] when the colorizer is not on `PATH`.
pub fn execute<P>(provider: &P, config: &Config) -> Result<()>
where
    P: ResourceProvider + ?Sized,
{
    let colorizer = which::which(&config.colorizer).map_err(|e| {
        debug!("{} lookup failed: {}", config.colorizer, e);
        FetchError::colorizer_missing(config.colorizer.as_str())
    })?;

    let mut rendered = Vec::new();
    fetch::random(provider, config, &mut rendered)?;
    pipe_through(&colorizer, &rendered)
}

/// Flush stdout, spawn `program` and feed it `input` on stdin.
///
/// The child's output goes straight to our stdout; nothing is read back
/// and a failing exit status is only logged.
pub fn pipe_through(program: &Path, input: &[u8]) -> Result<()> {
    io::stdout().flush()?;
    info!("Piping output through {}", program.display());

    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start {}", program.display()))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(input) {
            warn!("Failed to write to {}: {}", program.display(), e);
        }
    }

    match child.wait() {
        Ok(status) if !status.success() => warn!("{} exited with {}", program.display(), status),
        Ok(_) => {}
        Err(e) => warn!("Failed to wait for {}: {}", program.display(), e),
    }

    Ok(())
}
