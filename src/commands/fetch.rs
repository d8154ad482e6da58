use crate::core::config::Config;
use crate::core::system_info::{collect_sections, collect_system_info, Section};
use crate::platform::{fallback_core_count, ResourceProvider};
use crate::ui::banner::{decorate, random_genie_string};
use crate::ui::system_formatters::{write_line, write_report};
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

/// Query the requested sections and print them in order
pub fn report<P, W>(
    provider: &P,
    config: &Config,
    out: &mut W,
    sections: &[Section],
    genie: Option<&str>,
) -> Result<()>
where
    P: ResourceProvider + ?Sized,
    W: Write,
{
    let snapshot = collect_sections(provider, config, sections);
    write_report(out, &snapshot, sections, genie).context("Failed to write report")?;
    Ok(())
}

/// Full report
pub fn full<P, W>(provider: &P, config: &Config, out: &mut W) -> Result<()>
where
    P: ResourceProvider + ?Sized,
    W: Write,
{
    report(provider, config, out, &Section::FULL_REPORT, None)
}

/// Decorated user message followed by the full report
pub fn message<P, W>(provider: &P, config: &Config, out: &mut W, message: &str) -> Result<()>
where
    P: ResourceProvider + ?Sized,
    W: Write,
{
    write_line(out, &decorate(message))?;
    full(provider, config, out)
}

/// Full report with a random message after the user header
pub fn random<P, W>(provider: &P, config: &Config, out: &mut W) -> Result<()>
where
    P: ResourceProvider + ?Sized,
    W: Write,
{
    let genie = decorate(random_genie_string());
    report(provider, config, out, &Section::FULL_REPORT, Some(&genie))
}

/// Swap line followed by the logical core count
pub fn swap<P, W>(provider: &P, config: &Config, out: &mut W) -> Result<()>
where
    P: ResourceProvider + ?Sized,
    W: Write,
{
    report(provider, config, out, &[Section::Swap], None)?;

    let cores = provider.cpu().map(|cpu| cpu.cores).unwrap_or_else(|e| {
        debug!("CPU query failed: {}", e);
        fallback_core_count()
    });
    write_line(out, &format!("({})", cores))?;
    Ok(())
}

/// Only the random message
pub fn genie<W: Write>(out: &mut W) -> Result<()> {
    write_line(out, &decorate(random_genie_string()))?;
    Ok(())
}

/// The whole snapshot as pretty-printed JSON
pub fn json<P, W>(provider: &P, config: &Config, out: &mut W) -> Result<()>
where
    P: ResourceProvider + ?Sized,
    W: Write,
{
    let snapshot = collect_system_info(provider, config);
    let text = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
    write_line(out, &text)?;
    Ok(())
}
