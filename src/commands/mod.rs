// Command handlers module
pub mod color;
pub mod fetch;
pub mod version;

use crate::cli::Mode;
use crate::core::config::Config;
use crate::platform::NativeProvider;
use crate::ui::banner::{DECORATION, HELP_BANNER};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run one invocation against the native provider, printing to stdout
pub fn run(mode: &Mode, config: &Config) -> Result<()> {
    let provider = NativeProvider::new(config.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Full => fetch::full(&provider, config, &mut out),
        Mode::Version => version::execute(&mut out),
        Mode::Help => help(&mut out),
        Mode::Message(message) => fetch::message(&provider, config, &mut out, message),
        Mode::Random => fetch::random(&provider, config, &mut out),
        Mode::Single(section) => fetch::report(&provider, config, &mut out, &[*section], None),
        Mode::Swap => fetch::swap(&provider, config, &mut out),
        Mode::Genie => fetch::genie(&mut out),
        Mode::Json => fetch::json(&provider, config, &mut out),
        Mode::Color => color::execute(&provider, config),
    }
}

/// Decorated help banner
pub fn help<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{} {}", DECORATION.bright_cyan(), HELP_BANNER)?;
    out.flush()?;
    Ok(())
}
