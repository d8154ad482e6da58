use crate::core::system_info::Section;
use crate::error::{FetchError, Result};
use clap::error::{ContextKind, ContextValue};
use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Full report
    Full,
    Version,
    Help,
    /// Decorated message, then the full report
    Message(String),
    /// Random message, then the full report
    Random,
    /// Full report piped through the colorizer
    Color,
    /// One report line
    Single(Section),
    /// Swap line followed by the core count
    Swap,
    /// Only the random message
    Genie,
    Json,
}

fn flag(id: &'static str, short: Option<char>, long: Option<&'static str>) -> Arg {
    let mut arg = Arg::new(id).action(ArgAction::SetTrue);
    if let Some(short) = short {
        arg = arg.short(short);
    }
    if let Some(long) = long {
        arg = arg.long(long);
    }
    arg
}

pub fn build_cli() -> Command {
    Command::new("tinyfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tiny system information fetcher")
        .disable_version_flag(true)
        .disable_help_flag(true)
        .arg(flag("version", Some('v'), Some("version")))
        .arg(flag("help", Some('h'), Some("help")))
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("MSG")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .arg(flag("random", Some('r'), Some("random")))
        .arg(flag("color", None, Some("color")))
        .arg(flag("os", Some('o'), None))
        .arg(flag("distro", Some('d'), None))
        .arg(flag("kernel", Some('k'), None))
        .arg(flag("shell", Some('s'), None))
        .arg(flag("uptime", Some('u'), None))
        .arg(flag("wm", Some('w'), None))
        .arg(flag("cpu", Some('c'), None))
        .arg(flag("ram", None, Some("ram")))
        .arg(flag("swap", None, Some("swap")))
        .arg(flag("genie", None, Some("genie")))
        .arg(flag("user", None, Some("user")))
        .arg(flag("json", None, Some("json")))
}

/// Parse the full argument vector (program name first) into a [`Mode`].
///
/// Only the first argument selects the mode. It is validated together with
/// its value for `-m`; everything after that is ignored.
pub fn parse_args<I, T>(args: I) -> Result<Mode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let Some(first) = args.get(1) else {
        return Ok(Mode::Full);
    };
    let first = first.to_string_lossy().into_owned();
    let flag = first.split_once('=').map_or(first.as_str(), |(flag, _)| flag);

    let separate_value = matches!(first.as_str(), "-m" | "--message");
    let considered = if separate_value { 3 } else { 2 };

    let matches = match build_cli().try_get_matches_from(args.iter().take(considered).cloned()) {
        Ok(matches) => matches,
        Err(_) if separate_value => {
            return Err(FetchError::missing_argument("no message provided."));
        }
        Err(e) => return Err(FetchError::unknown_argument(rejected_token(&e, &first))),
    };

    let mode = match flag {
        "-v" | "--version" => Mode::Version,
        "-h" | "--help" => Mode::Help,
        "-m" | "--message" => {
            let message = matches
                .get_one::<String>("message")
                .filter(|message| !message.is_empty())
                .ok_or_else(|| FetchError::missing_argument("no message provided."))?;
            Mode::Message(message.clone())
        }
        "-r" | "--random" => Mode::Random,
        "--color" => Mode::Color,
        "-o" => Mode::Single(Section::Os),
        "-d" => Mode::Single(Section::Distro),
        "-k" => Mode::Single(Section::Kernel),
        "-s" => Mode::Single(Section::Shell),
        "-u" => Mode::Single(Section::Uptime),
        "-w" => Mode::Single(Section::WindowManager),
        "-c" => Mode::Single(Section::Cpu),
        "--ram" => Mode::Single(Section::Ram),
        "--swap" => Mode::Swap,
        "--genie" => Mode::Genie,
        "--user" => Mode::Single(Section::User),
        "--json" => Mode::Json,
        _ => return Err(FetchError::unknown_argument(first.clone())),
    };

    Ok(mode)
}

/// The argument clap rejected, or `fallback` when the error names none
fn rejected_token(error: &clap::Error, fallback: &str) -> String {
    match error.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => fallback.to_string(),
    }
}
