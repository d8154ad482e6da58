use colored::*;
use log::debug;
use std::process::ExitCode;

use tinyfetch::cli::{self, Mode};
use tinyfetch::{commands, Config, FetchError};

fn main() -> ExitCode {
    tinyfetch::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mode: Mode = cli::parse_args(std::env::args_os())?;
    debug!("Running in {:?} mode", mode);

    let config = Config::from_env();
    commands::run(&mode, &config)
}

fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<FetchError>() {
        Some(FetchError::UnknownArgument(arg)) => {
            debug!("Rejected argument: {}", arg);
            println!("{}", "tinyfetch: Unknown command line argument.".red());
            if let Err(e) = commands::help(&mut std::io::stdout()) {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            }
        }
        Some(e @ (FetchError::MissingArgument(_) | FetchError::ColorizerMissing(_))) => {
            println!("{}", e);
        }
        _ => eprintln!("{} {:#}", "Error:".red().bold(), error),
    }
}
