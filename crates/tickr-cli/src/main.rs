mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod prompt;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    // Missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();
    logging::init(cli.verbose);

    commands::run(&cli)?;
    Ok(ExitCode::SUCCESS)
}
