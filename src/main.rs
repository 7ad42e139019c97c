use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use tablerow::cli::{Cli, Commands};
use tablerow::cmd::Execute;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    let format = cli.resolve_format()?;

    match &cli.command {
        Commands::Row(cmd) => cmd.execute(&format, verbosity),
        Commands::Empty(cmd) => cmd.execute(&format, verbosity),
        Commands::Rows(cmd) => cmd.execute(&format, verbosity),
        Commands::Format(cmd) => cmd.execute(&format, verbosity),
        Commands::Version(cmd) => cmd.execute(&format, verbosity),
    }
}
