use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::Execute;
use crate::table_format::TableFormat;
use crate::types::Verbosity;

/// Print version information
#[derive(Args)]
pub struct VersionCmd;

impl Execute for VersionCmd {
    fn execute(&self, _format: &TableFormat, _verbosity: Verbosity) -> Result<ExitCode> {
        println!("tablerow {}", env!("CARGO_PKG_VERSION"));
        Ok(ExitCode::SUCCESS)
    }
}
