use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::{Execute, print_text};
use crate::table_format::{TableFormat, serialize_format};
use crate::types::Verbosity;

/// Print the effective format as TOML
#[derive(Args)]
pub struct FormatCmd;

impl Execute for FormatCmd {
    fn execute(&self, format: &TableFormat, _verbosity: Verbosity) -> Result<ExitCode> {
        print_text(&serialize_format(format)?)
    }
}
