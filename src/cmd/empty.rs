use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::{Execute, with_stdout};
use crate::table_format::TableFormat;
use crate::types::Verbosity;

/// Print a row of placeholder cells
#[derive(Args)]
pub struct EmptyCmd {
    /// Number of columns
    #[arg(value_name = "N")]
    pub columns: usize,
}

impl Execute for EmptyCmd {
    fn execute(&self, format: &TableFormat, verbosity: Verbosity) -> Result<ExitCode> {
        verbosity.note(format!("placeholder: '{}'", format.placeholder_text()));
        with_stdout(format, |writer| Ok(writer.empty_table_row(self.columns)?))
    }
}
