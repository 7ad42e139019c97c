use anyhow::Result;
use clap::Args;
use std::fmt::Display;
use std::process::ExitCode;

use super::{Execute, with_stdout};
use crate::table_format::TableFormat;
use crate::types::Verbosity;

/// Print one row, one cell per value
#[derive(Args)]
pub struct RowCmd {
    /// Cell values, in column order
    #[arg(required = true, value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl Execute for RowCmd {
    fn execute(&self, format: &TableFormat, verbosity: Verbosity) -> Result<ExitCode> {
        let cells: Vec<&dyn Display> = self.values.iter().map(|v| v as &dyn Display).collect();
        for value in &self.values {
            if value.chars().count() > usize::from(format.width) {
                verbosity.warn(format!("'{value}' is wider than {} columns", format.width));
            }
        }
        with_stdout(format, |writer| Ok(writer.table_row(&cells)?))
    }
}
