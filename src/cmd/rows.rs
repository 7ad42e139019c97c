//! Print one row per line of delimited input.

use anyhow::{Context, Result};
use clap::Args;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use super::{Execute, with_stdout};
use crate::table_format::TableFormat;
use crate::table_writer::TableWriter;
use crate::types::Verbosity;

/// Print one row per input line
#[derive(Args)]
pub struct RowsCmd {
    /// Input file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Character separating values on each line
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

impl Execute for RowsCmd {
    fn execute(&self, format: &TableFormat, verbosity: Verbosity) -> Result<ExitCode> {
        let input: Box<dyn BufRead> = match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                verbosity.note(format!("reading {}", path.display()));
                let file = File::open(path)
                    .with_context(|| format!("failed to open input: {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            _ => {
                verbosity.note("reading stdin");
                Box::new(io::stdin().lock())
            }
        };
        with_stdout(format, |writer| {
            let count = write_rows(input, writer, self.delimiter)?;
            verbosity.note(format!("{count} rows"));
            Ok(())
        })
    }
}

/// Write one row per line of `input`, splitting on `delimiter`.
///
/// Values are trimmed. A blank line becomes an empty row with as many
/// columns as the row before it (none at the start). Returns the number of
/// rows written.
pub fn write_rows<R: BufRead, W: Write>(
    input: R,
    writer: &mut TableWriter<W>,
    delimiter: char,
) -> Result<usize> {
    let mut columns = 0;
    let mut count = 0;
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            writer.empty_table_row(columns)?;
        } else {
            let values: Vec<&str> = line.split(delimiter).map(str::trim).collect();
            let cells: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();
            writer.table_row(&cells)?;
            columns = values.len();
        }
        count += 1;
    }
    Ok(count)
}
