mod empty;
mod format;
mod row;
mod rows;
mod version;

pub use empty::EmptyCmd;
pub use format::FormatCmd;
pub use row::RowCmd;
pub use rows::{RowsCmd, write_rows};
pub use version::VersionCmd;

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::table_format::TableFormat;
use crate::table_writer::TableWriter;
use crate::types::Verbosity;

/// Trait for command execution.
pub trait Execute {
    fn execute(&self, format: &TableFormat, verbosity: Verbosity) -> Result<ExitCode>;
}

/// Run `f` against a writer on locked stdout, flushing when it is done.
pub(crate) fn with_stdout<F>(format: &TableFormat, f: F) -> Result<ExitCode>
where
    F: FnOnce(&mut TableWriter<io::StdoutLock<'static>>) -> Result<()>,
{
    let mut writer = TableWriter::new(io::stdout().lock(), format.clone());
    f(&mut writer)?;
    writer.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Write plain text to stdout.
pub(crate) fn print_text(text: &str) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
