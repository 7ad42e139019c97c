use std::fmt::Display;
use std::io::{self, Write};

use crate::table_format::TableFormat;

/// Writes table rows to any `Write` sink using one `TableFormat`.
///
/// The writer keeps no state between calls besides the sink and the format:
/// cells are appended as they are requested and a row is only closed by
/// `end_row` (or by the helpers that call it).
pub struct TableWriter<W: Write> {
    out: W,
    format: TableFormat,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, format: TableFormat) -> Self {
        Self { out, format }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Append one cell holding `value`.
    pub fn add_column_entry<T: Display + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        self.out.write_all(self.format.cell(value).as_bytes())
    }

    /// Append one placeholder cell.
    pub fn add_placeholder_entry(&mut self) -> io::Result<()> {
        self.out.write_all(self.format.placeholder_cell().as_bytes())
    }

    /// Append one cell per element of `values`, in order.
    pub fn add_column_entries<I>(&mut self, values: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.add_column_entry(&value)?;
        }
        Ok(())
    }

    /// Close the current row.
    pub fn end_row(&mut self) -> io::Result<()> {
        self.out.write_all(self.format.terminator().as_bytes())
    }

    /// Write a row of `columns` placeholder cells.
    pub fn empty_table_row(&mut self, columns: usize) -> io::Result<()> {
        for _ in 0..columns {
            self.add_placeholder_entry()?;
        }
        self.end_row()
    }

    /// Write a complete row: one cell per value, then the terminator.
    pub fn table_row(&mut self, values: &[&dyn Display]) -> io::Result<()> {
        for value in values {
            self.add_column_entry(*value)?;
        }
        self.end_row()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
