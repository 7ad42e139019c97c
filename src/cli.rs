use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cmd::{EmptyCmd, FormatCmd, RowCmd, RowsCmd, VersionCmd};
use crate::table_format::{Align, TableFormat, load_format};
use crate::types::Verbosity;

#[derive(Parser)]
#[command(name = "tablerow")]
#[command(about = "Print fixed-width, pipe-delimited table rows")]
pub struct Cli {
    /// Format file (TOML) with width, separator, placeholder and align
    #[arg(short = 'f', long = "format", global = true)]
    pub format: Option<PathBuf>,
    /// Column width (overrides the format file)
    #[arg(short = 'w', long = "width", global = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,
    /// Alignment inside each column (overrides the format file)
    #[arg(short = 'a', long = "align", global = true)]
    pub align: Option<Align>,
    /// Report diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Suppress diagnostics
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one row, one cell per value
    Row(RowCmd),
    /// Print a row of placeholder cells
    Empty(EmptyCmd),
    /// Print one row per input line
    Rows(RowsCmd),
    /// Print the effective format as TOML
    Format(FormatCmd),
    /// Print version information
    Version(VersionCmd),
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Build the effective format: defaults, then the format file, then flags.
    pub fn resolve_format(&self) -> Result<TableFormat> {
        let verbosity = self.verbosity();
        let mut format = match &self.format {
            Some(path) => {
                verbosity.note(format!("format: {}", path.display()));
                load_format(path)?
            }
            None => TableFormat::default(),
        };
        if let Some(width) = self.width {
            format.width = width;
        }
        if let Some(align) = self.align {
            format.align = align;
        }
        verbosity.note(format!(
            "width: {}, align: {:?}",
            format.width, format.align
        ));
        Ok(format)
    }
}
