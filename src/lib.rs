pub mod cli;
pub mod cmd;
pub mod print_table_row;
pub mod table_format;
pub mod table_writer;
pub mod types;

pub use table_format::{Align, TableFormat, load_format, parse_format, serialize_format};
pub use table_writer::TableWriter;

/// Default width of every column, in characters
pub const COLUMN_WIDTH: u16 = 14;

/// Character written before each cell and at the end of each row
pub const SEPARATOR: char = '|';

/// Character repeated to fill a cell that has no value
pub const PLACEHOLDER_CHAR: char = '-';
