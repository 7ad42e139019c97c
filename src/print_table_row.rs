//! Stdout helpers for printing table rows without building a writer.
//!
//! These always use the default separator, placeholder and right alignment.
//! The width is `COLUMN_WIDTH` unless a macro is given one with `width = N`.
//! Each `format_*!` macro returns the text its printing counterpart writes.

use std::fmt::Display;

use crate::table_format::TableFormat;

#[macro_export]
macro_rules! format_column_entry {
    () => {
        $crate::print_table_row::placeholder_entry_text($crate::COLUMN_WIDTH)
    };
    (width = $width:expr) => {
        $crate::print_table_row::placeholder_entry_text($width)
    };
    (width = $width:expr, $value:expr) => {
        $crate::print_table_row::column_entry_text($width, &$value)
    };
    ($value:expr) => {
        $crate::print_table_row::column_entry_text($crate::COLUMN_WIDTH, &$value)
    };
}

#[macro_export]
macro_rules! add_column_entry {
    ($($arg:tt)*) => {
        $crate::print_table_row::print_text(&$crate::format_column_entry!($($arg)*))
    };
}

#[macro_export]
macro_rules! format_column_entries {
    (width = $width:expr, $values:expr) => {
        $crate::print_table_row::column_entries_text($width, $values)
    };
    ($values:expr) => {
        $crate::print_table_row::column_entries_text($crate::COLUMN_WIDTH, $values)
    };
}

#[macro_export]
macro_rules! add_column_entries {
    ($($arg:tt)*) => {
        $crate::print_table_row::print_text(&$crate::format_column_entries!($($arg)*))
    };
}

#[macro_export]
macro_rules! end_row {
    () => {
        $crate::print_table_row::print_text(&$crate::print_table_row::end_row_text())
    };
}

#[macro_export]
macro_rules! format_empty_table_row {
    (width = $width:expr, $columns:expr) => {
        $crate::print_table_row::empty_table_row_text($width, $columns)
    };
    ($columns:expr) => {
        $crate::print_table_row::empty_table_row_text($crate::COLUMN_WIDTH, $columns)
    };
}

#[macro_export]
macro_rules! empty_table_row {
    ($($arg:tt)*) => {
        $crate::print_table_row::print_text(&$crate::format_empty_table_row!($($arg)*))
    };
}

#[macro_export]
macro_rules! format_table_row {
    (width = $width:expr, $($value:expr),+ $(,)?) => {
        $crate::print_table_row::table_row_text(
            $width,
            &[$(&$value as &dyn ::std::fmt::Display),+],
        )
    };
    ($($value:expr),+ $(,)?) => {
        $crate::print_table_row::table_row_text(
            $crate::COLUMN_WIDTH,
            &[$(&$value as &dyn ::std::fmt::Display),+],
        )
    };
}

#[macro_export]
macro_rules! table_row {
    ($($arg:tt)*) => {
        $crate::print_table_row::print_text(&$crate::format_table_row!($($arg)*))
    };
}

pub fn print_text(text: &str) {
    print!("{text}");
}

pub fn column_entry_text<T: Display + ?Sized>(width: u16, value: &T) -> String {
    TableFormat::with_width(width).cell(value)
}

pub fn placeholder_entry_text(width: u16) -> String {
    TableFormat::with_width(width).placeholder_cell()
}

pub fn column_entries_text<I>(width: u16, values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    TableFormat::with_width(width).cells(values)
}

pub fn end_row_text() -> String {
    TableFormat::default().terminator()
}

pub fn empty_table_row_text(width: u16, columns: usize) -> String {
    TableFormat::with_width(width).empty_row(columns)
}

pub fn table_row_text(width: u16, values: &[&dyn Display]) -> String {
    TableFormat::with_width(width).row(values)
}
