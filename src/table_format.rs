//! Cell geometry shared by every row a formatter writes.
//!
//! A `TableFormat` is plain data: it can be built in code, loaded from a
//! TOML file, or overridden from the command line. Rendering functions here
//! return strings; `TableWriter` and the stdout macros decide where they go.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;

use crate::{COLUMN_WIDTH, PLACEHOLDER_CHAR, SEPARATOR};

/// Position of a value inside its column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the left (default).
    #[default]
    Right,
    /// Pad on the right.
    Left,
    /// Pad both sides, extra space on the right.
    Center,
}

/// Width, separator, placeholder and alignment applied to every cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableFormat {
    /// Field width of every column, in characters (at most `u16::MAX`)
    pub width: u16,
    /// Written before each cell and once more to close the row
    pub separator: char,
    /// Text for cells without a value (defaults to dashes filling the column)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub align: Align,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            width: COLUMN_WIDTH,
            separator: SEPARATOR,
            placeholder: None,
            align: Align::Right,
        }
    }
}

impl TableFormat {
    /// Default format with a different column width.
    pub fn with_width(width: u16) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Check the format is usable. Returns a message on failure.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.width == 0 {
            return Err("width must be greater than 0".to_string());
        }
        if self.separator == '\n' || self.separator == '\r' {
            return Err("separator must not be a line break".to_string());
        }
        Ok(())
    }

    /// Effective placeholder text.
    pub fn placeholder_text(&self) -> String {
        match &self.placeholder {
            Some(text) => text.clone(),
            None => std::iter::repeat_n(PLACEHOLDER_CHAR, usize::from(self.width)).collect(),
        }
    }

    /// Render one cell: separator followed by the padded value.
    ///
    /// The value is rendered to text before padding, so `Display` impls that
    /// ignore formatter flags still line up. Text wider than the column is
    /// kept whole.
    pub fn cell<T: Display + ?Sized>(&self, value: &T) -> String {
        let text = value.to_string();
        let sep = self.separator;
        let width = usize::from(self.width);
        match self.align {
            Align::Right => format!("{sep}{text:>width$}"),
            Align::Left => format!("{sep}{text:<width$}"),
            Align::Center => format!("{sep}{text:^width$}"),
        }
    }

    /// Render the cell used when there is no value.
    pub fn placeholder_cell(&self) -> String {
        self.cell(&self.placeholder_text())
    }

    /// Render one cell per element, in order.
    pub fn cells<I>(&self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        values.into_iter().map(|v| self.cell(&v)).collect()
    }

    /// Closing separator and line break.
    pub fn terminator(&self) -> String {
        format!("{}\n", self.separator)
    }

    /// Render a complete row: one cell per value, then the terminator.
    pub fn row(&self, values: &[&dyn Display]) -> String {
        let mut line: String = values.iter().map(|v| self.cell(*v)).collect();
        line.push_str(&self.terminator());
        line
    }

    /// Render a row of `columns` placeholder cells.
    pub fn empty_row(&self, columns: usize) -> String {
        let cell = self.placeholder_cell();
        let mut line = cell.repeat(columns);
        line.push_str(&self.terminator());
        line
    }
}

/// Load a format from a TOML file
pub fn load_format(path: &Path) -> Result<TableFormat> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read format file: {}", path.display()))?;
    let format = parse_format(&content)
        .with_context(|| format!("invalid format file: {}", path.display()))?;
    if let Err(msg) = format.validate() {
        anyhow::bail!("{}: {}", path.display(), msg);
    }
    Ok(format)
}

/// Parse a format from TOML string
pub fn parse_format(toml_str: &str) -> Result<TableFormat> {
    toml::from_str(toml_str).context("failed to parse format TOML")
}

/// Serialize a format to TOML string
pub fn serialize_format(format: &TableFormat) -> Result<String> {
    toml::to_string(format).context("failed to serialize format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_constants::PLACEHOLDER;

    #[test]
    fn default_is_width_14_right_aligned() {
        let format = TableFormat::default();
        assert_eq!(format.width, 14);
        assert_eq!(format.separator, '|');
        assert_eq!(format.align, Align::Right);
        assert_eq!(format.placeholder_text(), PLACEHOLDER);
    }

    #[test]
    fn short_value_fills_fifteen_chars() {
        let format = TableFormat::default();
        for value in ["", "a", "value", "exactly14chars"] {
            let cell = format.cell(value);
            assert_eq!(cell.chars().count(), 15, "cell {cell:?}");
            assert!(cell.starts_with('|'));
            assert!(cell.ends_with(value));
        }
    }

    #[test]
    fn numbers_are_right_aligned() {
        let format = TableFormat::default();
        assert_eq!(format.cell(&42), "|            42");
        assert_eq!(format.cell(&1.5), "|           1.5");
    }

    #[test]
    fn long_value_is_not_truncated() {
        let format = TableFormat::default();
        let long = "this value is wider than a column";
        assert_eq!(format.cell(long), format!("|{long}"));
    }

    #[test]
    fn placeholder_cell_is_stable() {
        let format = TableFormat::default();
        let first = format.placeholder_cell();
        let _ = format.cell("something else");
        assert_eq!(first, format!("|{PLACEHOLDER}"));
        assert_eq!(format.placeholder_cell(), first);
    }

    #[test]
    fn placeholder_follows_width() {
        let format = TableFormat::with_width(4);
        assert_eq!(format.placeholder_cell(), "|----");
    }

    #[test]
    fn custom_placeholder_is_padded() {
        let format = TableFormat {
            placeholder: Some("n/a".to_string()),
            ..TableFormat::default()
        };
        assert_eq!(format.placeholder_cell(), "|           n/a");
    }

    #[test]
    fn left_and_center_alignment() {
        let left = TableFormat {
            align: Align::Left,
            ..TableFormat::with_width(6)
        };
        assert_eq!(left.cell("ab"), "|ab    ");

        let center = TableFormat {
            align: Align::Center,
            ..TableFormat::with_width(6)
        };
        assert_eq!(center.cell("ab"), "|  ab  ");
        assert_eq!(center.cell("abc"), "| abc  ");
    }

    #[test]
    fn display_without_padding_support_still_aligns() {
        struct Raw;
        impl Display for Raw {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("raw")
            }
        }
        assert_eq!(TableFormat::default().cell(&Raw), "|           raw");
    }

    #[test]
    fn cells_expand_in_order() {
        let format = TableFormat::with_width(3);
        assert_eq!(format.cells([1, 2, 3]), "|  1|  2|  3");
        assert_eq!(format.cells(Vec::<u8>::new()), "");
    }

    #[test]
    fn terminator_is_separator_and_newline() {
        assert_eq!(TableFormat::default().terminator(), "|\n");
    }

    #[test]
    fn row_of_two_strings() {
        let format = TableFormat::default();
        assert_eq!(
            format.row(&[&"a", &"b"]),
            "|             a|             b|\n"
        );
    }

    #[test]
    fn row_mixes_types() {
        let format = TableFormat::with_width(4);
        assert_eq!(format.row(&[&"x", &7, &'c', &true]), "|   x|   7|   c|true|\n");
    }

    #[test]
    fn empty_row_counts() {
        let format = TableFormat::default();
        assert_eq!(format.empty_row(0), "|\n");
        assert_eq!(
            format.empty_row(2),
            "|--------------|--------------|\n"
        );
        assert_eq!(format.empty_row(3).matches(PLACEHOLDER).count(), 3);
    }

    #[test]
    fn parse_empty_gives_default() {
        assert_eq!(parse_format("").unwrap(), TableFormat::default());
    }

    #[test]
    fn parse_all_fields() {
        let format = parse_format(
            r#"
            width = 8
            separator = ":"
            placeholder = "?"
            align = "left"
            "#,
        )
        .unwrap();
        assert_eq!(format.width, 8);
        assert_eq!(format.separator, ':');
        assert_eq!(format.placeholder.as_deref(), Some("?"));
        assert_eq!(format.align, Align::Left);
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert!(parse_format("colour = \"red\"").is_err());
    }

    #[test]
    fn parse_rejects_multi_char_separator() {
        assert!(parse_format("separator = \"||\"").is_err());
    }

    #[test]
    fn parse_rejects_width_beyond_u16() {
        assert!(parse_format("width = 70000").is_err());
        assert!(parse_format("width = -1").is_err());
        assert_eq!(parse_format("width = 65535").unwrap().width, u16::MAX);
    }

    #[test]
    fn widest_column_still_formats() {
        let format = TableFormat::with_width(u16::MAX);
        assert_eq!(format.cell("a").chars().count(), 65536);
        assert_eq!(format.placeholder_text().len(), 65535);
    }

    #[test]
    fn validate_rejects_zero_width() {
        assert!(TableFormat::with_width(0).validate().is_err());
        assert!(TableFormat::default().validate().is_ok());
    }

    #[test]
    fn serialize_then_parse_keeps_format() {
        let format = TableFormat {
            width: 10,
            separator: '!',
            placeholder: Some("none".to_string()),
            align: Align::Center,
        };
        let text = serialize_format(&format).unwrap();
        assert!(text.contains("width = 10"));
        assert_eq!(parse_format(&text).unwrap(), format);
    }
}
