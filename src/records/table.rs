//! Schema-validated reader for the comma separated artifacts.
//!
//! The upstream tools write plain comma joined rows with a single header line
//! and no quoting. Fields are addressed by position, so every source declares
//! how many columns it needs and a short row fails with a named error instead
//! of an out-of-bounds panic.

use crate::errors::{Result, SnapshotError};
use std::fs;
use std::path::Path;

/// Positional layout of one artifact.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Human readable source name used in diagnostics.
    pub source_name: &'static str,
    /// Highest column index read, plus one.
    pub min_columns: usize,
}

/// One data row, borrowed from the file contents.
#[derive(Debug)]
pub struct Row<'a> {
    path: &'a Path,
    line: usize,
    cells: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// Trimmed text of a column. The schema guarantees the index exists.
    pub fn text(&self, column: usize) -> &'a str {
        self.cells[column].trim()
    }

    /// Parse a column as a non-negative count.
    pub fn count(&self, column: usize, column_name: &'static str) -> Result<u64> {
        let value = self.text(column);
        value.parse::<u64>().map_err(|_| SnapshotError::InvalidField {
            path: self.path.to_path_buf(),
            line: self.line,
            column,
            column_name,
            value: value.to_string(),
        })
    }
}

/// Read a table from disk and map every data row through `map_row`.
pub fn read_table<T, F>(path: &Path, schema: TableSchema, map_row: F) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> Result<T>,
{
    let contents = fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    parse_table(path, &contents, schema, map_row)
}

/// Parse table contents that are already in memory.
///
/// The first line is the header and is skipped. Blank lines are ignored.
pub fn parse_table<T, F>(
    path: &Path,
    contents: &str,
    schema: TableSchema,
    mut map_row: F,
) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> Result<T>,
{
    let mut records = Vec::new();

    for (index, raw) in contents.lines().enumerate().skip(1) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() < schema.min_columns {
            return Err(SnapshotError::ColumnCount {
                path: path.to_path_buf(),
                source_name: schema.source_name,
                line: index + 1,
                expected: schema.min_columns,
                actual: cells.len(),
            });
        }

        let row = Row {
            path,
            line: index + 1,
            cells,
        };
        records.push(map_row(&row)?);
    }

    Ok(records)
}
