use super::{ReportOptions, ReportTable};
use crate::aggregation::SnapshotAggregate;
use crate::errors::{Result, SnapshotError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub trait ReportWriter {
    fn write_report(&mut self, aggregate: &SnapshotAggregate) -> std::io::Result<()>;
}

/// Comma joined rows, `\n` terminated, no quoting.
///
/// Package and category names are written as-is; the upstream tools never
/// put commas in them.
pub struct CsvWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, cells: &[String]) -> std::io::Result<()> {
        writeln!(self.writer, "{}", cells.join(","))
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_report(&mut self, aggregate: &SnapshotAggregate) -> std::io::Result<()> {
        let table = ReportTable::from_aggregate(aggregate, self.options);
        self.write_line(&table.header)?;
        for row in &table.rows {
            self.write_line(row)?;
        }
        self.writer.flush()
    }
}

/// Write the report to `path`, replacing any previous file.
pub fn write_report_file(
    path: &Path,
    aggregate: &SnapshotAggregate,
    options: ReportOptions,
) -> Result<()> {
    let file = File::create(path).map_err(|e| SnapshotError::io(path, e))?;
    let mut writer = CsvWriter::new(BufWriter::new(file), options);
    writer
        .write_report(aggregate)
        .map_err(|e| SnapshotError::io(path, e))?;
    writer
        .into_inner()
        .into_inner()
        .map_err(|e| SnapshotError::io(path, e.into_error()))?
        .sync_all()
        .map_err(|e| SnapshotError::io(path, e))
}
