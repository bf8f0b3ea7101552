use super::table::{read_table, Row, TableSchema};
use super::ArchitectureSmellRecord;
use crate::errors::Result;
use std::path::Path;
use tracing::debug;

/// `Project Name,Package Name,Architecture Smell,Cause of the Smell`
///
/// The cause column is free text and may itself contain commas, so only the
/// leading columns are read.
pub const ARCHITECTURE_SMELLS_SCHEMA: TableSchema = TableSchema {
    source_name: "architecture smells",
    min_columns: 3,
};

const PACKAGE: usize = 1;
const SMELL: usize = 2;

pub fn read_architecture_smells(path: &Path) -> Result<Vec<ArchitectureSmellRecord>> {
    let records = read_table(path, ARCHITECTURE_SMELLS_SCHEMA, smell_from_row)?;
    debug!(count = records.len(), path = %path.display(), "read architecture smells");
    Ok(records)
}

pub(crate) fn smell_from_row(row: &Row<'_>) -> Result<ArchitectureSmellRecord> {
    Ok(ArchitectureSmellRecord {
        package: row.text(PACKAGE).to_string(),
        smell_category: row.text(SMELL).to_string(),
    })
}
