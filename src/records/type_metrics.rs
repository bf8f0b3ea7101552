use super::table::{read_table, Row, TableSchema};
use super::TypeMetricsRecord;
use crate::errors::Result;
use std::path::Path;
use tracing::debug;

/// `Project Name,Package Name,Type Name,NOF,NOPF,NOM,NOPM,LOC,WMC,NC,DIT,LCOM,FANIN,FANOUT,...`
pub const TYPE_METRICS_SCHEMA: TableSchema = TableSchema {
    source_name: "type metrics",
    min_columns: 14,
};

const PACKAGE: usize = 1;
const CLASS: usize = 2;
const LOC: usize = 7;
const FAN_IN: usize = 12;
const FAN_OUT: usize = 13;

pub fn read_type_metrics(path: &Path) -> Result<Vec<TypeMetricsRecord>> {
    let records = read_table(path, TYPE_METRICS_SCHEMA, type_metrics_from_row)?;
    debug!(count = records.len(), path = %path.display(), "read type metrics");
    Ok(records)
}

pub(crate) fn type_metrics_from_row(row: &Row<'_>) -> Result<TypeMetricsRecord> {
    Ok(TypeMetricsRecord {
        package: row.text(PACKAGE).to_string(),
        class_name: row.text(CLASS).to_string(),
        lines_of_code: row.count(LOC, "LOC")?,
        fan_in: row.count(FAN_IN, "FANIN")?,
        fan_out: row.count(FAN_OUT, "FANOUT")?,
    })
}
