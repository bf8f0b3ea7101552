//! Instruction coverage reports.
//!
//! A snapshot may carry one coverage CSV per build module, or none at all when
//! the build produced no execution data. An absent directory is not an error.

use super::table::{read_table, Row, TableSchema};
use super::TestCoverageRecord;
use crate::errors::{Result, SnapshotError};
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,...`
pub const COVERAGE_SCHEMA: TableSchema = TableSchema {
    source_name: "coverage",
    min_columns: 5,
};

const PACKAGE: usize = 1;
const CLASS: usize = 2;
const INSTRUCTION_MISSED: usize = 3;
const INSTRUCTION_COVERED: usize = 4;

pub fn read_coverage_file(path: &Path) -> Result<Vec<TestCoverageRecord>> {
    read_table(path, COVERAGE_SCHEMA, coverage_from_row)
}

/// Read every `*.csv` file in `dir`, in file name order.
pub fn load_coverage_dir(dir: &Path) -> Result<Vec<TestCoverageRecord>> {
    let files = coverage_files(dir)?;
    let mut records = Vec::new();
    for file in &files {
        records.extend(read_coverage_file(file)?);
    }
    debug!(
        files = files.len(),
        count = records.len(),
        dir = %dir.display(),
        "read coverage reports"
    );
    Ok(records)
}

/// List coverage CSVs in `dir`. Extension matching ignores case.
pub fn coverage_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}/*.csv",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(&pattern, options)
        .map_err(|e| SnapshotError::discovery(dir, e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            SnapshotError::io(path, e.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub(crate) fn coverage_from_row(row: &Row<'_>) -> Result<TestCoverageRecord> {
    Ok(TestCoverageRecord {
        package: row.text(PACKAGE).to_string(),
        class_name: row.text(CLASS).to_string(),
        instructions_missed: row.count(INSTRUCTION_MISSED, "INSTRUCTION_MISSED")?,
        instructions_covered: row.count(INSTRUCTION_COVERED, "INSTRUCTION_COVERED")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,BRANCH_MISSED";

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let records = load_coverage_dir(&dir.path().join("JacocoResults")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_reads_all_csv_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("b-module.CSV"),
            format!("{HEADER}\nb,p,B,1,2,0\n"),
        )
        .unwrap();
        fs::write(
            dir.path().join("a-module.csv"),
            format!("{HEADER}\na,p,A,3,4,0\n"),
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let records = load_coverage_dir(dir.path()).unwrap();
        let classes: Vec<&str> = records.iter().map(|r| r.class_name.as_str()).collect();
        assert_eq!(classes, vec!["A", "B"]);
        assert_eq!(records[0].instructions_missed, 3);
        assert_eq!(records[0].instructions_covered, 4);
    }
}
