//! Terminal summary of a batch run: one line per snapshot's system row.

use super::format::{optional_percent, percent};
use crate::snapshot::SnapshotOutcome;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

const HEADERS: [&str; 8] = [
    "Snapshot",
    "Packages",
    "Classes",
    "LOC",
    "Smells",
    "PC",
    "DL",
    "Coverage",
];

/// Render the outcomes as a table. Numeric columns are right aligned.
pub fn render_summary_table(outcomes: &[SnapshotOutcome], precision: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS.iter().map(|h| Cell::new(h)));

    for outcome in outcomes {
        let system = &outcome.system;
        let cells = [
            outcome.label(),
            outcome.package_count.to_string(),
            system.class_count.to_string(),
            system.lines_of_code.to_string(),
            system.total_smells.to_string(),
            percent(system.propagation_cost, precision),
            optional_percent(system.decoupling_level, precision),
            optional_percent(
                system.coverage.map(|totals| totals.percentage()),
                precision,
            ),
        ];
        table.add_row(cells.into_iter().enumerate().map(|(i, text)| {
            let cell = Cell::new(text);
            if i == 0 {
                cell
            } else {
                cell.set_alignment(CellAlignment::Right)
            }
        }));
    }

    table.to_string()
}
