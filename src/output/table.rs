//! Table output formatter (`--pretty`)
//!
//! Layout is computed by [`layout_rows`] and then drawn with comfy-table.
//! A module whose selected versions do not fit on one line continues on
//! rows with empty leading cells.

use crate::domain::ModuleReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{paint_versions, OutputFormatter};
use crate::update::UpgradeFilter;
use crate::version::Version;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use std::io::Write;

const HEADER: [&str; 4] = ["#", "Dependency", "Current Version", "Available Versions"];

/// Upper bounds for the first three columns
const NUMBER_WIDTH: u16 = 3;
const DEPENDENCY_WIDTH: u16 = 30;
const CURRENT_WIDTH: u16 = 17;

/// One line of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    /// Row number, set on the first line of a module only
    pub number: Option<usize>,
    /// Module path, empty on continuation lines
    pub path: &'a str,
    /// Declared version, empty on continuation lines
    pub current: &'a str,
    pub versions: Vec<&'a Version>,
    /// Eligible versions cut by `max_versions`, set on the module's last line
    pub more: Option<usize>,
}

/// Lay out table rows for all modules with at least one selected version
///
/// Modules already at their newest version are skipped. Rows are numbered
/// consecutively over the modules that are shown.
pub fn layout_rows<'a>(
    reports: &'a [ModuleReport],
    filter: &UpgradeFilter,
    per_row: usize,
) -> Vec<TableRow<'a>> {
    let per_row = per_row.max(1);
    let mut rows = Vec::new();
    let mut number = 0;

    for report in reports.iter().filter(|r| !r.is_current) {
        let selection = filter.selection(&report.ranked);
        if selection.is_empty() {
            continue;
        }
        number += 1;

        let first_row = rows.len();
        for (i, chunk) in selection.versions.chunks(per_row).enumerate() {
            let lead = i == 0;
            rows.push(TableRow {
                number: lead.then_some(number),
                path: if lead { report.path.as_str() } else { "" },
                current: if lead { report.current.original.as_str() } else { "" },
                versions: chunk.to_vec(),
                more: None,
            });
        }

        if selection.omitted > 0 {
            if let Some(last) = rows[first_row..].last_mut() {
                last.more = Some(selection.omitted);
            }
        }
    }

    rows
}

/// Table formatter for `--pretty`
pub struct TableFormatter {
    filter: UpgradeFilter,
    per_row: usize,
    color: bool,
}

impl TableFormatter {
    pub fn new(filter: UpgradeFilter, per_row: usize, color: bool) -> Self {
        Self {
            filter,
            per_row,
            color,
        }
    }

    fn build_table(&self, rows: &[TableRow<'_>]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(HEADER);

        if self.color {
            table.enforce_styling();
        }

        for row in rows {
            let mut versions = paint_versions(&row.versions, self.color);
            if let Some(more) = row.more {
                versions.push_str(&format!(" (+{} more)", more));
            }

            let mut path = Cell::new(row.path);
            let mut current = Cell::new(row.current);
            if self.color {
                path = path.fg(Color::Cyan);
                current = current.fg(Color::Blue);
            }

            table.add_row(vec![
                Cell::new(row.number.map(|n| n.to_string()).unwrap_or_default()),
                path,
                current,
                Cell::new(versions),
            ]);
        }

        let bounds = [NUMBER_WIDTH, DEPENDENCY_WIDTH, CURRENT_WIDTH];
        for (idx, width) in bounds.into_iter().enumerate() {
            if let Some(column) = table.column_mut(idx) {
                column
                    .set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(width)))
                    .set_cell_alignment(CellAlignment::Center);
            }
        }

        table
    }

    fn write_nothing_found(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "There are no newer versions that fulfill provided requirements."
        )?;
        writeln!(writer, "Filter: {}", self.filter.severities)?;
        writeln!(writer, "Max-versions: {}", self.filter.max_versions)?;
        writeln!(writer, "Show incompatible: {}", self.filter.show_incompatible)
    }
}

impl OutputFormatter for TableFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let rows = layout_rows(&result.summary.modules, &self.filter, self.per_row);

        if rows.is_empty() {
            return self.write_nothing_found(writer);
        }

        writeln!(writer, "{}", self.build_table(&rows))
    }
}
