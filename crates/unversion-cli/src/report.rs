//! Rendering of loaded rule sets.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use unversion_model::{RuleEntry, RuleSet, UNBOUNDED};

const HEADERS: [&str; 5] = ["Kind", "Doc type", "Root XPath", "Max days", "Max count"];

/// Table with one row per rule: version rules grouped by doc type, then
/// trash rules.
pub fn rule_table(rules: &RuleSet) -> Table {
    let mut table = Table::new();
    table.set_header(HEADERS.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let version = rules.version_rules().values().flatten();
    for entry in version.chain(rules.trash_rules()) {
        table.add_row(rule_row(entry));
    }
    table
}

/// Pretty-printed JSON form of the rule set.
pub fn rules_json(rules: &RuleSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rules)
}

/// One-line count summary.
pub fn summary_line(rules: &RuleSet) -> String {
    format!(
        "{} version rule(s) across {} doc type(s), {} trash rule(s)",
        rules.version_rule_count(),
        rules.version_rules().len(),
        rules.trash_rules().len()
    )
}

/// Human form of a limit; [`UNBOUNDED`] shows as `-`.
pub fn format_limit(limit: i32) -> String {
    if limit == UNBOUNDED {
        "-".to_string()
    } else {
        limit.to_string()
    }
}

fn rule_row(entry: &RuleEntry) -> Vec<Cell> {
    vec![
        Cell::new(entry.kind.label()),
        Cell::new(entry.doc_type.to_string()),
        Cell::new(entry.root_xpath.as_deref().unwrap_or("")),
        Cell::new(format_limit(entry.max_days)),
        Cell::new(format_limit(entry.max_count)),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
