//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table; `None` when there is nothing to show
pub fn format_table<T: Tabled>(data: &[T]) -> Option<String> {
    if data.is_empty() {
        return None;
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    Some(table.to_string())
}
