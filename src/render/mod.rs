mod style;

use crate::editor::list::ListField;
use crate::ir::{FieldRef, Row};

use style::*;

/// Render a packed edit layout as a text grid, one line per row, each cell
/// as wide as its share of the grid.
pub fn render_layout(rows: &[Row]) -> String {
    let mut out = String::new();

    for row in rows {
        out.push_str(&format!("{:>3} ", row.row_id));
        out.push(CELL_SEPARATOR);
        for field in &row.row_content {
            out.push_str(&render_cell(field));
            out.push(CELL_SEPARATOR);
        }
        out.push('\n');
    }

    out
}

/// Render the list layout as a single header line.
pub fn render_list(fields: &[ListField]) -> String {
    let columns: Vec<String> = fields
        .iter()
        .map(|field| {
            if field.sortable {
                format!("{} ^", field.label)
            } else {
                field.label.clone()
            }
        })
        .collect();
    format!("list: {}\n", columns.join(" | "))
}

fn render_cell(field: &FieldRef) -> String {
    // one column of every cell goes to the separator
    let width = usize::from(field.size) * COLUMN_WIDTH - 1;

    if field.is_filler() {
        return FILLER_CHAR.to_string().repeat(width);
    }

    let label = format!(" {} {}", field.name, field.size);
    let len = label.chars().count();
    if len <= width {
        format!("{}{}", label, " ".repeat(width - len))
    } else {
        let mut cut: String = label.chars().take(width - 1).collect();
        cut.push(ELLIPSIS);
        cut
    }
}
