//! Table renderer for inventory listings

use std::io::{self, Write};

use comfy_table::{presets::NOTHING, Table};

use crate::error::{MeshError, Result};
use crate::mesh::traits::InventoryItem;

/// Header row plus body rows; every row has exactly `header.len()` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of rendering a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// At least one record survived filtering
    Table(TableData),
    /// Nothing to show; carries the notice for the user
    Empty(String),
}

impl Rendered {
    /// Number of body rows (zero for the empty notice)
    pub fn row_count(&self) -> usize {
        match self {
            Rendered::Table(table) => table.rows.len(),
            Rendered::Empty(_) => 0,
        }
    }
}

/// Project records into table rows.
///
/// Records with an empty display name are skipped. Row order follows the
/// input order.
pub fn render<T, F>(items: &[T], header: &[&str], project: F, empty_notice: &str) -> Rendered
where
    T: InventoryItem,
    F: Fn(&T) -> Vec<String>,
{
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter(|item| !item.display_name().is_empty())
        .map(|item| {
            let row = project(item);
            debug_assert_eq!(row.len(), header.len(), "row width must match header");
            row
        })
        .collect();

    if rows.is_empty() {
        return Rendered::Empty(empty_notice.to_string());
    }

    Rendered::Table(TableData {
        header: header.iter().map(|h| h.to_string()).collect(),
        rows,
    })
}

/// Render using each record's own row projection
pub fn render_items<T: InventoryItem>(
    items: &[T],
    header: &[&str],
    empty_notice: &str,
) -> Rendered {
    render(items, header, T::row, empty_notice)
}

/// Write a rendered listing to any writer
pub fn write_rendered<W: Write>(
    out: &mut W,
    rendered: &Rendered,
    no_header: bool,
) -> io::Result<()> {
    match rendered {
        Rendered::Table(data) => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(data.header.clone());
            }
            for row in &data.rows {
                table.add_row(row.clone());
            }
            writeln!(out, "{table}")
        }
        Rendered::Empty(notice) => writeln!(out, "{notice}"),
    }
}

/// Write a rendered listing to stdout
pub fn print_rendered(rendered: &Rendered, no_header: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rendered(&mut out, rendered, no_header)
        .map_err(|e| MeshError::Io(format!("Failed to write to stdout: {}", e)))
}
