//! Output formatting module
//!
//! Listings render as borderless tables; detail views as YAML or JSON.

mod structured;
mod table;

pub use structured::{print_structured, to_structured};
pub use table::{print_rendered, render, render_items, write_rendered, Rendered, TableData};
