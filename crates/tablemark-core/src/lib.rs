//! tablemark-core - table grid expansion, header flattening and GFM rendering
//!
//! This crate holds the DOM-agnostic half of tablemark. It takes a [`Table`]
//! (rows of cells with their `rowspan`/`colspan`) and turns it into a
//! GitHub-Flavored-Markdown table. It is used by `tablemark`, which locates
//! and parses `<table>` markup, but any front end that can produce a
//! [`Table`] can drive it.
//!
//! # Architecture
//!
//! ```text
//! Table ──expand──▶ Grid ──flatten_headers──▶ HeaderRow ┐
//!                    │                                   ├──render──▶ Markdown
//!                    └──────────── body rows ────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tablemark_core::{table_to_markdown, Cell, Options, Table};
//!
//! let table = Table::new(vec![
//!     vec![Cell::header("Name").with_row_span(2), Cell::header("Info").with_col_span(2)],
//!     vec![Cell::header("Age"), Cell::header("City")],
//!     vec![Cell::data("Tom"), Cell::data("30"), Cell::data("NY")],
//! ]);
//!
//! let markdown = table_to_markdown(&table, &Options::default()).unwrap();
//! assert_eq!(
//!     markdown,
//!     "| Name | Info > Age | Info > City |\n| :--- | :--- | :--- |\n| Tom | 30 | NY |"
//! );
//! ```

mod grid;
mod header;
mod options;
mod serialize;
mod table;

use tracing::debug;

pub use grid::{expand, CarryMap, Grid};
pub use header::{flatten_headers, HeaderRow};
pub use options::{Alignment, Options};
pub use serialize::render;
pub use table::{Cell, Row, Table, MAX_COL_SPAN};

/// Convert a parsed table into a GFM Markdown table.
///
/// Returns `None` when the table holds no cells at all, so callers can leave
/// the original markup in place.
pub fn table_to_markdown(table: &Table, options: &Options) -> Option<String> {
    if table.is_empty() {
        return None;
    }

    let grid = expand(table);
    let layers = table.header_layers().min(grid.height());
    let headers = flatten_headers(&grid, layers, options);
    let body = &grid.rows()[layers..];

    debug!(
        rows = grid.height(),
        columns = grid.width(),
        header_layers = layers,
        "converted table"
    );
    Some(render(&headers, body, options))
}
