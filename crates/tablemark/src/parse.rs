//! Table structure parser.
//!
//! Reads the first `<table>` in a [`Node`] tree into a [`Table`]. Only direct
//! `<tr>` children of the table, or of its `<thead>`/`<tbody>`/`<tfoot>`,
//! are rows, and only direct `<td>`/`<th>` children of a row are cells. A
//! table nested inside a cell contributes its text to that cell and nothing
//! else.

use std::num::IntErrorKind;

use tablemark_core::{Cell, Options, Row, Table};

use crate::node::Node;
use crate::utilities::{cell_text, normalize_cell_text};

const ROW_GROUPS: &[&str] = &["thead", "tbody", "tfoot"];

/// The span attributes of a cell, as parsed from its markup.
///
/// A value that is missing or not a non-negative integer is `None`. Values
/// too large for `u32` saturate; the grid expander clips them anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanAttrs {
    pub rowspan: Option<u32>,
    pub colspan: Option<u32>,
}

impl SpanAttrs {
    pub fn from_node(node: &Node) -> Self {
        Self {
            rowspan: parse_span(node.attr("rowspan")),
            colspan: parse_span(node.attr("colspan")),
        }
    }

    /// Effective `rowspan`; anything invalid counts as 1
    pub fn row_span(&self) -> u32 {
        self.rowspan.unwrap_or(1).max(1)
    }

    /// Effective `colspan`; anything invalid counts as 1
    pub fn col_span(&self) -> u32 {
        self.colspan.unwrap_or(1).max(1)
    }
}

fn parse_span(value: Option<&str>) -> Option<u32> {
    let value = value?.trim();
    match value.parse::<u32>() {
        Ok(span) => Some(span),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

/// Parse the first `<table>` element in `root` (depth-first, `root` included).
///
/// Returns `None` when there is no table or when none of its rows has a cell.
pub fn parse_table(root: &Node, options: &Options) -> Option<Table> {
    let element = root.find("table")?;
    let mut rows = Vec::new();

    for child in element.element_children() {
        if child.is("tr") {
            rows.push(parse_row(child, options));
        } else if ROW_GROUPS.iter().any(|group| child.is(group)) {
            rows.extend(
                child
                    .element_children()
                    .filter(|tr| tr.is("tr"))
                    .map(|tr| parse_row(tr, options)),
            );
        }
    }

    let table = Table::new(rows);
    if table.is_empty() {
        None
    } else {
        Some(table)
    }
}

fn parse_row(tr: &Node, options: &Options) -> Row {
    tr.element_children()
        .filter(|cell| cell.is("td") || cell.is("th"))
        .map(|cell| parse_cell(cell, options))
        .collect()
}

fn parse_cell(cell: &Node, options: &Options) -> Cell {
    let spans = SpanAttrs::from_node(cell);
    let text = normalize_cell_text(&cell_text(cell), options);
    Cell::new(text, spans.row_span(), spans.col_span(), cell.is("th"))
}
