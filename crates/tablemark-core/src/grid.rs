//! Grid expansion
//!
//! Resolves `rowspan`/`colspan` into a rectangular grid of strings. A spanned
//! cell's text lands only in its top-left slot; the other slots it covers hold
//! empty strings, except that the leftmost column of a `rowspan` repeats the
//! text in every row it covers.

use std::collections::BTreeMap;
use std::iter;

use tracing::trace;

use crate::table::Table;

/// Slots reserved by a `rowspan` from an earlier row, keyed by `(row, col)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarryMap {
    slots: BTreeMap<(usize, usize), String>,
}

impl CarryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a slot. A later reservation of the same slot replaces the earlier one.
    pub fn reserve(&mut self, row: usize, col: usize, text: impl Into<String>) {
        self.slots.insert((row, col), text.into());
    }

    /// Remove and return the reservation at `(row, col)`
    pub fn take(&mut self, row: usize, col: usize) -> Option<String> {
        self.slots.remove(&(row, col))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.slots.contains_key(&(row, col))
    }

    /// Remove every reservation left on `row`, ordered by column.
    pub fn drain_row(&mut self, row: usize) -> Vec<(usize, String)> {
        let rest = self.slots.split_off(&(row + 1, 0));
        let mut drained = Vec::new();
        let kept = std::mem::replace(&mut self.slots, rest);
        for ((r, c), text) in kept {
            if r == row {
                drained.push((c, text));
            } else {
                self.slots.insert((r, c), text);
            }
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append consecutive reservations for `row` starting at the end of `values`.
    fn fill(&mut self, row: usize, values: &mut Vec<String>) {
        while let Some(text) = self.take(row, values.len()) {
            values.push(text);
        }
    }
}

/// A rectangular table of plain strings: every row has [`Grid::width`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Column count shared by every row
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Expand a [`Table`] into a rectangular [`Grid`].
///
/// Rows are walked top to bottom and cells left to right. Before each cell,
/// and after it, any slot reserved by a `rowspan` from above is placed first.
/// A `rowspan` never reserves past the last row of the table, so the carry
/// map is empty once the last row is done.
pub fn expand(table: &Table) -> Grid {
    let total_rows = table.len();
    let mut carry = CarryMap::new();
    let mut rows = Vec::with_capacity(total_rows);
    let mut width = 0;

    for (r, row) in table.rows().iter().enumerate() {
        let mut values: Vec<String> = Vec::with_capacity(row.len());
        carry.fill(r, &mut values);

        for cell in row {
            let left = values.len();
            let col_span = cell.col_span() as usize;

            values.push(cell.text().to_string());
            values.extend(iter::repeat(String::new()).take(col_span - 1));

            let declared = cell.row_span() as usize;
            let row_span = declared.min(total_rows - r);
            if row_span < declared {
                trace!(
                    row = r,
                    col = left,
                    declared,
                    kept = row_span,
                    "rowspan clipped at last row"
                );
            }

            for dr in 1..row_span {
                for dc in 0..col_span {
                    let text = if dc == 0 { cell.text() } else { "" };
                    carry.reserve(r + dr, left + dc, text);
                }
            }

            carry.fill(r, &mut values);
        }

        // Reservations past a gap at the end of a short row
        for (col, text) in carry.drain_row(r) {
            if col < values.len() {
                trace!(row = r, col, "dropping reservation overlapped by a colspan");
                continue;
            }
            values.resize(col, String::new());
            values.push(text);
        }

        width = width.max(values.len());
        rows.push(values);
    }

    debug_assert!(carry.is_empty(), "carry map not drained");

    for values in &mut rows {
        values.resize(width, String::new());
    }

    Grid { rows, width }
}
