//! Table data model
//!
//! A [`Table`] is the span-aware, pre-expansion view of one `<table>`: rows of
//! cells in source order, each carrying its own `rowspan`/`colspan`.

/// Upper bound for `colspan`, matching the limit browsers apply.
pub const MAX_COL_SPAN: u32 = 1000;

/// A single table cell as it appears in the source, before span expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    row_span: u32,
    col_span: u32,
    is_header: bool,
}

impl Cell {
    /// Create a cell. Spans below 1 are clamped to 1 and `col_span` is capped
    /// at [`MAX_COL_SPAN`].
    pub fn new(text: impl Into<String>, row_span: u32, col_span: u32, is_header: bool) -> Self {
        Self {
            text: text.into(),
            row_span: row_span.max(1),
            col_span: col_span.clamp(1, MAX_COL_SPAN),
            is_header,
        }
    }

    /// Create a single-slot header (`<th>`) cell
    pub fn header(text: impl Into<String>) -> Self {
        Self::new(text, 1, 1, true)
    }

    /// Create a single-slot data (`<td>`) cell
    pub fn data(text: impl Into<String>) -> Self {
        Self::new(text, 1, 1, false)
    }

    pub fn with_row_span(self, row_span: u32) -> Self {
        Self::new(self.text, row_span, self.col_span, self.is_header)
    }

    pub fn with_col_span(self, col_span: u32) -> Self {
        Self::new(self.text, self.row_span, col_span, self.is_header)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    pub fn col_span(&self) -> u32 {
        self.col_span
    }

    pub fn is_header(&self) -> bool {
        self.is_header
    }
}

/// Cells of one `<tr>`, in source order
pub type Row = Vec<Cell>;

/// One parsed table: its rows in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of `<tr>` rows, including rows without cells
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row holds a single cell
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Count the leading header layers.
    ///
    /// A row is a header layer when it contains at least one header cell.
    /// Counting stops at the first row that does not.
    pub fn header_layers(&self) -> usize {
        self.rows
            .iter()
            .take_while(|row| row.iter().any(Cell::is_header))
            .count()
    }
}
