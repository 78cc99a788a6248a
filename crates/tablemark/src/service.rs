//! TableConverter - the main entry point for in-place table conversion.

use tablemark_core::{table_to_markdown, Options};
use tracing::{debug, debug_span};

use crate::html::parse_html;
use crate::locate::{locate_tables, Segment};
use crate::parse::parse_table;

/// Replaces HTML tables with Markdown tables
#[derive(Debug, Clone, Default)]
pub struct TableConverter {
    options: Options,
}

impl TableConverter {
    /// Create a new TableConverter with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a TableConverter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Replace every table in `html` with its Markdown rendering.
    ///
    /// Text outside tables is copied unchanged. A table that cannot be parsed
    /// is left as the original markup.
    pub fn convert(&self, html: &str) -> String {
        let mut output = String::with_capacity(html.len());

        for segment in locate_tables(html) {
            match segment {
                Segment::Text { text, .. } => output.push_str(text),
                Segment::Table { span, html: markup } => {
                    let _span = debug_span!("table", start = span.start, end = span.end).entered();
                    match self.convert_table(markup) {
                        Some(markdown) => output.push_str(&markdown),
                        None => {
                            debug!("table left unconverted");
                            output.push_str(markup);
                        }
                    }
                }
            }
        }

        output
    }

    /// Convert a single `<table>…</table>` fragment.
    ///
    /// Inside [`TableConverter::convert`] this runs under a `table` span that
    /// carries the fragment's byte offsets.
    ///
    /// Returns `None` if the fragment holds no table with at least one cell.
    pub fn convert_table(&self, table_html: &str) -> Option<String> {
        let root = parse_html(table_html);
        let table = parse_table(&root, &self.options)?;
        table_to_markdown(&table, &self.options)
    }

    /// Convert only the first convertible table in `html`, dropping the rest
    /// of the document. Returns `None` if there is none.
    pub fn first_table(&self, html: &str) -> Option<String> {
        locate_tables(html).find_map(|segment| match segment {
            Segment::Table { html, .. } => self.convert_table(html),
            Segment::Text { .. } => None,
        })
    }
}
