//! # tablemark
//!
//! Replace every HTML `<table>` in a document with a GitHub-Flavored-Markdown
//! table, leaving all other text byte-for-byte intact.
//!
//! Tables with `rowspan`/`colspan` are expanded into a rectangular grid, and
//! stacked header rows are flattened into a single `Parent > Child` header.
//!
//! ## Design
//!
//! The work is split in two layers:
//!
//! - **Locating and parsing** (this crate): table regions are found by plain
//!   text search, so surrounding text is never re-serialized. Each region is
//!   parsed into a parser-agnostic [`Node`] tree and read into a
//!   [`Table`](tablemark_core::Table).
//! - **Layout and rendering** (`tablemark-core`): grid expansion, header
//!   flattening and GFM output.
//!
//! ## Example
//!
//! ```rust
//! let html = "<p>Intro</p>\n<table><tr><th rowspan=\"2\">Name</th><th colspan=\"2\">Info</th></tr>\
//!             <tr><th>Age</th><th>City</th></tr>\
//!             <tr><td>Tom</td><td>30</td><td>NY</td></tr></table>\n<p>Outro</p>";
//!
//! let markdown = tablemark::convert(html);
//! assert_eq!(
//!     markdown,
//!     "<p>Intro</p>\n| Name | Info > Age | Info > City |\n| :--- | :--- | :--- |\n| Tom | 30 | NY |\n<p>Outro</p>"
//! );
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod locate;
pub mod node;
pub mod parse;
#[cfg(feature = "html")]
pub mod pipeline;
#[cfg(feature = "html")]
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use locate::{locate_tables, Segment, TableLocator};
pub use node::{Node, NodeType};
pub use parse::{parse_table, SpanAttrs};
#[cfg(feature = "html")]
pub use service::TableConverter;
pub use tablemark_core::{Alignment, Options};
pub use utilities::*;

/// Error type for tablemark operations
///
/// Conversion itself never fails; these cover reading and decoding input.
#[derive(Debug, thiserror::Error)]
pub enum TablemarkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TablemarkError>;

/// Convert every table in `html` using default options.
#[cfg(feature = "html")]
pub fn convert(html: &str) -> String {
    TableConverter::new().convert(html)
}

/// Convert raw bytes, which must be UTF-8.
#[cfg(feature = "html")]
pub fn convert_bytes(bytes: &[u8]) -> Result<String> {
    let html = std::str::from_utf8(bytes)
        .map_err(|e| TablemarkError::InvalidInput(format!("input is not UTF-8: {}", e)))?;
    Ok(convert(html))
}

/// Read `reader` to the end and convert its contents.
#[cfg(feature = "html")]
pub fn convert_reader<R: std::io::Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    convert_bytes(&bytes)
}
