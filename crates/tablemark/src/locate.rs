//! Table region locator.
//!
//! Splits a document into `<table>…</table>` regions and the literal text
//! around them by plain text search. Nothing outside a region is parsed, so
//! concatenating the segments always reproduces the input exactly.
//!
//! Nesting is not tracked: a region ends at the first `</table>` after its
//! opening tag, so a table nested inside another cuts the outer one short.

use std::ops::Range;

use tracing::debug;

const OPEN_TAG: &str = "<table";
const CLOSE_TAG: &str = "</table>";

/// A piece of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any table, passed through untouched
    Text { span: Range<usize>, text: &'a str },
    /// A complete `<table>…</table>` region
    Table { span: Range<usize>, html: &'a str },
}

impl<'a> Segment<'a> {
    /// Byte range of this segment in the source
    pub fn span(&self) -> Range<usize> {
        match self {
            Segment::Text { span, .. } | Segment::Table { span, .. } => span.clone(),
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text { text, .. } => text,
            Segment::Table { html, .. } => html,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Segment::Table { .. })
    }
}

/// Lazy iterator over the [`Segment`]s of a document, in order.
#[derive(Debug, Clone)]
pub struct TableLocator<'a> {
    source: &'a str,
    /// ASCII-lowercased copy of `source`; byte offsets match.
    lower: String,
    pos: usize,
    pending: Option<Segment<'a>>,
}

/// Locate every table region in `source`.
///
/// Tag names match case-insensitively. If an opening tag has no `>`, or a
/// table has no `</table>`, the rest of the document is returned as text.
pub fn locate_tables(source: &str) -> TableLocator<'_> {
    TableLocator {
        source,
        lower: source.to_ascii_lowercase(),
        pos: 0,
        pending: None,
    }
}

impl<'a> TableLocator<'a> {
    fn text(&self, span: Range<usize>) -> Segment<'a> {
        let source: &'a str = self.source;
        Segment::Text {
            text: &source[span.clone()],
            span,
        }
    }

    /// Emit everything from the current position as text and stop.
    fn rest(&mut self) -> Segment<'a> {
        let segment = self.text(self.pos..self.source.len());
        self.pos = self.source.len();
        segment
    }

    /// Next `<table` that is followed by a tag boundary
    fn find_open(&self, from: usize) -> Option<usize> {
        let bytes = self.lower.as_bytes();
        let mut from = from;
        loop {
            let start = from + self.lower[from..].find(OPEN_TAG)?;
            let after = start + OPEN_TAG.len();
            match bytes.get(after) {
                None => return Some(start),
                Some(b) if *b == b'>' || *b == b'/' || b.is_ascii_whitespace() => {
                    return Some(start)
                }
                Some(_) => from = after,
            }
        }
    }
}

impl<'a> Iterator for TableLocator<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }
        if self.pos >= self.source.len() {
            return None;
        }

        let Some(start) = self.find_open(self.pos) else {
            return Some(self.rest());
        };

        let Some(gt) = self.lower[start..].find('>').map(|i| start + i) else {
            debug!(offset = start, "table opening tag has no '>', leaving rest as text");
            return Some(self.rest());
        };

        let Some(close) = self.lower[gt + 1..].find(CLOSE_TAG).map(|i| gt + 1 + i) else {
            debug!(offset = start, "table has no closing tag, leaving rest as text");
            return Some(self.rest());
        };

        let end = close + CLOSE_TAG.len();
        let source: &'a str = self.source;
        let table = Segment::Table {
            span: start..end,
            html: &source[start..end],
        };
        let before = self.pos..start;
        self.pos = end;

        if before.is_empty() {
            Some(table)
        } else {
            self.pending = Some(table);
            Some(self.text(before))
        }
    }
}
