//! Utility functions and constants for cell text extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use tablemark_core::Options;

use crate::node::Node;

/// Block-level HTML elements. Their boundaries become line breaks in cell text.
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "center", "dd",
    "details", "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hgroup", "hr", "li", "main", "menu", "nav", "ol", "p", "pre", "section",
    "summary", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Elements whose text is never shown
pub const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// HTML's whitespace set minus `\n`, which splits lines. Unicode spaces such
/// as U+00A0 and U+3000 are cell content.
static INLINE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\r\x0C]+").expect("static whitespace pattern"));

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.iter().any(|block| block.eq_ignore_ascii_case(tag))
}

/// Check if a tag's text content is hidden
pub fn is_hidden(tag: &str) -> bool {
    HIDDEN_ELEMENTS.iter().any(|hidden| hidden.eq_ignore_ascii_case(tag))
}

/// Raw descendant text of a cell.
///
/// `<br>` and the edges of block-level elements become `\n`; hidden elements
/// such as `<script>` contribute nothing. Newlines already in the text are kept.
pub fn cell_text(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(child.node_value.as_deref().unwrap_or(""));
            continue;
        }

        let tag = child.tag_name();
        if tag == "br" {
            out.push('\n');
        } else if is_hidden(tag) {
            continue;
        } else if is_block(tag) {
            out.push('\n');
            collect_text(child, out);
            out.push('\n');
        } else {
            collect_text(child, out);
        }
    }
}

/// Normalize raw cell text into a single table-cell line.
///
/// Each line is trimmed of ASCII whitespace and its ASCII whitespace runs
/// collapsed to one space; blank lines are dropped and the rest are joined
/// with `options.line_break`.
pub fn normalize_cell_text(text: &str, options: &Options) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.trim_matches(|c: char| c.is_ascii_whitespace());
            INLINE_WHITESPACE.replace_all(line, " ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(options.line_break.as_str())
}
