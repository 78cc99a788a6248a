//! HTML parsing support.
//!
//! Parses an HTML string (typically one located `<table>` region) into the
//! [`Node`] tree the table parser reads.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a Node tree.
///
/// The fragment is parsed the way a browser would parse it inside `<body>`,
/// so a `<tr>` written directly under `<table>` ends up inside an implied
/// `<tbody>`. Comments and processing instructions are dropped.
///
/// # Example
///
/// ```rust
/// use tablemark::{parse_html, parse_table, Options};
///
/// let node = parse_html("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>");
/// let table = parse_table(&node, &Options::default()).unwrap();
/// assert_eq!(table.len(), 2);
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
