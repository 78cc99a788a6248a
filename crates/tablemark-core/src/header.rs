//! Header flattening
//!
//! Stacked header rows are merged into one label per column, joined as
//! `Parent > Child`.

use std::ops::Deref;

use crate::grid::Grid;
use crate::options::Options;

/// One flattened label per grid column. No label is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow(Vec<String>);

impl HeaderRow {
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn into_labels(self) -> Vec<String> {
        self.0
    }
}

impl Deref for HeaderRow {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// Merge the first `layers` rows of `grid` into a single [`HeaderRow`].
///
/// Within a layer, a blank slot inherits the nearest non-blank label to its
/// left, which spreads a `colspan` label over every column it covers. A label
/// equal to the one this column took from the previous layer is skipped, so a
/// `rowspan` header is not joined with itself. Columns that end up without a
/// label are named `<placeholder_prefix><n>` (1-based).
pub fn flatten_headers(grid: &Grid, layers: usize, options: &Options) -> HeaderRow {
    let width = grid.width();
    let mut labels = vec![String::new(); width];
    let mut previous: Vec<Option<&str>> = vec![None; width];

    for layer in grid.rows().iter().take(layers) {
        let mut current = "";
        let propagated: Vec<&str> = layer
            .iter()
            .map(|value| {
                let value = value.trim_matches(|c: char| c.is_ascii_whitespace());
                if !value.is_empty() {
                    current = value;
                }
                current
            })
            .collect();

        for (col, segment) in propagated.into_iter().enumerate() {
            if segment.is_empty() || previous[col] == Some(segment) {
                continue;
            }

            let label = &mut labels[col];
            if !label.is_empty() {
                label.push_str(&options.header_joiner);
            }
            label.push_str(segment);
            previous[col] = Some(segment);
        }
    }

    for (col, label) in labels.iter_mut().enumerate() {
        if label.is_empty() {
            *label = format!("{}{}", options.placeholder_prefix, col + 1);
        }
    }

    HeaderRow(labels)
}
