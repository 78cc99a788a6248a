//! GFM table serialization

use crate::header::HeaderRow;
use crate::options::Options;

/// Render a header row and body rows as a GFM pipe table.
///
/// Every body row is truncated or padded to the header's width. Cell text is
/// written as-is; a `|` inside a cell is not escaped. Lines are joined with
/// `\n` and the result has no trailing newline.
pub fn render(headers: &HeaderRow, body: &[Vec<String>], options: &Options) -> String {
    let width = headers.len();
    let mut lines = Vec::with_capacity(body.len() + 2);

    lines.push(render_row(headers.iter().map(String::as_str)));
    lines.push(render_row(
        std::iter::repeat(options.alignment.marker()).take(width),
    ));

    for row in body {
        let cells = row
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat(""))
            .take(width);
        lines.push(render_row(cells));
    }

    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}
