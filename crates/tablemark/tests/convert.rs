//! End-to-end tests for in-place table conversion

use tablemark::{convert, locate_tables, Options, TableConverter};

// ============================================================================
// Pass-through
// ============================================================================

mod passthrough {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_documents_without_tables_unchanged() {
        let documents = [
            "",
            "plain text",
            "<p>Para</p>\n\n<ul><li>one</li></ul>",
            "  leading and trailing whitespace \r\n\t",
            "<div data-table=\"no\">tables are mentioned but not used</div>",
            "<tableau>not a table</tableau>",
            "日本語のテキスト",
        ];
        for html in documents {
            assert_eq!(convert(html), html);
        }
    }

    #[test]
    fn test_bytes_outside_tables_preserved() {
        let before = "<h1>Report</h1>\n\n  <p>Numbers &amp; more</p>\n";
        let between = "\n<!-- comment -->\n";
        let after = "\n<footer>end</footer>  ";
        let table = "<table><tr><th>A</th></tr><tr><td>1</td></tr></table>";
        let html = format!("{before}{table}{between}{table}{after}");

        let result = convert(&html);
        let markdown = "| A |\n| :--- |\n| 1 |";
        assert_eq!(result, format!("{before}{markdown}{between}{markdown}{after}"));
    }

    #[test]
    fn test_unclosed_table_left_as_text() {
        let html = "<p>x</p><table><tr><td>never closed";
        assert_eq!(convert(html), html);
    }

    #[test]
    fn test_open_tag_without_gt_left_as_text() {
        let html = "<p>x</p><table border=\"1\"";
        assert_eq!(convert(html), html);
    }

    #[test]
    fn test_empty_table_left_in_place() {
        let html = "a<table>\n</table>b";
        assert_eq!(convert(html), html);
    }

    #[test]
    fn test_only_tables_change() {
        let html = "x<table><tr><td>1</td></tr></table>y<table><tr><td>2</td></tr></table>z";
        let result = convert(html);
        let regions: Vec<_> = locate_tables(html).filter(|s| s.is_table()).collect();
        assert_eq!(regions.len(), 2);
        assert!(result.starts_with('x'));
        assert!(result.ends_with('z'));
        assert!(result.contains("| 1 |y| col_1 |"));
    }
}

// ============================================================================
// Table layout
// ============================================================================

mod layout {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_header_row() {
        let html = "<table>\
            <tr><th>Name</th><th>Age</th><th>City</th></tr>\
            <tr><td>Tom</td><td>30</td></tr>\
            <tr><td>Ann</td><td>25</td><td>LA</td></tr>\
            </table>";
        assert_eq!(
            convert(html),
            "| Name | Age | City |\n\
             | :--- | :--- | :--- |\n\
             | Tom | 30 |  |\n\
             | Ann | 25 | LA |"
        );
    }

    #[test]
    fn test_colspan_parent_over_two_children() {
        let html = "<table>\
            <tr><th colspan=\"2\">Top</th></tr>\
            <tr><th>Left</th><th>Right</th></tr>\
            <tr><td>1</td><td>2</td></tr>\
            </table>";
        assert_eq!(
            convert(html),
            "| Top > Left | Top > Right |\n| :--- | :--- |\n| 1 | 2 |"
        );
    }

    #[test]
    fn test_rowspan_header_joined_once() {
        let html = "<table>\
            <tr><th rowspan=\"2\">X</th><th colspan=\"2\">Y</th></tr>\
            <tr><th>a</th><th>b</th></tr>\
            </table>";
        let result = convert(html);
        assert!(result.starts_with("| X | Y > a | Y > b |"));
        assert!(!result.contains("X > X"));
    }

    #[test]
    fn test_stacked_header_with_rowspan_and_colspan() {
        let html = "<table><tr><th rowspan=\"2\">Name</th><th colspan=\"2\">Info</th></tr>\n\
                    <tr><th>Age</th><th>City</th></tr>\n\
                    <tr><td>Tom</td><td>30</td><td>NY</td></tr></table>";
        assert_eq!(
            convert(html),
            "| Name | Info > Age | Info > City |\n| :--- | :--- | :--- |\n| Tom | 30 | NY |"
        );
    }

    #[test]
    fn test_body_rowspan_repeats_text() {
        let html = "<table>\
            <thead><tr><th>Group</th><th>Item</th></tr></thead>\
            <tbody>\
            <tr><td rowspan=\"2\">Fruit</td><td>Apple</td></tr>\
            <tr><td>Pear</td></tr>\
            </tbody></table>";
        assert_eq!(
            convert(html),
            "| Group | Item |\n| :--- | :--- |\n| Fruit | Apple |\n| Fruit | Pear |"
        );
    }

    #[test]
    fn test_body_colspan_leaves_blank_slots() {
        let html = "<table>\
            <tr><th>A</th><th>B</th><th>C</th></tr>\
            <tr><td colspan=\"3\">wide</td></tr>\
            </table>";
        assert_eq!(
            convert(html),
            "| A | B | C |\n| :--- | :--- | :--- |\n| wide |  |  |"
        );
    }

    #[test]
    fn test_blank_headers_inherit_left_or_get_placeholder() {
        let html = "<table>\
            <tr><th></th><th>B</th></tr>\
            <tr><td>1</td><td>2</td><td>3</td></tr>\
            </table>";
        assert_eq!(
            convert(html),
            "| col_1 | B | B |\n| :--- | :--- | :--- |\n| 1 | 2 | 3 |"
        );
    }

    #[test]
    fn test_no_header_rows() {
        let html = "<table><tr><td>1</td><td>2</td></tr></table>";
        assert_eq!(convert(html), "| col_1 | col_2 |\n| :--- | :--- |\n| 1 | 2 |");
    }

    #[test]
    fn test_invalid_spans_treated_as_one() {
        let html = "<table>\
            <tr><th colspan=\"x\">A</th><th rowspan=\"-1\">B</th></tr>\
            <tr><td>1</td><td>2</td></tr>\
            </table>";
        assert_eq!(convert(html), "| A | B |\n| :--- | :--- |\n| 1 | 2 |");
    }

    #[test]
    fn test_oversized_rowspan_clipped_to_table() {
        let html = "<table>\
            <tr><th rowspan=\"99999999999\">X</th><th>Y</th></tr>\
            <tr><th>Z</th></tr>\
            <tr><td>1</td></tr>\
            </table>";
        assert_eq!(
            convert(html),
            "| X | Y > Z |\n\
             | :--- | :--- |\n\
             | X | 1 |"
        );
    }

    #[test]
    fn test_uppercase_tags() {
        let html = "<TABLE><TR><TH>A</TH></TR><TR><TD>1</TD></TR></TABLE>";
        assert_eq!(convert(html), "| A |\n| :--- |\n| 1 |");
    }
}

// ============================================================================
// Cell text
// ============================================================================

mod cell_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_newline_becomes_br() {
        let html = "<table><tr><th>H</th></tr><tr><td>A\nB</td></tr></table>";
        assert_eq!(convert(html), "| H |\n| :--- |\n| A<br>B |");
    }

    #[test]
    fn test_br_and_blocks_become_br() {
        let html = "<table><tr><th>H</th></tr>\
            <tr><td>one<br>two<p>three</p></td></tr></table>";
        assert_eq!(convert(html), "| H |\n| :--- |\n| one<br>two<br>three |");
    }

    #[test]
    fn test_inline_markup_flattened() {
        let html = "<table><tr><th>H</th></tr>\
            <tr><td>  <b>bold</b>   and <a href=\"#\">link</a> </td></tr></table>";
        assert_eq!(convert(html), "| H |\n| :--- |\n| bold and link |");
    }

    #[test]
    fn test_pipes_not_escaped() {
        let html = "<table><tr><th>a|b</th></tr><tr><td>c | d</td></tr></table>";
        assert_eq!(convert(html), "| a|b |\n| :--- |\n| c | d |");
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<table><tr><th>Q&amp;A</th></tr><tr><td>1&nbsp;000</td></tr></table>";
        assert_eq!(convert(html), "| Q&A |\n| :--- |\n| 1\u{a0}000 |");
    }

    #[test]
    fn test_ideographic_space_kept() {
        let html = "<table><tr><th>都市</th></tr><tr><td> 東\u{3000}京 </td></tr></table>";
        assert_eq!(convert(html), "| 都市 |\n| :--- |\n| 東\u{3000}京 |");
    }
}

// ============================================================================
// Nesting and options
// ============================================================================

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_close_tag_ends_region() {
        let html = "<table><tr><td><table><tr><td>in</td></tr></table></td></tr></table>";
        assert_eq!(
            convert(html),
            "| col_1 |\n| :--- |\n| in |</td></tr></table>"
        );
    }
}

mod options {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablemark::Alignment;

    #[test]
    fn test_custom_options() {
        let converter = TableConverter::with_options(Options {
            line_break: " ".to_string(),
            header_joiner: " / ".to_string(),
            placeholder_prefix: "c".to_string(),
            alignment: Alignment::Center,
        });
        let html = "<table>\
            <tr><th rowspan=\"2\"></th><th colspan=\"2\">Top</th></tr>\
            <tr><th>L</th><th>R</th></tr>\
            <tr><td>x</td><td>a<br>b</td><td>2</td></tr>\
            </table>";
        assert_eq!(
            converter.convert(html),
            "| c1 | Top / L | Top / R |\n| :---: | :---: | :---: |\n| x | a b | 2 |"
        );
    }

    #[test]
    fn test_deterministic() {
        let html = "<table><tr><th rowspan=\"3\">A</th><th>B</th></tr>\
            <tr><th>C</th></tr><tr><td>1</td></tr></table>";
        assert_eq!(convert(html), convert(html));
    }
}
