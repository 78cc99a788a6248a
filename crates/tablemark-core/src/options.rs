//! Configuration options for table conversion

/// Column alignment written into the separator row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// `:---`
    #[default]
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
    /// `---` (no alignment hint)
    None,
}

impl Alignment {
    /// The separator cell for this alignment
    pub fn marker(self) -> &'static str {
        match self {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
            Alignment::None => "---",
        }
    }
}

/// Options for table conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Marker that replaces newlines inside a cell
    pub line_break: String,

    /// Separator placed between stacked header labels
    pub header_joiner: String,

    /// Prefix for labels synthesized for unnamed columns
    pub placeholder_prefix: String,

    /// Alignment written into the separator row
    pub alignment: Alignment,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            line_break: "<br>".to_string(),
            header_joiner: " > ".to_string(),
            placeholder_prefix: "col_".to_string(),
            alignment: Alignment::Left,
        }
    }
}
