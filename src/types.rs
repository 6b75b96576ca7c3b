/// Sort key establishing the total output order of groups and entries
pub type Order = i64;

/// Distance between the order keys of successive parsed lines
pub const ORDER_STEP: Order = 10;

/// Position record tying a header or entry to the physical line that defined it.
///
/// `line` holds the original text including its terminator. An empty `line`
/// is a placeholder: it marks a position without any source text, such as the
/// implicit header of content that precedes the first group, or an element
/// built with an explicit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLine {
    /// Order key assigned in source order
    pub order: Order,

    /// Original line text, terminator included
    pub line: String,

    /// Blank and comment lines preceding this line
    pub leading: Vec<String>,

    /// Blank lines directly following this line
    pub trailing: Vec<String>,
}

impl RawLine {
    /// Create a record for a parsed line
    pub fn new(order: Order, line: impl Into<String>, leading: Vec<String>) -> Self {
        Self {
            order,
            line: line.into(),
            leading,
            trailing: Vec::new(),
        }
    }

    /// Create a placeholder record with no source text
    pub fn placeholder(order: Order) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Whether this record carries no source text
    pub fn is_placeholder(&self) -> bool {
        self.line.is_empty()
    }
}
