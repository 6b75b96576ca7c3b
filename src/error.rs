use std::fmt;

/// Result type alias for configuration operations
pub type ParseResult<T> = Result<T, ConfigError>;

/// Errors that can occur while classifying lines or looking up values.
///
/// Parsing and rendering never surface these: malformed lines are absorbed
/// into the document structure. Only read-only lookups such as
/// [`Configuration::get`](crate::Configuration::get) return them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A line could not be classified by the grammar
    LineSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Group not present in the configuration
    GroupNotFound { group: String },

    /// Key not present in the group
    KeyNotFound { group: String, key: String },
}

impl ConfigError {
    /// Create a line syntax error
    pub fn line_syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        ConfigError::LineSyntax {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a group not found error
    pub fn group_not_found(group: impl Into<String>) -> Self {
        ConfigError::GroupNotFound {
            group: group.into(),
        }
    }

    /// Create a key not found error
    pub fn key_not_found(group: impl Into<String>, key: impl Into<String>) -> Self {
        ConfigError::KeyNotFound {
            group: group.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LineSyntax {
                line,
                column,
                message,
            } => {
                write!(
                    f,
                    "Syntax error at line {}, column {}: {}",
                    line, column, message
                )
            }
            ConfigError::GroupNotFound { group } => {
                write!(f, "Group '[{}]' not found", group)
            }
            ConfigError::KeyNotFound { group, key } => {
                write!(f, "Key '{}' not found in group '[{}]'", key, group)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl<R: pest::RuleType> From<pest::error::Error<R>> for ConfigError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        ConfigError::LineSyntax {
            line,
            column,
            message: err.variant.to_string(),
        }
    }
}
