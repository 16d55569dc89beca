// Error handling for uritemplate

use thiserror::Error;

/// Structural errors found while parsing a template.
///
/// `position` is the byte offset of the `{` that opens the malformed
/// expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The character after `{` is neither an operator nor the start of a
    /// variable name.
    #[error("invalid operator '{operator}' in expression at position {position}")]
    InvalidOperator { operator: char, position: usize },

    /// A variable specifier is not `name`, `name:N` (N in 1-9999) or `name*`.
    #[error("invalid variable specifier '{spec}' in expression at position {position}")]
    InvalidSpecifier { spec: String, position: usize },
}

impl ExpandError {
    pub fn position(&self) -> usize {
        match self {
            ExpandError::InvalidOperator { position, .. } => *position,
            ExpandError::InvalidSpecifier { position, .. } => *position,
        }
    }
}
