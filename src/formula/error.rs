//! Error types for formula parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to formula parsing
///
/// These errors occur when a formula string does not follow the formula
/// syntax, or when a variable name is not an identifier of that syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaParseError {
    /// The input is not a well-formed formula
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error occurred, if known
        position: Option<usize>,
    },
    /// A variable name that is empty or not of the form `[a-z][A-Za-z0-9_]*`
    InvalidVariableName {
        /// The rejected name
        name: Arc<str>,
    },
}

impl fmt::Display for FormulaParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaParseError::InvalidSyntax {
                message,
                input,
                position: Some(pos),
            } => write!(
                f,
                "Failed to parse formula at position {}: {}. Input: {:?}",
                pos, message, input
            ),
            FormulaParseError::InvalidSyntax {
                message,
                input,
                position: None,
            } => write!(f, "Failed to parse formula: {}. Input: {:?}", message, input),
            FormulaParseError::InvalidVariableName { name } => write!(
                f,
                "Invalid variable name {:?}: expected a lowercase letter followed by letters, digits or '_'",
                name
            ),
        }
    }
}

impl std::error::Error for FormulaParseError {}

impl From<FormulaParseError> for io::Error {
    fn from(err: FormulaParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
