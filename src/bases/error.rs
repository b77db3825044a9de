//! Error types for basis rewriting

use crate::formula::Operator;
use std::fmt;
use std::io;

/// Errors raised while rewriting a formula into a basis
///
/// The passes over the full vocabulary never fail. Only the second stage of
/// the pipelines ([`nand_from_not_and`](crate::nand_from_not_and) and
/// [`implies_false_from_implies_not`](crate::implies_false_from_implies_not))
/// is restricted to the output of its first stage and reports any other
/// operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// The stage has no rule for an operator found in its input
    UnsupportedOperator {
        /// The operator that was found
        operator: Operator,
        /// Name of the stage processing the formula
        stage: &'static str,
    },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::UnsupportedOperator { operator, stage } => {
                write!(f, "Unsupported operator '{}' in {}", operator, stage)
            }
        }
    }
}

impl std::error::Error for RewriteError {}

impl From<RewriteError> for io::Error {
    fn from(err: RewriteError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Error returned when parsing an unknown [`Basis`](crate::Basis) name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBasisError {
    /// No basis has this name
    UnknownBasis {
        /// The name that was given
        name: String,
    },
}

impl fmt::Display for ParseBasisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBasisError::UnknownBasis { name } => write!(
                f,
                "Unknown basis {:?}, expected one of: not-and-or, not-and, nand, implies-not, implies-false",
                name
            ),
        }
    }
}

impl std::error::Error for ParseBasisError {}

impl From<ParseBasisError> for io::Error {
    fn from(err: ParseBasisError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
