//! Parsing support for formulas

use super::error::FormulaParseError;
use super::Formula;
use lalrpop_util::ParseError;
use std::str::FromStr;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/formula/formula.rs"));
}

impl Formula {
    /// Parse a formula from a string
    ///
    /// Supports the operators `~`, `&`, `|`, `->`, `+` (xor), `<->`, `-&` (nand)
    /// and `-|` (nor), the constants `T` and `F`, and parentheses for grouping.
    /// See the [module documentation](crate::formula) for precedence rules.
    ///
    /// ```
    /// use propositional_bases::Formula;
    ///
    /// let f = Formula::parse("p -& (q <-> F)").unwrap();
    /// assert_eq!(f.variables().len(), 2);
    /// assert!(Formula::parse("p & ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormulaParseError> {
        parser_impl::ExprParser::new().parse(input).map_err(|e| {
            let position = error_position(&e);
            FormulaParseError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
        })
    }
}

impl FromStr for Formula {
    type Err = FormulaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

/// Byte offset reported by the parser for an error, if any
fn error_position<T, E>(error: &ParseError<usize, T, E>) -> Option<usize> {
    match error {
        ParseError::InvalidToken { location } | ParseError::UnrecognizedEof { location, .. } => {
            Some(*location)
        }
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        }
        | ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
