//! Rewriting formulas into restricted operator bases
//!
//! Every pass takes a formula over the full vocabulary and returns a formula
//! with the same truth table that only uses the operators of one [`Basis`].
//! Truth constants are replaced by a tautology or contradiction over the
//! [representative variable](Formula::representative_variable) of the input,
//! except for `F` in the `{->, F}` basis where it is kept.
//!
//! | Basis | Pass | Built from |
//! |-------|------|------------|
//! | `{~, &, \|}` | [`to_not_and_or`] | |
//! | `{~, &}` | [`to_not_and`] | |
//! | `{-&}` | [`to_nand`] | [`to_not_and`], then [`nand_from_not_and`] |
//! | `{->, ~}` | [`to_implies_not`] | |
//! | `{->, F}` | [`to_implies_false`] | the [`to_implies_not`] rules with constants as `F`/`~F`, then [`implies_false_from_implies_not`] |
//!
//! # Examples
//!
//! ```
//! use propositional_bases::{to_not_and_or, to_nand, Basis, Formula};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let f = Formula::parse("p -> q")?;
//!
//! let g = to_not_and_or(&f)?;
//! assert_eq!(g.to_string(), "~p | q");
//!
//! let h = to_nand(&f)?;
//! assert!(Basis::Nand.admits(&h));
//! assert!(h.equivalent_to(&f));
//! # Ok(())
//! # }
//! ```

pub mod error;
mod implies_false;
mod implies_not;
mod nand;
mod not_and;
mod not_and_or;

pub use error::{ParseBasisError, RewriteError};
pub use implies_false::{implies_false_from_implies_not, to_implies_false};
pub use implies_not::to_implies_not;
pub use nand::{nand_from_not_and, to_nand};
pub use not_and::to_not_and;
pub use not_and_or::to_not_and_or;

use crate::formula::{BinaryOp, Formula, Operator};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A restricted operator vocabulary that formulas can be rewritten into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Basis {
    /// Negation, conjunction and disjunction
    NotAndOr,
    /// Negation and conjunction
    NotAnd,
    /// Negated conjunction alone
    Nand,
    /// Implication and negation
    ImpliesNot,
    /// Implication and the constant `F`
    ImpliesFalse,
}

impl Basis {
    /// Every basis, in declaration order
    pub const ALL: [Basis; 5] = [
        Basis::NotAndOr,
        Basis::NotAnd,
        Basis::Nand,
        Basis::ImpliesNot,
        Basis::ImpliesFalse,
    ];

    /// The operators (and constants) a formula in this basis may contain
    pub fn operators(self) -> &'static [Operator] {
        match self {
            Basis::NotAndOr => &[Operator::Not, Operator::And, Operator::Or],
            Basis::NotAnd => &[Operator::Not, Operator::And],
            Basis::Nand => &[Operator::Nand],
            Basis::ImpliesNot => &[Operator::Implies, Operator::Not],
            Basis::ImpliesFalse => &[Operator::Implies, Operator::False],
        }
    }

    /// Whether the formula only uses operators of this basis
    pub fn admits(self, formula: &Formula) -> bool {
        formula
            .operators()
            .iter()
            .all(|op| self.operators().contains(op))
    }

    /// Rewrite a formula into this basis
    ///
    /// Dispatches to the pass of the basis, e.g. [`to_nand`] for [`Basis::Nand`].
    pub fn rewrite(self, formula: &Formula) -> Result<Formula, RewriteError> {
        match self {
            Basis::NotAndOr => to_not_and_or(formula),
            Basis::NotAnd => to_not_and(formula),
            Basis::Nand => to_nand(formula),
            Basis::ImpliesNot => to_implies_not(formula),
            Basis::ImpliesFalse => to_implies_false(formula),
        }
    }

    /// Name used by `Display` and `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Basis::NotAndOr => "not-and-or",
            Basis::NotAnd => "not-and",
            Basis::Nand => "nand",
            Basis::ImpliesNot => "implies-not",
            Basis::ImpliesFalse => "implies-false",
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Basis {
    type Err = ParseBasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Basis::ALL
            .into_iter()
            .find(|basis| basis.name() == s)
            .ok_or_else(|| ParseBasisError::UnknownBasis {
                name: s.to_string(),
            })
    }
}

/// Per-basis rewrite rules plugged into [`rewrite`]
///
/// Operands handed to `negation` and `binary` are already rewritten.
pub(crate) trait Encoding {
    /// Name reported in errors and log records
    const NAME: &'static str;

    /// Encoding of the constant `value`, built from the representative variable
    fn constant(value: bool, rep: &Formula) -> Formula;

    /// Encoding of `~operand`
    fn negation(operand: Formula) -> Formula;

    /// Encoding of `p op q`
    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError>;
}

/// Structural recursion shared by every pass
///
/// Children are rewritten before their parent; `rep` is passed down unchanged.
/// A subformula shared by several parents is rewritten once and its result
/// shared in turn, so the work is linear in the number of distinct nodes.
pub(crate) fn rewrite<E: Encoding>(
    formula: &Formula,
    rep: &Formula,
) -> Result<Formula, RewriteError> {
    let mut done = HashMap::new();
    rewrite_shared::<E>(formula, rep, &mut done)
}

/// Rewritten compound nodes, keyed by the address of the source node
type Rewritten = HashMap<*const Formula, Formula>;

fn rewrite_shared<E: Encoding>(
    formula: &Formula,
    rep: &Formula,
    done: &mut Rewritten,
) -> Result<Formula, RewriteError> {
    let key: *const Formula = formula;
    if let Some(rewritten) = done.get(&key) {
        return Ok(rewritten.clone());
    }
    let result = match formula {
        Formula::Variable(_) => return Ok(formula.clone()),
        Formula::Constant(value) => return Ok(E::constant(*value, rep)),
        Formula::Not(operand) => E::negation(rewrite_shared::<E>(operand, rep, done)?),
        Formula::Binary(op, left, right) => {
            let p = rewrite_shared::<E>(left, rep, done)?;
            let q = rewrite_shared::<E>(right, rep, done)?;
            E::binary(*op, p, q)?
        }
    };
    done.insert(key, result.clone());
    Ok(result)
}

/// Compute the representative variable of a top-level call and log the call
pub(crate) fn representative_for(pass: &str, formula: &Formula) -> Formula {
    let rep = formula.representative_variable();
    debug!(
        "{}: {} distinct nodes, representative {}",
        pass,
        formula.shared_size(),
        rep
    );
    rep
}

/// Error for an operator the given stage has no rule for
pub(crate) fn unsupported<E: Encoding>(op: BinaryOp) -> RewriteError {
    RewriteError::UnsupportedOperator {
        operator: op.into(),
        stage: E::NAME,
    }
}
