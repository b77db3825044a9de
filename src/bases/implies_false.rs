//! Rewriting into `{->, F}`
//!
//! Two stages. The first applies the negation and binary rules of
//! [`to_implies_not`](super::to_implies_not) but writes `F` as `F` and `T` as
//! `~F` instead of going through the representative variable. The second,
//! [`implies_false_from_implies_not`], replaces `~x` with `x -> F`.
//!
//! On formulas without constants this equals
//! `implies_false_from_implies_not(&to_implies_not(f)?)`; with constants the
//! two are equivalent.

use super::implies_not::ImpliesNot;
use super::{representative_for, rewrite, unsupported, Encoding, RewriteError};
use crate::formula::{BinaryOp, Formula};
use log::trace;

/// First stage: the `{->, ~}` rules, with constants written in terms of `F`
struct ImpliesNotKeepingFalse;

impl Encoding for ImpliesNotKeepingFalse {
    const NAME: &'static str = "to_implies_false";

    fn constant(value: bool, _rep: &Formula) -> Formula {
        let falsum = Formula::constant(false);
        if value {
            falsum.not()
        } else {
            falsum
        }
    }

    fn negation(operand: Formula) -> Formula {
        ImpliesNot::negation(operand)
    }

    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError> {
        ImpliesNot::binary(op, p, q)
    }
}

pub(crate) struct ImpliesFalseFromImpliesNot;

impl Encoding for ImpliesFalseFromImpliesNot {
    const NAME: &'static str = "implies_false_from_implies_not";

    // `F` belongs to the basis; `T` only reaches here on direct calls
    fn constant(value: bool, _rep: &Formula) -> Formula {
        let falsum = Formula::constant(false);
        if value {
            falsum.implies(&falsum)
        } else {
            falsum
        }
    }

    fn negation(operand: Formula) -> Formula {
        operand.implies(&Formula::constant(false))
    }

    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError> {
        match op {
            BinaryOp::Implies => Ok(Formula::binary(op, p, q)),
            _ => Err(unsupported::<ImpliesFalseFromImpliesNot>(op)),
        }
    }
}

/// Rewrite a formula so that it only uses `->` and the constant `F`
///
/// The formula is first restricted to `->`, `~` and `F`, with `T` written as
/// `~F`, then `~x` becomes `x -> F`. `F` belongs to the basis and is kept;
/// `T` becomes `F -> F`.
/// Never returns an error.
///
/// ```
/// use propositional_bases::{to_implies_false, Formula};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = Formula::parse("~p")?;
/// assert_eq!(to_implies_false(&f)?.to_string(), "p -> F");
///
/// let falsum = Formula::constant(false);
/// assert_eq!(to_implies_false(&falsum)?, falsum);
/// # Ok(())
/// # }
/// ```
pub fn to_implies_false(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for(ImpliesNotKeepingFalse::NAME, formula);
    let implies_not = rewrite::<ImpliesNotKeepingFalse>(formula, &rep)?;
    trace!(
        "to_implies_false: first stage produced {} distinct nodes",
        implies_not.shared_size()
    );
    rewrite::<ImpliesFalseFromImpliesNot>(&implies_not, &rep)
}

/// Second stage of [`to_implies_false`]: rewrite a `{->, ~}` formula with
/// `->` and `F` alone
///
/// `F` is kept as is and `T` becomes `F -> F`.
///
/// # Errors
///
/// Returns [`RewriteError::UnsupportedOperator`] if the formula contains a
/// binary operator other than `->`.
pub fn implies_false_from_implies_not(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for(ImpliesFalseFromImpliesNot::NAME, formula);
    rewrite::<ImpliesFalseFromImpliesNot>(formula, &rep)
}
