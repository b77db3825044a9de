//! Rewriting into `{-&}`
//!
//! Two stages: [`to_not_and`](super::to_not_and) first removes everything but
//! `~` and `&`, then [`nand_from_not_and`] expresses those two with `-&`.

use super::not_and::NotAnd;
use super::{representative_for, rewrite, unsupported, Encoding, RewriteError};
use crate::formula::{BinaryOp, Formula};
use log::trace;

pub(crate) struct NandFromNotAnd;

impl Encoding for NandFromNotAnd {
    const NAME: &'static str = "nand_from_not_and";

    // Unreachable after the first stage, kept for direct calls
    fn constant(value: bool, rep: &Formula) -> Formula {
        let t = rep.nand(&rep.nand(rep));
        if value {
            t
        } else {
            t.nand(&t)
        }
    }

    fn negation(operand: Formula) -> Formula {
        operand.nand(&operand)
    }

    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError> {
        match op {
            BinaryOp::And => {
                let t = p.nand(&q);
                Ok(t.nand(&t))
            }
            _ => Err(unsupported::<NandFromNotAnd>(op)),
        }
    }
}

/// Rewrite a formula so that it only uses `-&`
///
/// The formula is first restricted to `~` and `&`, then `~x` becomes
/// `x -& x` and `p & q` becomes `t -& t` with `t = p -& q`. No constant
/// survives. Never returns an error.
///
/// ```
/// use propositional_bases::{to_nand, Basis, Formula};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = Formula::parse("~p")?;
/// assert_eq!(to_nand(&f)?.to_string(), "p -& p");
///
/// let g = Formula::parse("p -> T")?;
/// let h = to_nand(&g)?;
/// assert!(Basis::Nand.admits(&h));
/// assert!(h.is_tautology());
/// # Ok(())
/// # }
/// ```
pub fn to_nand(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for("to_nand", formula);
    let not_and = rewrite::<NotAnd>(formula, &rep)?;
    trace!(
        "to_nand: first stage produced {} distinct nodes",
        not_and.shared_size()
    );
    rewrite::<NandFromNotAnd>(&not_and, &rep)
}

/// Second stage of [`to_nand`]: rewrite a `{~, &}` formula with `-&` alone
///
/// Constants are accepted: `T` becomes `r -& (r -& r)` and `F` its negation,
/// where `r` is the representative variable of the formula.
///
/// # Errors
///
/// Returns [`RewriteError::UnsupportedOperator`] if the formula contains a
/// binary operator other than `&`.
///
/// ```
/// use propositional_bases::{nand_from_not_and, Formula, RewriteError};
///
/// let f = Formula::parse("p | q").unwrap();
/// assert!(matches!(
///     nand_from_not_and(&f),
///     Err(RewriteError::UnsupportedOperator { .. })
/// ));
/// ```
pub fn nand_from_not_and(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for(NandFromNotAnd::NAME, formula);
    rewrite::<NandFromNotAnd>(formula, &rep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Operator;
    use crate::{to_not_and, Basis};

    #[test]
    fn test_conjunction_uses_double_nand() {
        let f = Formula::parse("p & q").unwrap();
        assert_eq!(
            to_nand(&f).unwrap().to_string(),
            "p -& q -& (p -& q)"
        );
    }

    #[test]
    fn test_nand_input_is_equivalent() {
        let f = Formula::parse("p -& q").unwrap();
        let g = to_nand(&f).unwrap();
        assert!(Basis::Nand.admits(&g));
        assert!(g.equivalent_to(&Formula::parse("~(p & q)").unwrap()));
    }

    #[test]
    fn test_constants_in_second_stage() {
        let t = nand_from_not_and(&Formula::constant(true)).unwrap();
        assert_eq!(t.to_string(), "p -& (p -& p)");
        assert!(t.is_tautology());

        let f = nand_from_not_and(&Formula::parse("F & q").unwrap()).unwrap();
        assert!(Basis::Nand.admits(&f));
        assert!(f.is_contradiction());
    }

    #[test]
    fn test_second_stage_rejects_other_operators() {
        for text in ["p | q", "p -> q", "~(p + q)", "p -& q"] {
            let err = nand_from_not_and(&Formula::parse(text).unwrap()).unwrap_err();
            let RewriteError::UnsupportedOperator { stage, .. } = err;
            assert_eq!(stage, "nand_from_not_and");
        }

        let err = nand_from_not_and(&Formula::parse("p & (q <-> r)").unwrap()).unwrap_err();
        assert_eq!(
            err,
            RewriteError::UnsupportedOperator {
                operator: Operator::Iff,
                stage: "nand_from_not_and",
            }
        );
    }

    #[test]
    fn test_matches_explicit_pipeline() {
        let f = Formula::parse("(p -> q) <-> ~r | T").unwrap();
        let direct = to_nand(&f).unwrap();
        let staged = nand_from_not_and(&to_not_and(&f).unwrap()).unwrap();
        assert_eq!(direct, staged);
        assert!(direct.equivalent_to(&f));
    }
}
