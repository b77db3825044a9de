//! Rewriting into `{~, &}`

use super::{representative_for, rewrite, Encoding, RewriteError};
use crate::formula::{BinaryOp, Formula};

pub(crate) struct NotAnd;

impl NotAnd {
    /// De Morgan dual of `p | q`
    fn or(p: &Formula, q: &Formula) -> Formula {
        p.not().and(&q.not()).not()
    }
}

impl Encoding for NotAnd {
    const NAME: &'static str = "to_not_and";

    fn constant(value: bool, rep: &Formula) -> Formula {
        let contradiction = rep.and(&rep.not());
        if value {
            contradiction.not()
        } else {
            contradiction
        }
    }

    fn negation(operand: Formula) -> Formula {
        Formula::negation(operand)
    }

    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError> {
        Ok(match op {
            BinaryOp::And => Formula::binary(op, p, q),
            BinaryOp::Or => NotAnd::or(&p, &q),
            BinaryOp::Implies => p.and(&q.not()).not(),
            BinaryOp::Xor => NotAnd::or(&p.and(&q.not()), &p.not().and(&q)),
            BinaryOp::Iff => NotAnd::or(&p.and(&q), &p.not().and(&q.not())),
            BinaryOp::Nand => p.and(&q).not(),
            BinaryOp::Nor => NotAnd::or(&p, &q).not(),
        })
    }
}

/// Rewrite a formula so that it only uses `~` and `&`
///
/// Every other operator goes through its De Morgan dual. `F` becomes
/// `r & ~r` and `T` its negation, where `r` is the representative variable of
/// the formula. Never returns an error.
///
/// ```
/// use propositional_bases::{to_not_and, Formula};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = Formula::parse("p | q")?;
/// assert_eq!(to_not_and(&f)?.to_string(), "~(~p & ~q)");
///
/// // Without variables the representative is `p`
/// assert_eq!(to_not_and(&Formula::constant(true))?.to_string(), "~(p & ~p)");
/// # Ok(())
/// # }
/// ```
pub fn to_not_and(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for(NotAnd::NAME, formula);
    rewrite::<NotAnd>(formula, &rep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Basis;

    fn rewritten(text: &str) -> String {
        to_not_and(&Formula::parse(text).unwrap()).unwrap().to_string()
    }

    #[test]
    fn test_and_passes_through() {
        assert_eq!(rewritten("p & ~q"), "p & ~q");
    }

    #[test]
    fn test_implies() {
        assert_eq!(rewritten("p -> q"), "~(p & ~q)");
    }

    #[test]
    fn test_xor_and_iff() {
        assert_eq!(rewritten("p + q"), "~(~(p & ~q) & ~(~p & q))");
        assert_eq!(rewritten("p <-> q"), "~(~(p & q) & ~(~p & ~q))");
    }

    #[test]
    fn test_nand_nor() {
        assert_eq!(rewritten("p -& q"), "~(p & q)");
        assert_eq!(rewritten("p -| q"), "~~(~p & ~q)");
    }

    #[test]
    fn test_constants() {
        assert_eq!(rewritten("F"), "p & ~p");
        assert_eq!(rewritten("T"), "~(p & ~p)");
        assert_eq!(rewritten("x1 -> F"), "~(x1 & ~(x1 & ~x1))");
    }

    #[test]
    fn test_nested_formula() {
        let f = Formula::parse("(p | T) <-> (q -| ~r) + F").unwrap();
        let g = to_not_and(&f).unwrap();
        assert!(Basis::NotAnd.admits(&g));
        assert!(g.equivalent_to(&f));
    }
}
