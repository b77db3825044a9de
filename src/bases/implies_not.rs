//! Rewriting into `{->, ~}`

use super::{representative_for, rewrite, Encoding, RewriteError};
use crate::formula::{BinaryOp, Formula};

pub(crate) struct ImpliesNot;

impl Encoding for ImpliesNot {
    const NAME: &'static str = "to_implies_not";

    fn constant(value: bool, rep: &Formula) -> Formula {
        let tautology = rep.implies(rep);
        if value {
            tautology
        } else {
            tautology.not()
        }
    }

    fn negation(operand: Formula) -> Formula {
        Formula::negation(operand)
    }

    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError> {
        Ok(match op {
            BinaryOp::Implies => Formula::binary(op, p, q),
            BinaryOp::And => p.implies(&q.not()).not(),
            BinaryOp::Or => p.not().implies(&q),
            BinaryOp::Nand => p.implies(&q.not()),
            BinaryOp::Nor => p.not().implies(&q).not(),
            BinaryOp::Iff => {
                let (a, b) = (p.implies(&q), q.implies(&p));
                a.implies(&b.not()).not()
            }
            BinaryOp::Xor => {
                let (a, b) = (p.implies(&q), q.implies(&p));
                a.implies(&b.not())
            }
        })
    }
}

/// Rewrite a formula so that it only uses `->` and `~`
///
/// `T` becomes `r -> r` and `F` its negation, where `r` is the representative
/// variable of the formula. Never returns an error.
///
/// ```
/// use propositional_bases::{to_implies_not, Formula};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = Formula::parse("p | q")?;
/// assert_eq!(to_implies_not(&f)?.to_string(), "~p -> q");
/// # Ok(())
/// # }
/// ```
pub fn to_implies_not(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for(ImpliesNot::NAME, formula);
    rewrite::<ImpliesNot>(formula, &rep)
}
