//! Rewriting into `{~, &, |}`

use super::{representative_for, rewrite, Encoding, RewriteError};
use crate::formula::{BinaryOp, Formula};

pub(crate) struct NotAndOr;

impl Encoding for NotAndOr {
    const NAME: &'static str = "to_not_and_or";

    fn constant(value: bool, rep: &Formula) -> Formula {
        if value {
            rep.or(&rep.not())
        } else {
            rep.and(&rep.not())
        }
    }

    fn negation(operand: Formula) -> Formula {
        Formula::negation(operand)
    }

    fn binary(op: BinaryOp, p: Formula, q: Formula) -> Result<Formula, RewriteError> {
        Ok(match op {
            BinaryOp::And | BinaryOp::Or => Formula::binary(op, p, q),
            BinaryOp::Implies => p.not().or(&q),
            BinaryOp::Xor => p.and(&q.not()).or(&p.not().and(&q)),
            BinaryOp::Iff => p.and(&q).or(&p.not().and(&q.not())),
            BinaryOp::Nand => p.and(&q).not(),
            BinaryOp::Nor => p.or(&q).not(),
        })
    }
}

/// Rewrite a formula so that it only uses `~`, `&` and `|`
///
/// `T` becomes `r | ~r` and `F` becomes `r & ~r`, where `r` is the
/// representative variable of the formula. Never returns an error.
///
/// ```
/// use propositional_bases::{to_not_and_or, Formula};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = Formula::parse("p + q")?;
/// assert_eq!(to_not_and_or(&f)?.to_string(), "p & ~q | ~p & q");
/// # Ok(())
/// # }
/// ```
pub fn to_not_and_or(formula: &Formula) -> Result<Formula, RewriteError> {
    let rep = representative_for(NotAndOr::NAME, formula);
    rewrite::<NotAndOr>(formula, &rep)
}
