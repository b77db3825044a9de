//! Display and Debug formatting for formulas

use super::{BinaryOp, Formula};
use std::fmt;

/// Where a subformula sits relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Top,       // Top level or inside parentheses
    Left(u8),  // Left operand of a binary operator with this precedence
    Right(u8), // Right operand of a binary operator with this precedence
    Operand,   // Inside a negation
}

/// Binding strength of a binary operator; higher binds tighter
fn precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Iff => 1,
        BinaryOp::Implies => 2,
        BinaryOp::Or | BinaryOp::Nor => 3,
        BinaryOp::Xor => 4,
        BinaryOp::And | BinaryOp::Nand => 5,
    }
}

/// Only implication groups to the right
fn right_associative(level: u8) -> bool {
    level == precedence(BinaryOp::Implies)
}

fn needs_parens(op: BinaryOp, position: Position) -> bool {
    let level = precedence(op);
    match position {
        Position::Top => false,
        Position::Operand => true,
        Position::Left(parent) => level < parent || (level == parent && right_associative(parent)),
        Position::Right(parent) => {
            level < parent || (level == parent && !right_associative(parent))
        }
    }
}

impl Formula {
    /// Format with operator precedence context to minimize parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, position: Position) -> fmt::Result {
        match self {
            Formula::Variable(name) => write!(f, "{}", name),
            Formula::Constant(value) => write!(f, "{}", if *value { "T" } else { "F" }),
            Formula::Not(operand) => {
                write!(f, "~")?;
                operand.fmt_with_context(f, Position::Operand)
            }
            Formula::Binary(op, left, right) => {
                let parens = needs_parens(*op, position);
                if parens {
                    write!(f, "(")?;
                }

                let level = precedence(*op);
                left.fmt_with_context(f, Position::Left(level))?;
                write!(f, " {} ", op.symbol())?;
                right.fmt_with_context(f, Position::Right(level))?;

                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

/// Debug formatting for formulas
///
/// Formats formulas in the parser syntax with minimal parentheses, so the
/// output of `{:?}` can be fed back to [`Formula::parse`].
///
/// ```
/// use propositional_bases::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// let r = Formula::variable("r");
///
/// let f = p.or(&q).and(&r.not());
/// assert_eq!(format!("{:?}", f), "(p | q) & ~r");
/// ```
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, Position::Top)
    }
}

/// Display formatting for formulas
///
/// Delegates to the `Debug` implementation. Use `{}` or `{:?}` interchangeably.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
