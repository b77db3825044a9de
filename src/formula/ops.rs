//! Fluent constructors and operator overloading for formulas

use super::{BinaryOp, Formula};
use std::ops::{BitAnd, BitOr, BitXor, Not};

// Fluent constructors
impl Formula {
    /// Negation: `~self`
    pub fn not(&self) -> Formula {
        Formula::negation(self.clone())
    }

    /// Conjunction: `self & other`
    pub fn and(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::And, self.clone(), other.clone())
    }

    /// Disjunction: `self | other`
    pub fn or(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Or, self.clone(), other.clone())
    }

    /// Implication: `self -> other`
    pub fn implies(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Implies, self.clone(), other.clone())
    }

    /// Exclusive or: `self + other`
    pub fn xor(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Xor, self.clone(), other.clone())
    }

    /// Biconditional: `self <-> other`
    pub fn iff(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Iff, self.clone(), other.clone())
    }

    /// Negated conjunction: `self -& other`
    pub fn nand(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Nand, self.clone(), other.clone())
    }

    /// Negated disjunction: `self -| other`
    pub fn nor(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Nor, self.clone(), other.clone())
    }
}

/// Negation for references: `!&p`
///
/// ```
/// use propositional_bases::Formula;
///
/// let p = Formula::variable("p");
/// assert_eq!(!&p, p.not());
/// ```
impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::not(self)
    }
}

/// Negation: `!p`
impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::negation(self)
    }
}

/// Conjunction for references: `&p & &q`
///
/// ```
/// use propositional_bases::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// assert_eq!(&p & &q, p.and(&q));
/// ```
impl BitAnd for &Formula {
    type Output = Formula;

    fn bitand(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

/// Conjunction: `p & q`
impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        Formula::binary(BinaryOp::And, self, rhs)
    }
}

/// Disjunction for references: `&p | &q`
impl BitOr for &Formula {
    type Output = Formula;

    fn bitor(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

/// Disjunction: `p | q`
impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        Formula::binary(BinaryOp::Or, self, rhs)
    }
}

/// Exclusive or for references: `&p ^ &q`
impl BitXor for &Formula {
    type Output = Formula;

    fn bitxor(self, rhs: &Formula) -> Formula {
        self.xor(rhs)
    }
}

/// Exclusive or: `p ^ q`
impl BitXor for Formula {
    type Output = Formula;

    fn bitxor(self, rhs: Formula) -> Formula {
        Formula::binary(BinaryOp::Xor, self, rhs)
    }
}
