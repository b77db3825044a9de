//! Propositional formula trees
//!
//! This module provides [`Formula`], an immutable tree over variables, the two
//! truth constants, negation and seven binary operators. Formulas can be built
//! with constructors, the fluent method API, operator overloading, the
//! `formula!` macro, or parsed from strings.
//!
//! # Syntax
//!
//! | Operator | Symbol | Precedence |
//! |----------|--------|------------|
//! | NOT      | `~`    | tightest   |
//! | AND, NAND | `&`, `-&` | |
//! | XOR      | `+`    | |
//! | OR, NOR  | `\|`, `-\|` | |
//! | IMPLIES  | `->` (right associative) | |
//! | IFF      | `<->`  | loosest    |
//!
//! Variables are identifiers starting with a lowercase letter; `T` and `F` are
//! the constants.
//!
//! ```
//! use propositional_bases::Formula;
//!
//! # fn main() -> std::io::Result<()> {
//! let f = Formula::parse("p -> q | ~r")?;
//! assert_eq!(f.to_string(), "p -> q | ~r");
//!
//! let g = Formula::parse("(p -> q) -> r")?;
//! assert_eq!(g.to_string(), "(p -> q) -> r");
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod ops;
mod parser;

pub use error::FormulaParseError;

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

/// Name used for the representative variable of a formula without variables
const DEFAULT_REPRESENTATIVE: &str = "p";

/// The binary operators of the formula vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryOp {
    /// Conjunction `&`
    And,
    /// Disjunction `|`
    Or,
    /// Implication `->`
    Implies,
    /// Exclusive or `+`
    Xor,
    /// Biconditional `<->`
    Iff,
    /// Negated conjunction `-&`
    Nand,
    /// Negated disjunction `-|`
    Nor,
}

impl BinaryOp {
    /// Every binary operator, in declaration order
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Implies,
        BinaryOp::Xor,
        BinaryOp::Iff,
        BinaryOp::Nand,
        BinaryOp::Nor,
    ];

    /// Textual symbol of the operator
    pub fn symbol(self) -> &'static str {
        Operator::from(self).symbol()
    }

    /// Apply the operator to two truth values
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
            BinaryOp::Implies => !left || right,
            BinaryOp::Xor => left != right,
            BinaryOp::Iff => left == right,
            BinaryOp::Nand => !(left && right),
            BinaryOp::Nor => !(left || right),
        }
    }
}

/// Any operator symbol that can appear in a formula, constants included
///
/// Used to describe the vocabulary of a formula (see [`Formula::operators`])
/// and the vocabulary of a [`Basis`](crate::Basis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// The constant `T`
    True,
    /// The constant `F`
    False,
    /// Negation `~`
    Not,
    /// Conjunction `&`
    And,
    /// Disjunction `|`
    Or,
    /// Implication `->`
    Implies,
    /// Exclusive or `+`
    Xor,
    /// Biconditional `<->`
    Iff,
    /// Negated conjunction `-&`
    Nand,
    /// Negated disjunction `-|`
    Nor,
}

impl Operator {
    /// Textual symbol of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::True => "T",
            Operator::False => "F",
            Operator::Not => "~",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Implies => "->",
            Operator::Xor => "+",
            Operator::Iff => "<->",
            Operator::Nand => "-&",
            Operator::Nor => "-|",
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::And => Operator::And,
            BinaryOp::Or => Operator::Or,
            BinaryOp::Implies => Operator::Implies,
            BinaryOp::Xor => Operator::Xor,
            BinaryOp::Iff => Operator::Iff,
            BinaryOp::Nand => Operator::Nand,
            BinaryOp::Nor => Operator::Nor,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable propositional formula
///
/// Children are reference counted, so cloning a formula is cheap and a
/// subformula may be referenced from several places of a larger formula.
/// Nothing can mutate a formula once built, which makes `Formula` safe to
/// share between threads.
///
/// # Examples
///
/// ```
/// use propositional_bases::{BinaryOp, Formula};
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
///
/// let f = p.implies(&q);
/// assert_eq!(f, Formula::binary(BinaryOp::Implies, p, q));
/// assert_eq!(f.to_string(), "p -> q");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    /// A named variable
    Variable(Arc<str>),
    /// The constant `T` (true) or `F` (false)
    Constant(bool),
    /// Negation of a formula
    Not(Arc<Formula>),
    /// A binary operator applied to two formulas
    Binary(BinaryOp, Arc<Formula>, Arc<Formula>),
}

/// Borrowed view of a formula node, used by [`Formula::fold`]
///
/// `T` holds the results already computed for the children of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// A constant value
    Constant(bool),
    /// Negation with the result of the operand
    Not(T),
    /// Binary operator with the results of the left and right operands
    Binary(BinaryOp, T, T),
}

impl Formula {
    /// Create a variable with the given name
    ///
    /// The name should be an identifier of the formula syntax
    /// (`[a-z][A-Za-z0-9_]*`); it is not checked. Other names, such as `""`
    /// or `"T"`, build a formula whose display does not parse back to it. Use
    /// [`Formula::try_variable`] for names from untrusted input.
    pub fn variable(name: &str) -> Self {
        Formula::Variable(Arc::from(name))
    }

    /// Create a variable, rejecting names that are not identifiers
    ///
    /// ```
    /// use propositional_bases::Formula;
    ///
    /// assert!(Formula::try_variable("x_1").is_ok());
    /// assert!(Formula::try_variable("T").is_err());
    /// assert!(Formula::try_variable("").is_err());
    /// ```
    pub fn try_variable(name: &str) -> Result<Self, FormulaParseError> {
        if is_identifier(name) {
            Ok(Formula::variable(name))
        } else {
            Err(FormulaParseError::InvalidVariableName {
                name: Arc::from(name),
            })
        }
    }

    /// Create the constant `T` or `F`
    pub fn constant(value: bool) -> Self {
        Formula::Constant(value)
    }

    /// Create the negation of `operand`
    pub fn negation(operand: Formula) -> Self {
        Formula::Not(Arc::new(operand))
    }

    /// Create a binary node from an operator and its two operands
    pub fn binary(op: BinaryOp, left: Formula, right: Formula) -> Self {
        Formula::Binary(op, Arc::new(left), Arc::new(right))
    }

    /// Root symbol of the formula: the variable name, constant or operator
    pub fn root_symbol(&self) -> &str {
        match self {
            Formula::Variable(name) => name,
            Formula::Constant(true) => Operator::True.symbol(),
            Formula::Constant(false) => Operator::False.symbol(),
            Formula::Not(_) => Operator::Not.symbol(),
            Formula::Binary(op, _, _) => op.symbol(),
        }
    }

    /// Root operator, or `None` for variables
    pub fn root_operator(&self) -> Option<Operator> {
        match self {
            Formula::Variable(_) => None,
            Formula::Constant(true) => Some(Operator::True),
            Formula::Constant(false) => Some(Operator::False),
            Formula::Not(_) => Some(Operator::Not),
            Formula::Binary(op, _, _) => Some((*op).into()),
        }
    }

    /// The operand of a negation or the left operand of a binary node
    pub fn first(&self) -> Option<&Formula> {
        match self {
            Formula::Not(operand) | Formula::Binary(_, operand, _) => Some(operand),
            Formula::Variable(_) | Formula::Constant(_) => None,
        }
    }

    /// The right operand of a binary node
    pub fn second(&self) -> Option<&Formula> {
        match self {
            Formula::Binary(_, _, right) => Some(right),
            _ => None,
        }
    }

    /// Names of all variables occurring in the formula, sorted
    pub fn variables(&self) -> BTreeSet<Arc<str>> {
        let mut variables = BTreeSet::new();
        self.for_each_distinct_node(|node| {
            if let Formula::Variable(name) = node {
                if !variables.contains(name) {
                    variables.insert(Arc::clone(name));
                }
            }
        });
        variables
    }

    /// All operators and constants occurring in the formula
    pub fn operators(&self) -> BTreeSet<Operator> {
        let mut operators = BTreeSet::new();
        self.for_each_distinct_node(|node| {
            if let Some(op) = node.root_operator() {
                operators.insert(op);
            }
        });
        operators
    }

    /// Number of distinct nodes, counting a shared subformula once
    ///
    /// Rewrite passes reuse operands instead of copying them, so this can be
    /// much smaller than [`size`](Formula::size), which counts the formula as
    /// a tree.
    ///
    /// ```
    /// use propositional_bases::Formula;
    ///
    /// let p = Formula::variable("p");
    /// let a = p.and(&p.not());
    /// let f = a.or(&a);
    /// assert_eq!(f.size(), 9);
    /// assert_eq!(f.shared_size(), 6);
    /// ```
    pub fn shared_size(&self) -> usize {
        let mut count = 0;
        self.for_each_distinct_node(|_| count += 1);
        count
    }

    /// Visit every node once, identifying shared subformulas by address
    fn for_each_distinct_node<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Formula),
    {
        let mut seen: HashSet<*const Formula> = HashSet::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if !seen.insert(node as *const Formula) {
                continue;
            }
            visit(node);
            match node {
                Formula::Not(operand) => pending.push(operand),
                Formula::Binary(_, left, right) => {
                    pending.push(left);
                    pending.push(right);
                }
                Formula::Variable(_) | Formula::Constant(_) => {}
            }
        }
    }

    /// The variable used to encode constants once they are eliminated
    ///
    /// This is the lexicographically smallest variable of the formula. A
    /// formula without variables gets a fixed default name; callers should
    /// not depend on which one.
    ///
    /// ```
    /// use propositional_bases::Formula;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let f = Formula::parse("r & (q | T)")?;
    /// assert_eq!(f.representative_variable(), Formula::variable("q"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn representative_variable(&self) -> Formula {
        match self.variables().into_iter().next() {
            Some(name) => Formula::Variable(name),
            None => Formula::variable(DEFAULT_REPRESENTATIVE),
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.fold(|node| match node {
            FormulaNode::Variable(_) | FormulaNode::Constant(_) => 1,
            FormulaNode::Not(operand) => operand + 1,
            FormulaNode::Binary(_, left, right) => left + right + 1,
        })
    }

    /// Length of the longest root-to-leaf path, counted in edges
    pub fn depth(&self) -> usize {
        self.fold(|node| match node {
            FormulaNode::Variable(_) | FormulaNode::Constant(_) => 0,
            FormulaNode::Not(operand) => operand + 1,
            FormulaNode::Binary(_, left, right) => usize::max(left, right) + 1,
        })
    }

    /// Fold the formula depth-first from leaves to root
    ///
    /// The function `f` is called once per node with the results already
    /// computed for its children.
    ///
    /// # Examples
    ///
    /// Count the negations of a formula:
    ///
    /// ```
    /// use propositional_bases::{Formula, FormulaNode};
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let f = Formula::parse("~p & ~~q")?;
    /// let negations = f.fold(|node| match node {
    ///     FormulaNode::Variable(_) | FormulaNode::Constant(_) => 0,
    ///     FormulaNode::Not(inner) => inner + 1,
    ///     FormulaNode::Binary(_, l, r) => l + r,
    /// });
    /// assert_eq!(negations, 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(FormulaNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(FormulaNode<T>) -> T,
    {
        match self {
            Formula::Variable(name) => f(FormulaNode::Variable(name)),
            Formula::Constant(value) => f(FormulaNode::Constant(*value)),
            Formula::Not(operand) => {
                let operand_result = operand.fold_impl(f);
                f(FormulaNode::Not(operand_result))
            }
            Formula::Binary(op, left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(FormulaNode::Binary(*op, left_result, right_result))
            }
        }
    }
}

/// Whether `name` matches `[a-z][A-Za-z0-9_]*`, the variable syntax of the parser
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
