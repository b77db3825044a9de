//! # Propositional Bases
//!
//! This crate rewrites propositional formulas into equivalent formulas that
//! only use a restricted set of operators, such as `{~, &}` or `{-&}` alone.
//!
//! ## Overview
//!
//! A [`Formula`] is an immutable tree over variables, the constants `T` and
//! `F`, negation and the binary operators `&`, `|`, `->`, `+` (xor), `<->`,
//! `-&` (nand) and `-|` (nor). Each rewrite pass returns a formula with the
//! same truth table that only uses the operators of its [`Basis`]:
//!
//! - [`to_not_and_or`] - `{~, &, |}`
//! - [`to_not_and`] - `{~, &}`
//! - [`to_nand`] - `{-&}`
//! - [`to_implies_not`] - `{->, ~}`
//! - [`to_implies_false`] - `{->, F}`
//!
//! The output is not simplified; it is only restricted and equivalent.
//!
//! ## Building Formulas
//!
//! Parse them from strings:
//!
//! ```
//! use propositional_bases::{to_nand, Formula};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let f = Formula::parse("(p -> q) & ~r")?;
//! let g = to_nand(&f)?;
//! assert!(g.equivalent_to(&f));
//! # Ok(())
//! # }
//! ```
//!
//! Or build them with the `formula!` macro:
//!
//! ```
//! use propositional_bases::{formula, to_implies_not, Formula};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let p = Formula::variable("p");
//! let f = formula!(p + "q");
//! assert_eq!(to_implies_not(&f)?.to_string(), "(p -> q) -> ~(q -> p)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Choosing a Basis at Runtime
//!
//! ```
//! use propositional_bases::{Basis, Formula};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let basis: Basis = "implies-false".parse()?;
//! let f = Formula::parse("p <-> T")?;
//! let g = basis.rewrite(&f)?;
//! assert!(basis.admits(&g));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Formulas are immutable and `Send + Sync`, and every pass is a pure
//! function, so passes can run on shared formulas from several threads
//! without synchronisation.

pub mod bases;
pub mod formula;
pub mod reader;
pub mod semantics;

// Re-export the formula! procedural macro
pub use propositional_bases_macros::formula;

pub use bases::{
    implies_false_from_implies_not, nand_from_not_and, to_implies_false, to_implies_not,
    to_nand, to_not_and, to_not_and_or, Basis, ParseBasisError, RewriteError,
};
pub use formula::{BinaryOp, Formula, FormulaNode, FormulaParseError, Operator};
pub use reader::{read_formulas, read_formulas_file};
pub use semantics::{all_models, AllModels, Model, TruthTable};
