//! Truth-table semantics of formulas
//!
//! A [`Model`] assigns truth values to variable names. Formulas are evaluated
//! under models, and two formulas are equivalent when they agree under every
//! model over the union of their variables.
//!
//! ```
//! use propositional_bases::Formula;
//!
//! # fn main() -> std::io::Result<()> {
//! let f = Formula::parse("p -> q")?;
//! let g = Formula::parse("~p | q")?;
//! assert!(f.equivalent_to(&g));
//! assert!(Formula::parse("p | ~p")?.is_tautology());
//! # Ok(())
//! # }
//! ```

use crate::formula::Formula;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// An assignment of truth values to variable names
pub type Model = BTreeMap<Arc<str>, bool>;

/// Iterator over every model of a set of variables
///
/// Models are produced in binary counting order with the first variable as
/// the most significant bit, starting from the all-false model. An empty
/// variable set has exactly one (empty) model.
#[derive(Debug, Clone)]
pub struct AllModels {
    variables: Vec<Arc<str>>,
    next: Option<Vec<bool>>,
}

/// All models over the given variables
///
/// ```
/// use propositional_bases::all_models;
/// use std::sync::Arc;
///
/// let vars: Vec<Arc<str>> = vec![Arc::from("p"), Arc::from("q")];
/// let models: Vec<_> = all_models(vars).collect();
/// assert_eq!(models.len(), 4);
/// assert_eq!(models[1][&Arc::<str>::from("q")], true);
/// ```
pub fn all_models<I>(variables: I) -> AllModels
where
    I: IntoIterator<Item = Arc<str>>,
{
    let variables: Vec<Arc<str>> = variables.into_iter().collect();
    let next = Some(vec![false; variables.len()]);
    AllModels { variables, next }
}

impl Iterator for AllModels {
    type Item = Model;

    fn next(&mut self) -> Option<Model> {
        let values = self.next.take()?;
        let model = self
            .variables
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect();

        // Binary increment from the last variable; overflow ends the sequence
        let mut successor = values;
        let mut carry = true;
        for bit in successor.iter_mut().rev() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                carry = false;
                break;
            }
        }
        if !carry {
            self.next = Some(successor);
        }

        Some(model)
    }
}

impl Formula {
    /// Evaluate the formula under a model
    ///
    /// Variables missing from the model are read as false.
    pub fn evaluate(&self, model: &Model) -> bool {
        match self {
            Formula::Variable(name) => model.get(name).copied().unwrap_or(false),
            Formula::Constant(value) => *value,
            Formula::Not(operand) => !operand.evaluate(model),
            Formula::Binary(op, left, right) => {
                op.apply(left.evaluate(model), right.evaluate(model))
            }
        }
    }

    /// Truth values of the formula under each of the given models
    pub fn truth_values<'a, I>(&'a self, models: I) -> impl Iterator<Item = bool> + 'a
    where
        I: IntoIterator<Item = Model>,
        I::IntoIter: 'a,
    {
        models.into_iter().map(move |model| self.evaluate(&model))
    }

    /// Whether the formula is true under every model of its variables
    pub fn is_tautology(&self) -> bool {
        self.truth_values(all_models(self.variables())).all(|value| value)
    }

    /// Whether the formula is false under every model of its variables
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// Whether some model of its variables makes the formula true
    pub fn is_satisfiable(&self) -> bool {
        self.truth_values(all_models(self.variables())).any(|value| value)
    }

    /// Check whether two formulas have identical truth tables
    ///
    /// Both formulas are evaluated under every model over the union of their
    /// variables.
    pub fn equivalent_to(&self, other: &Formula) -> bool {
        let mut variables = self.variables();
        variables.extend(other.variables());
        all_models(variables).all(|model| self.evaluate(&model) == other.evaluate(&model))
    }

    /// Compute the truth table of the formula over its own variables
    pub fn truth_table(&self) -> TruthTable {
        let variables: Vec<Arc<str>> = self.variables().into_iter().collect();
        let rows = all_models(variables.iter().cloned())
            .map(|model| {
                let value = self.evaluate(&model);
                (model.into_values().collect(), value)
            })
            .collect();
        TruthTable {
            variables,
            formula: self.clone(),
            rows,
        }
    }
}

/// The truth table of a formula
///
/// Rows follow [`all_models`] order. The `Display` rendering is a Markdown-style
/// table with `T`/`F` cells:
///
/// ```
/// use propositional_bases::Formula;
///
/// # fn main() -> std::io::Result<()> {
/// let table = Formula::parse("~p")?.truth_table();
/// assert_eq!(table.to_string(), "| p | ~p |\n|---|----|\n| F | T  |\n| T | F  |\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    formula: Formula,
    rows: Vec<(Vec<bool>, bool)>,
}

impl TruthTable {
    /// Column variables, sorted
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The formula the table was computed for
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Rows as (variable values, formula value)
    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }

    /// Formula values, one per row
    pub fn values(&self) -> Vec<bool> {
        self.rows.iter().map(|(_, value)| *value).collect()
    }

    /// Variables of the table as a set
    pub fn variable_set(&self) -> BTreeSet<Arc<str>> {
        self.variables.iter().cloned().collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formula = self.formula.to_string();
        let mut headers: Vec<&str> = self.variables.iter().map(|v| v.as_ref()).collect();
        headers.push(&formula);

        write!(f, "|")?;
        for header in &headers {
            write!(f, " {} |", header)?;
        }
        writeln!(f)?;

        write!(f, "|")?;
        for header in &headers {
            write!(f, "{}|", "-".repeat(header.len() + 2))?;
        }
        writeln!(f)?;

        for (values, value) in &self.rows {
            write!(f, "|")?;
            for (cell, header) in values.iter().chain(std::iter::once(value)).zip(&headers) {
                let symbol = if *cell { "T" } else { "F" };
                write!(f, " {:<width$} |", symbol, width = header.len())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
