/*! Defines an abstract syntax tree (AST) for propositional formulae with cardinality
constraints, together with literals and clauses. */

mod clause;
mod expr;
mod formula;
mod macros;
mod symbol;
mod variables;

pub use clause::{Clause, ClauseSet, Literal};
pub use expr::{Connective, Expr};
pub use formula::{And, Between, Card, Exists, Forall, Formula, Iff, Implies, Not, Or};
pub use symbol::Var;
pub use variables::{VariableAllocator, VariableMap};

use thiserror::Error;

/// Is the type of errors arising from ill-formed syntax.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a connective is assembled with the wrong number of arguments.
    #[error("connective `{connective}` expects {expected} argument(s), found {found}")]
    BadArity {
        connective: Connective,
        expected: usize,
        found: usize,
    },

    /// Is returned when the lower bound of a range constraint exceeds its upper bound.
    #[error("range constraint with lower bound {lower} above upper bound {upper}")]
    BadBounds { lower: usize, upper: usize },

    /// Is returned when a quantifier binds no variables.
    #[error("quantifier binds no variables in `{}`", .formula.to_string())]
    EmptyQuantifier { formula: Expr },

    /// Is returned when a propositional operation is applied to a quantified formula.
    #[error("expecting a propositional formula, found `{}`", .formula.to_string())]
    NotPropositional { formula: Expr },
}
