/*! Implements the transformations of propositional formulae to Negation Normal Form (NNF),
Conjunctive Normal Form (CNF) and Disjunctive Normal Form (DNF).

The transformations share a single pipeline: implications, bi-implications and cardinality
constraints are rewritten into basic connectives, negations are pushed to the variables, the
tree is flattened and finally, for CNF and DNF, the distributive laws are applied to every
top-level subformula within a literal limit. In CNF, subformulae whose expansion exceeds the
limit are encoded with the Tseitin transformation instead.
*/
mod classify;
mod cnf;
mod connective;
mod distribute;
mod dnf;
mod nnf;
mod normal_form;
mod simplify;
mod tseitin;

pub use classify::{classify, is_normal_form, Classification, Form};
pub use cnf::{to_cnf, ToCnf};
pub use distribute::{Distributor, Interrupt};
pub use dnf::{to_dnf, ToDnf};
pub use nnf::{to_nnf, Nnf, ToNnf};
pub use tseitin::{Substitution, Tseitin};

use crate::syntax::{self, Expr};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use thiserror::Error;

/// Is the type of errors arising from transforming formulae to normal forms.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a formula contains a node that cannot be transformed, such as a
    /// quantifier.
    #[error("cannot transform `{kind}` in `{}`", .formula.to_string())]
    UnsupportedExpressionKind { kind: &'static str, formula: Expr },

    /// Is returned when the input tree violates a well-formedness condition.
    #[error("malformed expression tree")]
    MalformedTree {
        #[from]
        source: syntax::Error,
    },

    /// Is returned when the transformation is cancelled through a [`CancelToken`].
    #[error("transformation cancelled")]
    Cancelled,

    /// Is returned when distributing a formula into DNF produces more literals than the
    /// configured limit. Unlike CNF, DNF has no equisatisfiable fallback encoding.
    #[error("DNF distribution exceeded the literal limit of {limit}")]
    DnfLimitExceeded { limit: usize },
}

impl Error {
    pub(crate) fn unsupported(formula: &Expr) -> Self {
        Self::UnsupportedExpressionKind {
            kind: formula.kind(),
            formula: formula.clone(),
        }
    }
}

/// A flag for cooperatively cancelling a running transformation, for example, from another
/// thread after a timeout.
///
/// **Example**:
/// ```rust
/// # use razor_nf::syntax::{Expr, Var};
/// use razor_nf::transform::{CancelToken, Config, Error, ToCnf};
///
/// let token = CancelToken::new();
/// let config = Config::default().with_cancel_token(token.clone());
///
/// token.cancel();
/// let formula: Expr = Var::from("a").into();
/// let formula = formula.clone().or(Expr::not(formula));
/// assert!(matches!(formula.cnf_with(&config), Err(Error::Cancelled)));
/// ```
#[derive(Clone, Default, Debug)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Returns a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels every transformation observing the receiver or one of its clones.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true if the receiver has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configures normal-form transformations.
#[derive(Clone, Debug)]
pub struct Config {
    literal_limit: Option<usize>,
    tseitin_prefix: String,
    cancel: Option<CancelToken>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            literal_limit: None,
            tseitin_prefix: DEFAULT_TSEITIN_PREFIX.into(),
            cancel: None,
        }
    }
}

/// Is the default prefix of the auxiliary variables introduced by the Tseitin
/// transformation.
pub const DEFAULT_TSEITIN_PREFIX: &str = "_t";

impl Config {
    /// Limits the number of literals that the distributive laws may produce for a single
    /// top-level subformula.
    pub fn with_literal_limit(self, limit: usize) -> Self {
        Self {
            literal_limit: Some(limit),
            ..self
        }
    }

    /// Sets the prefix of the names of auxiliary variables.
    pub fn with_tseitin_prefix<S: Into<String>>(self, prefix: S) -> Self {
        Self {
            tseitin_prefix: prefix.into(),
            ..self
        }
    }

    /// Makes the transformation observe `token`.
    pub fn with_cancel_token(self, token: CancelToken) -> Self {
        Self {
            cancel: Some(token),
            ..self
        }
    }

    /// Returns the literal limit; `None` stands for no limit.
    pub fn literal_limit(&self) -> Option<usize> {
        self.literal_limit
    }

    /// Returns the prefix of the names of auxiliary variables.
    pub fn tseitin_prefix(&self) -> &str {
        &self.tseitin_prefix
    }

    /// Returns the cancellation token of the receiver, if any.
    pub fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    pub(crate) fn check_cancelled(&self) -> Result<(), Error> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}
