/*! Orchestrates the transformation of formulae to clausal CNF and DNF.*/
use super::{
    classify::{classify, has_proper_clauses, Form},
    distribute::{Distributor, Interrupt},
    tseitin::Tseitin,
    Config, Error, Nnf, ToNnf,
};
use crate::{
    syntax::{ClauseSet, Expr, VariableAllocator},
    trace::{FALLBACK, FAST_PATH, MERGED, NF_TRANSFORM, SIMPLIFIED},
};
use tracing::{debug, span, Level};

/// Transforms `formula` to a strict clausal tree in `form`, which is either CNF or DNF.
///
/// Subformulae whose distribution exceeds the literal limit of `config` are encoded with
/// auxiliary variables from `allocator`. Without an allocator, exceeding the limit fails
/// with [`Error::DnfLimitExceeded`].
pub(super) fn transform(
    formula: &Expr,
    form: Form,
    config: &Config,
    allocator: Option<&mut dyn VariableAllocator>,
) -> Result<Expr, Error> {
    let span = span!(Level::TRACE, NF_TRANSFORM, form = ?form);
    let _enter = span.enter();

    let classification = classify(formula, form);
    if classification.normal_form && has_proper_clauses(formula, form) {
        debug!(event = FAST_PATH, reshaped = !classification.clausal);
        return Ok(if classification.clausal {
            formula.clone()
        } else {
            reshape(formula, form)
        });
    }

    config.check_cancelled()?;
    let nnf = formula.nnf()?;
    debug!(event = SIMPLIFIED, formula = %nnf);

    let children = match (&nnf, form) {
        (Nnf::And(this), Form::Cnf) => this.args().iter().collect(),
        (Nnf::Or(this), Form::Dnf) => this.args().iter().collect(),
        _ => vec![&nnf],
    };

    let mut distributor = match form {
        Form::Dnf => Distributor::dnf(config.literal_limit(), config.cancel_token()),
        _ => Distributor::cnf(config.literal_limit(), config.cancel_token()),
    };
    let mut tseitin = allocator.map(|a| Tseitin::new(a, config.tseitin_prefix()));

    let mut clauses = ClauseSet::new();
    let mut encoded = Vec::new();
    for (i, child) in children.into_iter().enumerate() {
        config.check_cancelled()?;
        match distributor.clauses(child) {
            Ok(result) => clauses.extend(result),
            Err(Interrupt::Cancelled) => return Err(Error::Cancelled),
            Err(Interrupt::LimitExceeded) => {
                let limit = config.literal_limit().unwrap_or_default();
                debug!(event = FALLBACK, child = i, limit = limit);
                match tseitin.as_mut() {
                    Some(tseitin) => encoded.extend(tseitin.assert(child)?),
                    None => return Err(Error::DnfLimitExceeded { limit }),
                }
            }
        }
    }
    clauses.extend(encoded);

    debug!(
        event = MERGED,
        clauses = clauses.len(),
        literals = clauses.literal_count(),
        auxiliary = tseitin.map_or(0, |t| t.substitutions().len())
    );
    Ok(match form {
        Form::Dnf => clauses.into_dnf(),
        _ => clauses.into_cnf(),
    })
}

// Wraps a formula that is in `form`, but lacks the full clausal structure, in the missing
// connectives. Existing nodes are kept as they are.
fn reshape(formula: &Expr, form: Form) -> Expr {
    let (outer, inner, args): (fn(Vec<Expr>) -> Expr, fn(Vec<Expr>) -> Expr, _) = match form {
        Form::Dnf => (Expr::any, Expr::all, or_args(formula)),
        _ => (Expr::all, Expr::any, and_args(formula)),
    };
    let clause = |formula: &Expr| match formula {
        Expr::Var(_) | Expr::Literal(_) => inner(vec![formula.clone()]),
        _ => formula.clone(),
    };

    match args {
        Some(args) => outer(args.iter().map(clause).collect()),
        None => outer(vec![clause(formula)]),
    }
}

fn and_args(formula: &Expr) -> Option<&[Expr]> {
    match formula {
        Expr::And(this) => Some(this.args()),
        _ => None,
    }
}

fn or_args(formula: &Expr) -> Option<&[Expr]> {
    match formula {
        Expr::Or(this) => Some(this.args()),
        _ => None,
    }
}
