/*! Recognizes formulae that are already in a normal form.*/
use crate::syntax::{Clause, Expr};

/// Names the normal forms recognized by [`classify`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Form {
    /// Negation Normal Form: negation applies only to variables and the only other
    /// connectives are conjunction and disjunction.
    Nnf,

    /// Conjunctive Normal Form: a conjunction of disjunctions of literals.
    Cnf,

    /// Disjunctive Normal Form: a disjunction of conjunctions of literals.
    Dnf,
}

/// Is the result of [`classify`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Classification {
    /// Is true if the formula is in the normal form, allowing a single clause or a bare
    /// literal in place of the full two-level structure.
    pub normal_form: bool,

    /// Is true if the formula has exactly the two-level structure of the normal form: the
    /// outer connective at the root and every argument of it a clause connective over
    /// literals.
    pub clausal: bool,
}

impl Classification {
    const NONE: Self = Self {
        normal_form: false,
        clausal: false,
    };
}

/// Classifies `formula` with respect to `form`.
///
/// For CNF and DNF, the formula is inspected at most three levels deep: the outer connective,
/// the clause connective and the literals. Variables and literal nodes are both treated as
/// literals; ⊤ and ⟘ are accepted only in NNF.
///
/// **Example**:
/// ```rust
/// # use razor_nf::syntax::{Expr, Var};
/// use razor_nf::transform::{classify, Form};
///
/// let a: Expr = Var::from("a").into();
/// let b: Expr = Var::from("b").into();
///
/// let cnf = classify(&Expr::all(vec![a.clone().or(b.clone())]), Form::Cnf);
/// assert!(cnf.normal_form && cnf.clausal);
///
/// let cnf = classify(&a.clone().or(b.clone()), Form::Cnf);
/// assert!(cnf.normal_form && !cnf.clausal);
///
/// let cnf = classify(&a.implies(b), Form::Cnf);
/// assert!(!cnf.normal_form);
/// ```
pub fn classify(formula: &Expr, form: Form) -> Classification {
    match form {
        Form::Nnf => {
            let nnf = is_nnf(formula);
            Classification {
                normal_form: nnf,
                clausal: nnf,
            }
        }
        Form::Cnf => classify_clausal(formula, outer_args(Form::Cnf), inner_args(Form::Cnf)),
        Form::Dnf => classify_clausal(formula, outer_args(Form::Dnf), inner_args(Form::Dnf)),
    }
}

/// Returns true if `formula` is in the given normal form. If `strict` is set, the formula
/// must have the full clausal structure of the form.
pub fn is_normal_form(formula: &Expr, form: Form, strict: bool) -> bool {
    let classification = classify(formula, form);
    if strict {
        classification.clausal
    } else {
        classification.normal_form
    }
}

// Returns true if no clause of `formula`, which is in CNF or DNF, repeats a literal or
// contains a literal together with its complement.
pub(crate) fn has_proper_clauses(formula: &Expr, form: Form) -> bool {
    let outer = outer_args(form);
    let inner = inner_args(form);
    let proper = |clause: &Expr| match inner(clause) {
        Some(args) => {
            let literals = args.iter().filter_map(Expr::as_literal).collect::<Clause>();
            literals.len() == args.len() && !literals.is_tautology()
        }
        None => true,
    };
    match outer(formula) {
        Some(args) => args.iter().all(proper),
        None => proper(formula),
    }
}

type Args = fn(&Expr) -> Option<&[Expr]>;

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

fn outer_args(form: Form) -> Args {
    match form {
        Form::Dnf => or_args,
        _ => and_args,
    }
}

fn inner_args(form: Form) -> Args {
    match form {
        Form::Dnf => and_args,
        _ => or_args,
    }
}

fn is_literal(formula: &Expr) -> bool {
    matches!(formula, Expr::Var(_) | Expr::Literal(_))
}

fn is_clause(formula: &Expr, inner: Args) -> bool {
    inner(formula).map_or(false, |args| args.iter().all(is_literal))
}

fn classify_clausal(formula: &Expr, outer: Args, inner: Args) -> Classification {
    if is_literal(formula) {
        return Classification {
            normal_form: true,
            clausal: false,
        };
    }
    if is_clause(formula, inner) {
        // a single clause without the outer connective
        return Classification {
            normal_form: true,
            clausal: false,
        };
    }
    match outer(formula) {
        Some(args) => {
            let mut clausal = true;
            for arg in args {
                if is_literal(arg) {
                    clausal = false;
                } else if !is_clause(arg, inner) {
                    return Classification::NONE;
                }
            }
            Classification {
                normal_form: true,
                clausal,
            }
        }
        None => Classification::NONE,
    }
}

fn is_nnf(formula: &Expr) -> bool {
    let mut stack = vec![formula];
    while let Some(formula) = stack.pop() {
        match formula {
            Expr::Top | Expr::Bottom | Expr::Var(_) | Expr::Literal(_) => {}
            Expr::And(this) => stack.extend(this.args()),
            Expr::Or(this) => stack.extend(this.args()),
            _ => return false,
        }
    }
    true
}
