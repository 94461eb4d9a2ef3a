/*! Rewrites implications, bi-implications and cardinality constraints in terms of negation,
conjunction and disjunction.*/
use super::Error;
use crate::syntax::Expr;
use itertools::Itertools;

/// Returns a formula equivalent to `formula` that contains no implications,
/// bi-implications or cardinality constraints. Subformulae are rewritten before their
/// parents, using an explicit stack so that deeply nested formulae are supported.
///
/// Quantified formulae are not supported.
pub(crate) fn rewrite(formula: &Expr) -> Result<Expr, Error> {
    enum Step<'f> {
        Enter(&'f Expr),
        Exit(&'f Expr),
    }

    let mut steps = vec![Step::Enter(formula)];
    let mut results: Vec<Expr> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) => match node {
                Expr::Top | Expr::Bottom | Expr::Var(_) | Expr::Literal(_) => {
                    results.push(node.clone())
                }
                Expr::Exists(_) | Expr::Forall(_) => return Err(Error::unsupported(node)),
                _ => {
                    steps.push(Step::Exit(node));
                    steps.extend(node.children().into_iter().rev().map(Step::Enter));
                }
            },
            Step::Exit(node) => match assemble(node, &mut results) {
                Some(result) => results.push(result),
                None => return Err(Error::unsupported(node)),
            },
        }
    }

    results.pop().ok_or_else(|| Error::unsupported(formula))
}

// Replaces the rewritten arguments of `node` on top of `results` with the rewriting of
// `node`. Returns `None` if `node` has no rewriting.
fn assemble(node: &Expr, results: &mut Vec<Expr>) -> Option<Expr> {
    let result = match node {
        Expr::Not(_) => Expr::not(results.pop()?),
        Expr::And(this) => Expr::all(pop_args(results, this.args().len())?),
        Expr::Or(this) => Expr::any(pop_args(results, this.args().len())?),
        Expr::Implies(_) => {
            let consequence = results.pop()?;
            let premise = results.pop()?;
            Expr::not(premise).or(consequence)
        }
        Expr::Iff(_) => {
            let right = results.pop()?;
            let left = results.pop()?;
            let not_left_or_right = Expr::not(left.clone()).or(right.clone());
            let not_right_or_left = Expr::not(right).or(left);
            not_left_or_right.and(not_right_or_left)
        }
        Expr::AtLeast(this) => at_least(this.bound(), pop_args(results, this.args().len())?),
        Expr::AtMost(this) => at_most(this.bound(), pop_args(results, this.args().len())?),
        Expr::Choose(this) => {
            let args = pop_args(results, this.args().len())?;
            at_least(this.bound(), args.clone()).and(at_most(this.bound(), args))
        }
        Expr::Between(this) => {
            let args = pop_args(results, this.args().len())?;
            at_least(this.lower(), args.clone()).and(at_most(this.upper(), args))
        }
        _ => return None,
    };
    Some(result)
}

fn pop_args(results: &mut Vec<Expr>, count: usize) -> Option<Vec<Expr>> {
    let start = results.len().checked_sub(count)?;
    Some(results.split_off(start))
}

// At least `bound` of `args` are true iff every subset of `n - bound + 1` arguments
// contains a true argument.
fn at_least(bound: usize, args: Vec<Expr>) -> Expr {
    let n = args.len();
    if bound == 0 {
        Expr::Top
    } else if bound > n {
        Expr::Bottom
    } else {
        Expr::all(
            args.into_iter()
                .combinations(n - bound + 1)
                .map(Expr::any)
                .collect(),
        )
    }
}

// At most `bound` of `args` are true iff every subset of `bound + 1` arguments contains
// a false argument.
fn at_most(bound: usize, args: Vec<Expr>) -> Expr {
    if bound >= args.len() {
        Expr::Top
    } else {
        Expr::all(
            args.into_iter()
                .combinations(bound + 1)
                .map(|subset| Expr::any(subset.into_iter().map(Expr::not).collect()))
                .collect(),
        )
    }
}
