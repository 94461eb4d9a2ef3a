/*! Implements a simplification algorithm for formulae in Negation Normal Form.*/
use super::Nnf;
use crate::syntax::{And, Or};
use itertools::Itertools;

impl Nnf {
    /// Flattens the receiver and removes redundant constants and repeated arguments.
    ///
    /// The result satisfies the following:
    /// * no conjunction has a conjunction argument and no disjunction has a disjunction
    ///   argument,
    /// * conjunctions and disjunctions have at least two distinct arguments, kept in the
    ///   order of their first occurrence,
    /// * ⊤ and ⟘ appear only as the whole formula.
    pub fn simplify(self) -> Self {
        enum Step {
            Enter(Nnf),
            Exit { conjunctive: bool, arity: usize },
        }

        let mut steps = vec![Step::Enter(self)];
        let mut results: Vec<Nnf> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    let (conjunctive, args) = match node {
                        Self::And(this) => (true, this.into_args()),
                        Self::Or(this) => (false, this.into_args()),
                        _ => {
                            results.push(node);
                            continue;
                        }
                    };
                    steps.push(Step::Exit {
                        conjunctive,
                        arity: args.len(),
                    });
                    steps.extend(args.into_iter().rev().map(Step::Enter));
                }
                Step::Exit { conjunctive, arity } => {
                    let args = results.split_off(results.len() - arity);
                    results.push(if conjunctive {
                        conjunction(args)
                    } else {
                        disjunction(args)
                    });
                }
            }
        }

        results.pop().unwrap_or(Self::Top)
    }
}

// Assumes `args` are already simplified.
fn conjunction(args: Vec<Nnf>) -> Nnf {
    let mut flat = Vec::new();
    for arg in args {
        match arg {
            Nnf::Top => {}
            Nnf::Bottom => return Nnf::Bottom,
            Nnf::And(inner) => flat.extend(inner.into_args()),
            _ => flat.push(arg),
        }
    }
    let mut flat = flat.into_iter().unique().collect_vec();
    match flat.len() {
        0 => Nnf::Top,
        1 => flat.remove(0),
        _ => And::new(flat).into(),
    }
}

// Assumes `args` are already simplified.
fn disjunction(args: Vec<Nnf>) -> Nnf {
    let mut flat = Vec::new();
    for arg in args {
        match arg {
            Nnf::Bottom => {}
            Nnf::Top => return Nnf::Top,
            Nnf::Or(inner) => flat.extend(inner.into_args()),
            _ => flat.push(arg),
        }
    }
    let mut flat = flat.into_iter().unique().collect_vec();
    match flat.len() {
        0 => Nnf::Bottom,
        1 => flat.remove(0),
        _ => Or::new(flat).into(),
    }
}
