use crate::syntax::{Clause, ClauseSet, Expr, Formula, Literal, Var};
use itertools::Itertools;
use quickcheck::{Arbitrary, Gen};
use std::collections::BTreeSet;

// Variables
pub fn _a() -> Var {
    Var::from("a")
}

pub fn _b() -> Var {
    Var::from("b")
}

pub fn _c() -> Var {
    Var::from("c")
}

pub fn _d() -> Var {
    Var::from("d")
}

// Formulae
pub fn a() -> Expr {
    _a().into()
}

pub fn b() -> Expr {
    _b().into()
}

pub fn c() -> Expr {
    _c().into()
}

pub fn d() -> Expr {
    _d().into()
}

pub fn not_a() -> Expr {
    Literal::Neg(_a()).into()
}

pub fn not_b() -> Expr {
    Literal::Neg(_b()).into()
}

pub fn not_c() -> Expr {
    Literal::Neg(_c()).into()
}

pub fn not_d() -> Expr {
    Literal::Neg(_d()).into()
}

// Truth tables
pub fn variables_of(formula: &Expr) -> Vec<Var> {
    formula.variables().into_iter().cloned().collect()
}

/// Returns every assignment to `vars`, each as the set of variables that are true.
pub fn assignments(vars: &[Var]) -> Vec<BTreeSet<Var>> {
    (0..1usize << vars.len())
        .map(|bits| {
            vars.iter()
                .enumerate()
                .filter(|(i, _)| (bits >> i) & 1 == 1)
                .map(|(_, v)| v.clone())
                .collect()
        })
        .collect()
}

pub fn evaluate(formula: &Expr, assignment: &BTreeSet<Var>) -> bool {
    formula.evaluate(&|v: &Var| assignment.contains(v)).unwrap()
}

/// Returns true if `left` and `right` agree under every assignment to their variables.
pub fn equivalent(left: &Expr, right: &Expr) -> bool {
    let vars = variables_of(left)
        .into_iter()
        .chain(variables_of(right))
        .unique()
        .collect::<Vec<_>>();
    assignments(&vars)
        .iter()
        .all(|t| evaluate(left, t) == evaluate(right, t))
}

/// Returns true if, for every assignment to the variables of `formula`, `formula` is true
/// exactly when `cnf` is satisfiable under that assignment. Variables of `cnf` that do not
/// occur in `formula` are treated as existentially quantified.
pub fn equisatisfiable(formula: &Expr, cnf: &Expr) -> bool {
    let clauses = ClauseSet::from_cnf(cnf).unwrap().into_clauses();
    let vars = variables_of(formula);
    assignments(&vars).iter().all(|t| {
        let mut restricted = clauses.clone();
        restricted.extend(vars.iter().map(|v| {
            let lit = if t.contains(v) {
                Literal::Pos(v.clone())
            } else {
                Literal::Neg(v.clone())
            };
            Clause::from(lit)
        }));
        evaluate(formula, t) == satisfiable(restricted)
    })
}

/// Decides the satisfiability of a set of CNF clauses with the DPLL procedure.
pub fn satisfiable(clauses: Vec<Clause>) -> bool {
    if clauses.is_empty() {
        return true;
    }
    if clauses.iter().any(|c| c.is_empty()) {
        return false;
    }

    let unit = clauses
        .iter()
        .find(|c| c.len() == 1)
        .and_then(|c| c.iter().next().cloned());
    let forced = unit.is_some();
    let literal = unit.unwrap_or_else(|| clauses[0].iter().next().unwrap().clone());

    let assign = |literal: &Literal| {
        let complement = literal.complement();
        clauses
            .iter()
            .filter(|c| !c.contains(literal))
            .map(|c| c.iter().filter(|l| **l != complement).cloned().collect())
            .collect::<Vec<Clause>>()
    };

    satisfiable(assign(&literal)) || (!forced && satisfiable(assign(&literal.complement())))
}

/// Wraps a small random formula over the variables `a` to `d`.
#[derive(Clone, Debug)]
pub struct SmallFormula(pub Expr);

impl Arbitrary for SmallFormula {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(formula(g, 3))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let children = self
            .0
            .children()
            .into_iter()
            .cloned()
            .map(Self)
            .collect::<Vec<_>>();
        Box::new(children.into_iter())
    }
}

fn leaf(g: &mut Gen) -> Expr {
    let var = g.choose(&[_a(), _b(), _c(), _d()]).unwrap().clone();
    match u8::arbitrary(g) % 8 {
        0 => Expr::Top,
        1 => Expr::Bottom,
        2 | 3 => Literal::Neg(var).into(),
        4 => Literal::Pos(var).into(),
        _ => var.into(),
    }
}

fn formula(g: &mut Gen, depth: usize) -> Expr {
    if depth == 0 || u8::arbitrary(g) % 4 == 0 {
        return leaf(g);
    }

    let args = |g: &mut Gen| {
        let count = 1 + usize::from(u8::arbitrary(g) % 3);
        (0..count).map(|_| formula(g, depth - 1)).collect::<Vec<_>>()
    };
    match u8::arbitrary(g) % 10 {
        0 | 1 => Expr::not(formula(g, depth - 1)),
        2 | 3 => Expr::all(args(g)),
        4 | 5 => Expr::any(args(g)),
        6 => formula(g, depth - 1).implies(formula(g, depth - 1)),
        7 => formula(g, depth - 1).iff(formula(g, depth - 1)),
        8 => {
            let args = args(g);
            let bound = usize::from(u8::arbitrary(g)) % (args.len() + 2);
            match u8::arbitrary(g) % 3 {
                0 => Expr::at_least(bound, args),
                1 => Expr::at_most(bound, args),
                _ => Expr::choose(bound, args),
            }
        }
        _ => {
            let args = args(g);
            let lower = usize::from(u8::arbitrary(g)) % (args.len() + 1);
            let upper = lower + usize::from(u8::arbitrary(g)) % 2;
            Expr::between(lower, upper, args)
        }
    }
}

#[test]
fn satisfiable_clauses() {
    use crate::clause;
    assert!(satisfiable(vec![]));
    assert!(!satisfiable(vec![clause![]]));
    assert!(satisfiable(vec![clause![a, b], clause![~a], clause![~b, c]]));
    assert!(!satisfiable(vec![
        clause![a, b],
        clause![~a, b],
        clause![a, ~b],
        clause![~a, ~b]
    ]));
}
