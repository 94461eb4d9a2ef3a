/*! Implements the distributive laws over formulae in [`Nnf`], bounded by a limit on the
number of literals they produce.*/
use super::{CancelToken, Nnf};
use crate::syntax::{Clause, ClauseSet, Literal};
use std::collections::BTreeSet;

/// Is returned by [`Distributor::clauses`] when distribution stops before completion.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Interrupt {
    /// The literal limit was exceeded.
    LimitExceeded,

    /// The cancellation token was cancelled.
    Cancelled,
}

/// Computes the clauses of a formula in [`Nnf`] by applying the distributive laws.
///
/// In CNF mode, a conjunction joins the clause sets of its arguments while a disjunction
/// combines one clause of every argument in all possible ways (and dually in DNF mode).
/// Combinations containing a literal together with its complement are discarded and
/// clauses subsumed by other clauses are removed.
///
/// Every clause materialized by combining arguments adds its length to a running count of
/// literals. Distribution is interrupted as soon as the count exceeds the literal limit.
///
/// **Example**:
/// ```rust
/// # use razor_nf::syntax::{Expr, Var};
/// use razor_nf::transform::{Distributor, Interrupt, ToNnf};
///
/// let a: Expr = Var::from("a").into();
/// let b: Expr = Var::from("b").into();
/// let c: Expr = Var::from("c").into();
/// let formula = a.and(b).or(c).nnf().unwrap();
///
/// let clauses = Distributor::cnf(None, None).clauses(&formula).unwrap();
/// assert_eq!("{[a, c], [b, c]}", format!("{:?}", clauses));
///
/// let result = Distributor::cnf(Some(3), None).clauses(&formula);
/// assert_eq!(Err(Interrupt::LimitExceeded), result.map(|_| ()));
/// ```
pub struct Distributor<'t> {
    conjunctive: bool,
    limit: Option<usize>,
    cancel: Option<&'t CancelToken>,
    literals: usize,
}

impl<'t> Distributor<'t> {
    /// Returns a distributor that computes CNF clauses.
    pub fn cnf(limit: Option<usize>, cancel: Option<&'t CancelToken>) -> Self {
        Self {
            conjunctive: true,
            limit,
            cancel,
            literals: 0,
        }
    }

    /// Returns a distributor that computes DNF clauses.
    pub fn dnf(limit: Option<usize>, cancel: Option<&'t CancelToken>) -> Self {
        Self {
            conjunctive: false,
            ..Self::cnf(limit, cancel)
        }
    }

    /// Returns the clauses of `formula`. The literal count starts from zero on every call.
    pub fn clauses(&mut self, formula: &Nnf) -> Result<ClauseSet, Interrupt> {
        self.literals = 0;
        self.expand(formula)
    }

    /// Returns the number of literals counted against the limit by the last call to
    /// [`Distributor::clauses`].
    pub fn literals(&self) -> usize {
        self.literals
    }

    fn poll(&self) -> Result<(), Interrupt> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(Interrupt::Cancelled),
            _ => Ok(()),
        }
    }

    fn expand(&mut self, formula: &Nnf) -> Result<ClauseSet, Interrupt> {
        enum Step<'f> {
            Enter(&'f Nnf),
            Exit(&'f [Nnf], bool),
        }

        // ⊤ is the empty conjunction of clauses in CNF and the empty clause in DNF.
        let (truth, falsehood) = if self.conjunctive {
            (ClauseSet::new(), ClauseSet::from(Clause::default()))
        } else {
            (ClauseSet::from(Clause::default()), ClauseSet::new())
        };

        let mut steps = vec![Step::Enter(formula)];
        let mut results: Vec<ClauseSet> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    self.poll()?;
                    let (args, joined) = match node {
                        Nnf::Top => {
                            results.push(truth.clone());
                            continue;
                        }
                        Nnf::Bottom => {
                            results.push(falsehood.clone());
                            continue;
                        }
                        Nnf::Literal(this) => {
                            results.push(Clause::from(this.clone()).into());
                            continue;
                        }
                        Nnf::And(this) => (this.args(), self.conjunctive),
                        Nnf::Or(this) => (this.args(), !self.conjunctive),
                    };
                    steps.push(Step::Exit(args, joined));
                    steps.extend(args.iter().rev().map(Step::Enter));
                }
                Step::Exit(args, joined) => {
                    let operands = results.split_off(results.len() - args.len());
                    let clauses = if joined {
                        Self::join(operands)
                    } else {
                        self.combine(operands)?
                    };
                    results.push(clauses);
                }
            }
        }

        Ok(results.pop().unwrap_or(truth))
    }

    fn join(operands: Vec<ClauseSet>) -> ClauseSet {
        let mut result = ClauseSet::new();
        for clauses in operands {
            result.extend(clauses);
        }
        result.remove_subsumed();
        result
    }

    fn combine(&mut self, mut operands: Vec<ClauseSet>) -> Result<ClauseSet, Interrupt> {
        operands.sort_by_key(|clauses| clauses.len());

        let mut result = ClauseSet::new();
        self.product(&operands, &mut BTreeSet::new(), &mut result)?;
        result.remove_subsumed();
        Ok(result)
    }

    // Extends `chosen` with a clause of every operand in turn and emits the union.
    fn product(
        &mut self,
        operands: &[ClauseSet],
        chosen: &mut BTreeSet<Literal>,
        result: &mut ClauseSet,
    ) -> Result<(), Interrupt> {
        let (first, rest) = match operands.split_first() {
            Some(split) => split,
            None => return self.emit(chosen.iter().cloned().collect(), result),
        };
        self.poll()?;

        for clause in first.iter() {
            if clause.iter().any(|l| chosen.contains(&l.complement())) {
                continue;
            }
            let added = clause
                .iter()
                .filter(|l| !chosen.contains(*l))
                .cloned()
                .collect::<Vec<_>>();
            chosen.extend(added.iter().cloned());
            let outcome = self.product(rest, chosen, result);
            for literal in &added {
                chosen.remove(literal);
            }
            outcome?;
        }
        Ok(())
    }

    fn emit(&mut self, clause: Clause, result: &mut ClauseSet) -> Result<(), Interrupt> {
        let length = clause.len();
        if result.insert(clause) {
            self.literals += length;
            if let Some(limit) = self.limit {
                if self.literals > limit {
                    return Err(Interrupt::LimitExceeded);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, clause, lit,
        syntax::{And, Or},
    };

    fn and(args: Vec<Nnf>) -> Nnf {
        And::new(args).into()
    }

    fn or(args: Vec<Nnf>) -> Nnf {
        Or::new(args).into()
    }

    fn literal(literal: Literal) -> Nnf {
        literal.into()
    }

    fn cnf(formula: &Nnf) -> ClauseSet {
        Distributor::cnf(None, None).clauses(formula).unwrap()
    }

    fn dnf(formula: &Nnf) -> ClauseSet {
        Distributor::dnf(None, None).clauses(formula).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_debug_string!("{}", cnf(&Nnf::Top));
        assert_debug_string!("{[]}", cnf(&Nnf::Bottom));
        assert_debug_string!("{[]}", dnf(&Nnf::Top));
        assert_debug_string!("{}", dnf(&Nnf::Bottom));
    }

    #[test]
    fn test_cnf_clauses() {
        assert_debug_string!("{[a]}", cnf(&literal(lit!(a))));
        assert_debug_string!("{[a], [~b]}", cnf(&and(vec![literal(lit!(a)), literal(lit!(~b))])));
        assert_debug_string!("{[a, ~b]}", cnf(&or(vec![literal(lit!(~b)), literal(lit!(a))])));
        assert_debug_string!(
            "{[a, c], [a, d], [b, c], [b, d]}",
            cnf(&or(vec![
                and(vec![literal(lit!(a)), literal(lit!(b))]),
                and(vec![literal(lit!(c)), literal(lit!(d))]),
            ]))
        );
        assert_debug_string!(
            "{[a, c], [b, c]}",
            cnf(&or(vec![
                and(vec![literal(lit!(a)), literal(lit!(b))]),
                literal(lit!(c)),
            ]))
        );
    }

    #[test]
    fn test_dnf_clauses() {
        assert_debug_string!("{[a], [~b]}", dnf(&or(vec![literal(lit!(a)), literal(lit!(~b))])));
        assert_debug_string!(
            "{[a, c], [a, d], [b, c], [b, d]}",
            dnf(&and(vec![
                or(vec![literal(lit!(a)), literal(lit!(b))]),
                or(vec![literal(lit!(c)), literal(lit!(d))]),
            ]))
        );
    }

    #[test]
    fn test_complementary_combinations() {
        // (a ∧ b) ∨ ¬a ≡ b ∨ ¬a
        let formula = or(vec![and(vec![literal(lit!(a)), literal(lit!(b))]), literal(lit!(~a))]);
        assert_eq!(ClauseSet::from(clause![b, ~a]), cnf(&formula));

        // (a ∨ b) ∧ ¬a ≡ b ∧ ¬a
        let formula = and(vec![or(vec![literal(lit!(a)), literal(lit!(b))]), literal(lit!(~a))]);
        assert_eq!(ClauseSet::from(clause![b, ~a]), dnf(&formula));

        // a ∨ ¬a
        let formula = or(vec![literal(lit!(a)), literal(lit!(~a))]);
        assert_debug_string!("{}", cnf(&formula));
    }

    #[test]
    fn test_subsumption() {
        // (a ∨ b) ∧ a
        let formula = and(vec![or(vec![literal(lit!(a)), literal(lit!(b))]), literal(lit!(a))]);
        assert_debug_string!("{[a]}", cnf(&formula));

        // (a ∧ b) ∨ (a ∧ c) ∨ a
        let formula = or(vec![
            and(vec![literal(lit!(a)), literal(lit!(b))]),
            and(vec![literal(lit!(a)), literal(lit!(c))]),
            literal(lit!(a)),
        ]);
        assert_debug_string!("{[a]}", cnf(&formula));
    }

    #[test]
    fn test_literal_limit() {
        let formula = or(vec![
            and(vec![literal(lit!(a)), literal(lit!(b))]),
            and(vec![literal(lit!(c)), literal(lit!(d))]),
        ]);

        let mut distributor = Distributor::cnf(Some(8), None);
        assert_eq!(4, distributor.clauses(&formula).unwrap().len());
        assert_eq!(8, distributor.literals());

        let mut distributor = Distributor::cnf(Some(7), None);
        assert_eq!(
            Err(Interrupt::LimitExceeded),
            distributor.clauses(&formula).map(|_| ())
        );

        let mut distributor = Distributor::cnf(Some(0), None);
        let formula = and(vec![literal(lit!(a)), literal(lit!(b))]);
        assert_eq!(2, distributor.clauses(&formula).unwrap().len());
        assert_eq!(0, distributor.literals());
    }

    #[test]
    fn test_cancel() {
        let token = CancelToken::new();
        token.cancel();
        let mut distributor = Distributor::cnf(None, Some(&token));
        assert_eq!(
            Err(Interrupt::Cancelled),
            distributor.clauses(&literal(lit!(a))).map(|_| ())
        );
    }

    #[test]
    fn test_deep_formula() {
        let mut formula = literal(lit!(a));
        for i in 0..1000 {
            formula = if i % 2 == 0 {
                and(vec![formula, literal(lit!(b))])
            } else {
                or(vec![formula, literal(lit!(c))])
            };
        }
        let expected: ClauseSet = vec![clause![a, c], clause![b, c]].into_iter().collect();
        assert!(cnf(&formula).same_clauses(&expected));
    }
}
