/*! Defines literals, clauses and clause sets, the building blocks of formulae in clausal
normal forms.*/
use super::{And, Expr, Formula, Or, Var};
use itertools::Itertools;
use std::{
    collections::{BTreeSet, HashSet},
    fmt,
    iter::FromIterator,
    ops::Deref,
};

/// A literal is either a variable or its negation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal {
    /// Is a positive occurrence of a variable.
    Pos(Var),

    /// Is a negative occurrence of a variable.
    Neg(Var),
}

impl Literal {
    /// Returns the variable of the receiver.
    #[inline(always)]
    pub fn var(&self) -> &Var {
        match self {
            Self::Pos(this) | Self::Neg(this) => this,
        }
    }

    /// Returns true if the receiver is a positive literal.
    #[inline(always)]
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Pos(_))
    }

    /// Returns the literal with the same variable and the opposite polarity.
    pub fn complement(&self) -> Self {
        match self {
            Self::Pos(this) => Self::Neg(this.clone()),
            Self::Neg(this) => Self::Pos(this.clone()),
        }
    }

    /// Returns the truth value of the receiver under `assignment`.
    pub fn evaluate(&self, assignment: &impl Fn(&Var) -> bool) -> bool {
        match self {
            Self::Pos(this) => assignment(this),
            Self::Neg(this) => !assignment(this),
        }
    }
}

impl From<Var> for Literal {
    fn from(value: Var) -> Self {
        Self::Pos(value)
    }
}

impl Formula for Literal {
    fn variables(&self) -> Vec<&Var> {
        vec![self.var()]
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{}", this),
            Self::Neg(this) => write!(f, "¬{}", this),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pos(this) => write!(f, "{}", this),
            Self::Neg(this) => write!(f, "~{}", this),
        }
    }
}

/// Represents a set of [`Literal`]s.
///
/// **Note:**
/// The interpretation of a clause depends on its syntactic context.
/// A CNF clause is interpreted as disjunction of literals whereas a DNF clause corresponds
/// to a conjunction of literals.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// Returns the literals of the receiver clause.
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying set of [`Literal`]s.
    pub fn into_literals(self) -> BTreeSet<Literal> {
        self.0
    }

    /// Returns true if the receiver contains a literal together with its complement.
    pub fn is_tautology(&self) -> bool {
        self.0
            .iter()
            .filter(|l| l.is_positive())
            .any(|l| self.0.contains(&l.complement()))
    }

    /// Returns true if every literal of the receiver appears in `other`.
    pub fn subsumes(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Consumes the receiver and returns the disjunction of its literals.
    pub fn into_disjunction(self) -> Expr {
        Or::new(self.0.into_iter().map(Expr::Literal).collect()).into()
    }

    /// Consumes the receiver and returns the conjunction of its literals.
    pub fn into_conjunction(self) -> Expr {
        And::new(self.0.into_iter().map(Expr::Literal).collect()).into()
    }
}

impl Deref for Clause {
    type Target = BTreeSet<Literal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Literal> for Clause {
    fn from(value: Literal) -> Self {
        vec![value].into_iter().collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Formula for Clause {
    fn variables(&self) -> Vec<&Var> {
        self.0.iter().map(Literal::var).unique().collect()
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lits = self.0.iter().map(|l| format!("{:?}", l)).join(", ");
        write!(f, "[{}]", lits)
    }
}

/// Represents a list of distinct [`Clause`]s, kept in the order of insertion.
///
/// **Note:**
/// The interpretation of a clause set depends on its syntactic context. In CNF, a clause
/// set is a conjunction of clauses where each clause is a disjunction of literals. In DNF,
/// a clause set is a disjunction of clauses where each clause is a conjunction of literals.
#[derive(Clone, Default)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
    index: HashSet<Clause>,
}

impl ClauseSet {
    /// Returns an empty clause set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `clause` to the receiver unless it is already present. Returns true if the
    /// clause was added.
    pub fn insert(&mut self, clause: Clause) -> bool {
        if self.index.contains(&clause) {
            return false;
        }
        self.index.insert(clause.clone());
        self.clauses.push(clause);
        true
    }

    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Consumes the receiver and returns its underlying clauses.
    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }

    /// Returns the total number of literal occurrences in the receiver.
    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(|c| c.len()).sum()
    }

    /// Returns true if the receiver and `other` contain the same clauses, regardless of
    /// their order.
    pub fn same_clauses(&self, other: &Self) -> bool {
        self.index == other.index
    }

    /// Removes every clause that is a superset of another clause of the receiver.
    /// The remaining clauses are ordered by their number of literals.
    pub fn remove_subsumed(&mut self) {
        let mut sorted = std::mem::take(&mut self.clauses);
        sorted.sort_by_key(|c| c.len());

        let mut kept: Vec<Clause> = Vec::with_capacity(sorted.len());
        for clause in sorted {
            if !kept.iter().any(|k| k.subsumes(&clause)) {
                kept.push(clause);
            }
        }
        self.index = kept.iter().cloned().collect();
        self.clauses = kept;
    }

    /// Consumes the receiver and returns a strict CNF tree: a conjunction of disjunctions
    /// of literals.
    pub fn into_cnf(self) -> Expr {
        And::new(
            self.clauses
                .into_iter()
                .map(Clause::into_disjunction)
                .collect(),
        )
        .into()
    }

    /// Consumes the receiver and returns a strict DNF tree: a disjunction of conjunctions
    /// of literals.
    pub fn into_dnf(self) -> Expr {
        Or::new(
            self.clauses
                .into_iter()
                .map(Clause::into_conjunction)
                .collect(),
        )
        .into()
    }

    /// Reads the clauses of a formula in CNF. Bare literals and a top-level disjunction of
    /// literals are accepted as singleton clauses. Returns `None` if `formula` is not in CNF.
    pub fn from_cnf(formula: &Expr) -> Option<Self> {
        match formula {
            Expr::And(this) => this
                .args
                .iter()
                .map(|c| clause_of(c, false))
                .collect::<Option<Self>>(),
            _ => clause_of(formula, false).map(|c| std::iter::once(c).collect()),
        }
    }

    /// Reads the clauses of a formula in DNF. Bare literals and a top-level conjunction of
    /// literals are accepted as singleton clauses. Returns `None` if `formula` is not in DNF.
    pub fn from_dnf(formula: &Expr) -> Option<Self> {
        match formula {
            Expr::Or(this) => this
                .args
                .iter()
                .map(|c| clause_of(c, true))
                .collect::<Option<Self>>(),
            _ => clause_of(formula, true).map(|c| std::iter::once(c).collect()),
        }
    }
}

// Reads a clause from a literal or, depending on `conjunctive`, a conjunction or
// disjunction of literals.
fn clause_of(formula: &Expr, conjunctive: bool) -> Option<Clause> {
    let args = match (formula, conjunctive) {
        (Expr::And(this), true) => &this.args,
        (Expr::Or(this), false) => &this.args,
        _ => return formula.as_literal().map(Clause::from),
    };
    args.iter().map(Expr::as_literal).collect()
}

impl Deref for ClauseSet {
    type Target = [Clause];

    fn deref(&self) -> &Self::Target {
        &self.clauses
    }
}

impl PartialEq for ClauseSet {
    fn eq(&self, other: &Self) -> bool {
        self.clauses == other.clauses
    }
}

impl Eq for ClauseSet {}

impl From<Clause> for ClauseSet {
    fn from(value: Clause) -> Self {
        std::iter::once(value).collect()
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Extend<Clause> for ClauseSet {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        for clause in iter {
            self.insert(clause);
        }
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl Formula for ClauseSet {
    fn variables(&self) -> Vec<&Var> {
        self.clauses
            .iter()
            .flat_map(|c| c.iter().map(Literal::var))
            .unique()
            .collect()
    }
}

impl fmt::Debug for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let clauses = self.clauses.iter().map(|c| format!("{:?}", c)).join(", ");
        write!(f, "{{{}}}", clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, assert_eq_sorted_vecs, clause, test_prelude::*};

    #[test]
    fn literal_complement() {
        assert_eq!(Literal::Neg(_a()), Literal::Pos(_a()).complement());
        assert_eq!(Literal::Pos(_a()), Literal::Neg(_a()).complement());
        assert_debug_string!("~a", Literal::Neg(_a()));
        assert_eq!("¬a", Literal::Neg(_a()).to_string());
    }

    #[test]
    fn clause_is_set() {
        let clause = clause![a, a, ~b];
        assert_eq!(2, clause.len());
        assert_debug_string!("[a, ~b]", clause);
    }

    #[test]
    fn clause_tautology() {
        assert!(clause![a, ~a].is_tautology());
        assert!(clause![b, a, c, ~c].is_tautology());
        assert!(!clause![a, ~b].is_tautology());
        assert!(!Clause::default().is_tautology());
    }

    #[test]
    fn clause_subsumes() {
        assert!(clause![a].subsumes(&clause![a, b]));
        assert!(clause![a, b].subsumes(&clause![a, b]));
        assert!(!clause![a, ~b].subsumes(&clause![a, b]));
        assert!(Clause::default().subsumes(&clause![a]));
    }

    #[test]
    fn clause_set_insert() {
        let mut set = ClauseSet::new();
        assert!(set.insert(clause![a, b]));
        assert!(!set.insert(clause![b, a]));
        assert!(set.insert(clause![c]));
        assert_debug_string!("{[a, b], [c]}", set);
        assert_eq!(3, set.literal_count());
    }

    #[test]
    fn clause_set_remove_subsumed() {
        let mut set: ClauseSet = vec![clause![a, b, c], clause![a, b], clause![c], clause![~a]]
            .into_iter()
            .collect();
        set.remove_subsumed();
        assert_debug_string!("{[c], [~a], [a, b]}", set);
    }

    #[test]
    fn clause_set_to_cnf_and_back() {
        let set: ClauseSet = vec![clause![a, ~b], clause![c]].into_iter().collect();
        let cnf = set.clone().into_cnf();
        assert_debug_string!("(a | ~b) & c", cnf);
        let parsed = ClauseSet::from_cnf(&cnf).unwrap();
        assert!(set.same_clauses(&parsed));
        assert_eq_sorted_vecs!(set.clauses(), parsed.clauses());
    }

    #[test]
    fn clause_set_from_cnf() {
        assert_debug_string!("{[a]}", ClauseSet::from_cnf(&a()).unwrap());
        assert_debug_string!(
            "{[a, b]}",
            ClauseSet::from_cnf(&a().or(b())).unwrap()
        );
        assert_debug_string!(
            "{[a], [b, ~c]}",
            ClauseSet::from_cnf(&a().and(b().or(not_c()))).unwrap()
        );
        assert!(ClauseSet::from_cnf(&a().or(b().and(c()))).is_none());
        assert!(ClauseSet::from_cnf(&Expr::not(a())).is_none());
    }

    #[test]
    fn clause_set_from_dnf() {
        assert_debug_string!(
            "{[a, b], [c]}",
            ClauseSet::from_dnf(&a().and(b()).or(c())).unwrap()
        );
        assert!(ClauseSet::from_dnf(&a().and(b().or(c()))).is_none());
    }
}
