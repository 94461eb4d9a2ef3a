/*! Introduces an abstraction for formulae and various types of connectives as ingredients for
constructing formulae.*/
use super::Var;
use itertools::Itertools;

/// Is the trait of propositional formulae.
pub trait Formula {
    /// Returns a list of the variables in the receiver formula.
    ///
    /// **Note**: In the list of variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula. Variables
    /// are listed in the order of their first occurrence.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_nf::syntax::{Expr, Var};
    /// use razor_nf::syntax::Formula;
    ///
    /// let a = Var::from("a");
    /// let b = Var::from("b");
    ///
    /// // (a ∧ b) ∨ ¬a
    /// let formula = Expr::from(a.clone())
    ///     .and(b.clone().into())
    ///     .or(Expr::not(a.clone().into()));
    /// assert_eq!(vec![&a, &b], formula.variables());
    /// ```
    fn variables(&self) -> Vec<&Var>;
}

// Collects the variables of a list of formulae without repetition.
fn variables_of<F: Formula>(args: &[F]) -> Vec<&Var> {
    args.iter().flat_map(|f| f.variables()).unique().collect()
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not<F: Formula> {
    pub(crate) formula: F,
}

impl<F: Formula> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Not<F> {
    fn variables(&self) -> Vec<&Var> {
        self.formula.variables()
    }
}

/// Represents the conjunction of zero or more formulae.
///
/// **Note**: The conjunction of no formulae is logically true.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And<F: Formula> {
    pub(crate) args: Vec<F>,
}

impl<F: Formula> And<F> {
    /// Returns the conjunction of `args`.
    pub fn new(args: Vec<F>) -> Self {
        Self { args }
    }

    /// Returns the conjuncts of the receiver.
    #[inline(always)]
    pub fn args(&self) -> &[F] {
        &self.args
    }

    /// Consumes the receiver and returns its conjuncts.
    #[inline(always)]
    pub fn into_args(self) -> Vec<F> {
        self.args
    }
}

impl<F: Formula> Formula for And<F> {
    fn variables(&self) -> Vec<&Var> {
        variables_of(&self.args)
    }
}

/// Represents the disjunction of zero or more formulae.
///
/// **Note**: The disjunction of no formulae is logically false.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or<F: Formula> {
    pub(crate) args: Vec<F>,
}

impl<F: Formula> Or<F> {
    /// Returns the disjunction of `args`.
    pub fn new(args: Vec<F>) -> Self {
        Self { args }
    }

    /// Returns the disjuncts of the receiver.
    #[inline(always)]
    pub fn args(&self) -> &[F] {
        &self.args
    }

    /// Consumes the receiver and returns its disjuncts.
    #[inline(always)]
    pub fn into_args(self) -> Vec<F> {
        self.args
    }
}

impl<F: Formula> Formula for Or<F> {
    fn variables(&self) -> Vec<&Var> {
        variables_of(&self.args)
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implies<F: Formula> {
    pub(crate) premise: F,
    pub(crate) consequence: F,
}

impl<F: Formula> Implies<F> {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: F, consequence: F) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &F {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &F {
        &self.consequence
    }
}

impl<F: Formula> Formula for Implies<F> {
    fn variables(&self) -> Vec<&Var> {
        let mut vs = self.premise.variables();
        vs.extend(self.consequence.variables());
        vs.into_iter().unique().collect()
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iff<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Iff<F> {
    /// Returns a bi-implication between `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Iff<F> {
    fn variables(&self) -> Vec<&Var> {
        let mut vs = self.left.variables();
        vs.extend(self.right.variables());
        vs.into_iter().unique().collect()
    }
}

/// Represents a cardinality constraint over a list of formulae with a single bound.
///
/// Depending on the connective wrapping it, a [`Card`] requires that at least, at most or
/// exactly `bound` of its arguments are true.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card<F: Formula> {
    pub(crate) bound: usize,
    pub(crate) args: Vec<F>,
}

impl<F: Formula> Card<F> {
    /// Returns a cardinality constraint with a `bound` over `args`.
    pub fn new(bound: usize, args: Vec<F>) -> Self {
        Self { bound, args }
    }

    /// Returns the bound of the receiver.
    #[inline(always)]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Returns the arguments of the receiver.
    #[inline(always)]
    pub fn args(&self) -> &[F] {
        &self.args
    }
}

impl<F: Formula> Formula for Card<F> {
    fn variables(&self) -> Vec<&Var> {
        variables_of(&self.args)
    }
}

/// Represents a cardinality constraint requiring that the number of true arguments is
/// between `lower` and `upper` (inclusive).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Between<F: Formula> {
    pub(crate) lower: usize,
    pub(crate) upper: usize,
    pub(crate) args: Vec<F>,
}

impl<F: Formula> Between<F> {
    /// Returns a range constraint over `args`.
    pub fn new(lower: usize, upper: usize, args: Vec<F>) -> Self {
        Self { lower, upper, args }
    }

    /// Returns the lower bound of the receiver.
    #[inline(always)]
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// Returns the upper bound of the receiver.
    #[inline(always)]
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Returns the arguments of the receiver.
    #[inline(always)]
    pub fn args(&self) -> &[F] {
        &self.args
    }
}

impl<F: Formula> Formula for Between<F> {
    fn variables(&self) -> Vec<&Var> {
        variables_of(&self.args)
    }
}

/// Represents an existentially quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exists<F: Formula> {
    pub(crate) variables: Vec<Var>,
    pub(crate) formula: F,
}

impl<F: Formula> Exists<F> {
    /// Returns an existentially quantified formula with bound `variables` and `formula`.
    pub fn new(variables: Vec<Var>, formula: F) -> Self {
        Self { variables, formula }
    }

    /// Returns the bound variables of the receiver.
    #[inline(always)]
    pub fn bound_variables(&self) -> &[Var] {
        &self.variables
    }

    /// Returns the formula of the existentially quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Exists<F> {
    fn variables(&self) -> Vec<&Var> {
        self.formula
            .variables()
            .into_iter()
            .filter(|v| !self.variables.contains(v))
            .collect()
    }
}

/// Represents a universally quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forall<F: Formula> {
    pub(crate) variables: Vec<Var>,
    pub(crate) formula: F,
}

impl<F: Formula> Forall<F> {
    /// Returns a universally quantified formula with bound `variables` and `formula`.
    pub fn new(variables: Vec<Var>, formula: F) -> Self {
        Self { variables, formula }
    }

    /// Returns the bound variables of the receiver.
    #[inline(always)]
    pub fn bound_variables(&self) -> &[Var] {
        &self.variables
    }

    /// Returns the formula of the universally quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Forall<F> {
    fn variables(&self) -> Vec<&Var> {
        self.formula
            .variables()
            .into_iter()
            .filter(|v| !self.variables.contains(v))
            .collect()
    }
}
