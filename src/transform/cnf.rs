/*! Implements the transformation of formulae to Conjunctive Normal Form (CNF).*/
use super::{normal_form, Config, Error, Form};
use crate::syntax::{Expr, Formula, VariableAllocator, VariableMap};

/// Is the trait of [`Formula`] types that can be transformed to CNF.
pub trait ToCnf: Formula {
    /// Transforms `self` to a strict CNF: a conjunction of disjunctions of literals,
    /// without a literal limit.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_nf::syntax::{Expr, Var};
    /// use razor_nf::transform::ToCnf;
    ///
    /// let a: Expr = Var::from("a").into();
    /// let b: Expr = Var::from("b").into();
    /// let c: Expr = Var::from("c").into();
    /// let formula = a.iff(b.or(c));
    ///
    /// assert_eq!(
    ///     "(b ∨ c ∨ ¬a) ∧ (a ∨ ¬b) ∧ (a ∨ ¬c)",
    ///     formula.cnf().unwrap().to_string()
    /// );
    /// ```
    fn cnf(&self) -> Result<Expr, Error> {
        self.cnf_with(&Config::default())
    }

    /// Transforms `self` to a strict CNF, configured by `config`. Auxiliary variables are
    /// named so that they do not clash with the variables of `self`.
    fn cnf_with(&self, config: &Config) -> Result<Expr, Error>;
}

impl ToCnf for Expr {
    fn cnf_with(&self, config: &Config) -> Result<Expr, Error> {
        let mut variables = VariableMap::from_formula(self);
        to_cnf(self, config, &mut variables)
    }
}

/// Transforms `formula` to a strict CNF.
///
/// Every top-level conjunct of the simplified NNF of `formula` is expanded with the
/// distributive laws unless the expansion exceeds the literal limit of `config`, in which
/// case the conjunct is encoded with the Tseitin transformation, drawing auxiliary
/// variables from `allocator`. The result is then equisatisfiable with `formula` rather
/// than equivalent to it.
///
/// A `formula` already in CNF is returned unchanged (or with singleton clauses wrapped in
/// disjunctions) if none of its clauses repeats a literal or contains a complementary pair.
pub fn to_cnf(
    formula: &Expr,
    config: &Config,
    allocator: &mut dyn VariableAllocator,
) -> Result<Expr, Error> {
    normal_form::transform(formula, Form::Cnf, config, Some(allocator))
}
