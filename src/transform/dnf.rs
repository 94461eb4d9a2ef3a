/*! Implements the transformation of formulae to Disjunctive Normal Form (DNF).*/
use super::{normal_form, Config, Error, Form};
use crate::syntax::{Expr, Formula};

/// Is the trait of [`Formula`] types that can be transformed to DNF.
pub trait ToDnf: Formula {
    /// Transforms `self` to a strict DNF: a disjunction of conjunctions of literals,
    /// without a literal limit.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_nf::syntax::{Expr, Var};
    /// use razor_nf::transform::ToDnf;
    ///
    /// let a: Expr = Var::from("a").into();
    /// let b: Expr = Var::from("b").into();
    /// let c: Expr = Var::from("c").into();
    /// let formula = a.or(b).and(c);
    ///
    /// assert_eq!("(a ∧ c) ∨ (b ∧ c)", formula.dnf().unwrap().to_string());
    /// ```
    fn dnf(&self) -> Result<Expr, Error> {
        self.dnf_with(&Config::default())
    }

    /// Transforms `self` to a strict DNF, configured by `config`.
    fn dnf_with(&self, config: &Config) -> Result<Expr, Error>;
}

impl ToDnf for Expr {
    fn dnf_with(&self, config: &Config) -> Result<Expr, Error> {
        to_dnf(self, config)
    }
}

/// Transforms `formula` to a strict DNF, equivalent to `formula`.
///
/// Every top-level disjunct of the simplified NNF of `formula` is expanded with the
/// distributive laws. Since DNF has no equisatisfiable encoding with auxiliary variables,
/// exceeding the literal limit of `config` fails with [`Error::DnfLimitExceeded`].
///
/// A `formula` already in DNF is returned unchanged (or with singleton clauses wrapped in
/// conjunctions) if no clause repeats a literal or contains a complementary pair.
pub fn to_dnf(formula: &Expr, config: &Config) -> Result<Expr, Error> {
    normal_form::transform(formula, Form::Dnf, config, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, clause,
        syntax::{ClauseSet, Var},
        test_prelude::*,
        transform::classify,
    };
    use quickcheck_macros::quickcheck;

    fn dnf(formula: &Expr) -> Expr {
        formula.dnf().unwrap()
    }

    #[test]
    fn test_dnf() {
        assert_debug_string!("true", dnf(&Expr::Top));
        assert_debug_string!("false", dnf(&Expr::Bottom));
        assert_debug_string!("a", dnf(&a()));
        assert_debug_string!("~a", dnf(&Expr::not(a())));
        assert_debug_string!("a & b", dnf(&a().and(b())));
        assert_debug_string!("a | b", dnf(&a().or(b())));
        assert_debug_string!("~a | b", dnf(&a().implies(b())));
        assert_debug_string!("(~a & ~b) | (a & b)", dnf(&a().iff(b())));
        assert_debug_string!("(a & b) | (a & ~c)", dnf(&a().and(b().or(not_c()))));
    }

    #[test]
    fn test_dnf_distribution() {
        let formula = a().or(b()).and(c().or(d()));
        let result = dnf(&formula);
        assert_debug_string!("(a & c) | (a & d) | (b & c) | (b & d)", result);
        assert!(classify(&result, Form::Dnf).clausal);
        assert!(equivalent(&formula, &result));
    }

    #[test]
    fn test_dnf_contradictions_are_dropped() {
        // (a ∨ b) ∧ ¬a
        let result = dnf(&a().or(b()).and(Expr::not(a())));
        assert_eq!(
            ClauseSet::from(clause![b, ~a]),
            ClauseSet::from_dnf(&result).unwrap()
        );
        assert_debug_string!("false", dnf(&a().and(Expr::not(a()))));
    }

    #[test]
    fn test_dnf_already_clausal() {
        let formula = a().and(b()).or(c().and(not_d()));
        assert_eq!(formula, dnf(&formula));
    }

    #[test]
    fn test_dnf_literal_limit() {
        let formula = a().or(b()).and(c().or(d()));
        let config = Config::default().with_literal_limit(8);
        assert!(formula.dnf_with(&config).is_ok());

        let config = Config::default().with_literal_limit(7);
        assert!(matches!(
            formula.dnf_with(&config),
            Err(Error::DnfLimitExceeded { limit: 7 })
        ));
    }

    #[test]
    fn test_dnf_errors() {
        assert!(matches!(
            a().and(Expr::exists(vec![Var::from("x")], b())).dnf(),
            Err(Error::UnsupportedExpressionKind { kind: "exists", .. })
        ));
    }

    #[quickcheck]
    fn prop_dnf_is_equivalent(formula: SmallFormula) -> bool {
        equivalent(&formula.0, &dnf(&formula.0))
    }

    #[quickcheck]
    fn prop_dnf_is_clausal(formula: SmallFormula) -> bool {
        classify(&dnf(&formula.0), Form::Dnf).clausal
    }

    #[quickcheck]
    fn prop_dnf_is_idempotent(formula: SmallFormula) -> bool {
        let once = dnf(&formula.0);
        dnf(&once) == once
    }
}
