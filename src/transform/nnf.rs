/*! Defines formulae in Negation Normal Form (NNF) and implements an algorithm for
transforming an [`Expr`] to an [`Nnf`].

[`Expr`]: crate::syntax::Expr
*/
use super::{connective, Error};
use crate::syntax::{And, Expr, Formula, Literal, Or, Var};
use itertools::Itertools;

/// Represents a formula in Negation Normal Form (NNF).
///
/// **Hint**: An NNF is a formula where negation is applied only to variables and the only
/// other connectives are conjunction and disjunction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Nnf {
    /// Is the logical top (⊤) or truth.
    Top,

    /// Is the logical bottom (⟘) or falsehood.
    Bottom,

    /// Is a literal, wrapping a [`Literal`].
    Literal(Literal),

    /// Is a conjunction of formulae, wrapping an [`And`].
    And(And<Nnf>),

    /// Is a disjunction of formulae, wrapping an [`Or`].
    Or(Or<Nnf>),
}

impl From<Literal> for Nnf {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<And<Nnf>> for Nnf {
    fn from(value: And<Nnf>) -> Self {
        Self::And(value)
    }
}

impl From<Or<Nnf>> for Nnf {
    fn from(value: Or<Nnf>) -> Self {
        Self::Or(value)
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`Nnf`].
pub trait ToNnf: Formula {
    /// Transforms `self` to a Negation Normal Form (NNF). The result is flattened: no
    /// conjunction (resp. disjunction) has a conjunction (resp. disjunction) argument,
    /// constants appear only at the top and repeated arguments are removed.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_nf::syntax::{Expr, Var};
    /// use razor_nf::transform::ToNnf;
    ///
    /// let a: Expr = Var::from("a").into();
    /// let b: Expr = Var::from("b").into();
    /// let formula = Expr::not(a.iff(b));
    ///
    /// assert_eq!("(a ∧ ¬b) ∨ (b ∧ ¬a)", formula.nnf().unwrap().to_string());
    /// ```
    fn nnf(&self) -> Result<Nnf, Error>;
}

impl ToNnf for Expr {
    fn nnf(&self) -> Result<Nnf, Error> {
        self.validate()?;
        let formula = connective::rewrite(self)?;
        Ok(nnf(&formula)?.simplify())
    }
}

/// Returns the Negation Normal Form of `formula` as an [`Expr`].
pub fn to_nnf(formula: &Expr) -> Result<Expr, Error> {
    formula.nnf().map(Expr::from)
}

impl Formula for Nnf {
    fn variables(&self) -> Vec<&Var> {
        let mut stack = vec![self];
        let mut vars = Vec::new();
        while let Some(node) = stack.pop() {
            match node {
                Self::Top | Self::Bottom => {}
                Self::Literal(this) => vars.push(this.var()),
                Self::And(this) => stack.extend(this.args().iter().rev()),
                Self::Or(this) => stack.extend(this.args().iter().rev()),
            }
        }
        vars.into_iter().unique().collect()
    }
}

impl From<Nnf> for Expr {
    fn from(value: Nnf) -> Self {
        match value {
            Nnf::Top => Self::Top,
            Nnf::Bottom => Self::Bottom,
            Nnf::Literal(this) => this.into(),
            Nnf::And(this) => Self::all(this.into_args().into_iter().map(Self::from).collect()),
            Nnf::Or(this) => Self::any(this.into_args().into_iter().map(Self::from).collect()),
        }
    }
}

impl From<&Nnf> for Expr {
    fn from(value: &Nnf) -> Self {
        value.clone().into()
    }
}

impl std::fmt::Display for Nnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Expr::from(self), f)
    }
}

impl std::fmt::Debug for Nnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&Expr::from(self), f)
    }
}

// Pushes negation to the variables of `formula`, which is expected to contain negation,
// conjunction and disjunction only. Every node is visited together with the parity of the
// negations above it.
fn nnf(formula: &Expr) -> Result<Nnf, Error> {
    enum Step<'f> {
        Enter(&'f Expr, bool),
        Exit(&'f Expr, bool),
    }

    let mut steps = vec![Step::Enter(formula, false)];
    let mut results: Vec<Nnf> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node, negated) => match node {
                Expr::Top | Expr::Bottom => {
                    let truth = matches!(node, Expr::Top) != negated;
                    results.push(if truth { Nnf::Top } else { Nnf::Bottom });
                }
                Expr::Var(this) if negated => results.push(Literal::Neg(this.clone()).into()),
                Expr::Var(this) => results.push(Literal::Pos(this.clone()).into()),
                Expr::Literal(this) if negated => results.push(this.complement().into()),
                Expr::Literal(this) => results.push(this.clone().into()),
                Expr::Not(this) => steps.push(Step::Enter(this.formula(), !negated)),
                Expr::And(_) | Expr::Or(_) => {
                    steps.push(Step::Exit(node, negated));
                    steps.extend(
                        node.children()
                            .into_iter()
                            .rev()
                            .map(|arg| Step::Enter(arg, negated)),
                    );
                }
                _ => return Err(Error::unsupported(node)),
            },
            Step::Exit(node, negated) => {
                let arity = node.children().len();
                let args = results.split_off(results.len() - arity);
                // De Morgan: a negated conjunction is a disjunction and vice versa
                if matches!(node, Expr::And(_)) != negated {
                    results.push(And::new(args).into());
                } else {
                    results.push(Or::new(args).into());
                }
            }
        }
    }

    results.pop().ok_or_else(|| Error::unsupported(formula))
}
