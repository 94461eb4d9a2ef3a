/*! Defines the syntax of propositional formulae with cardinality constraints.*/
use super::{clause::Literal, formula::*, Error, Var};
use itertools::Itertools;
use std::{convert::TryInto, fmt};

/// Is an abstract syntax tree (AST) for propositional formulae.
///
/// **Note**: Quantified formulae are part of the syntax so that first-order input can be
/// represented, but they are rejected by evaluation and normal-form transformations.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expr {
    /// Is logical top (⊤) or truth.
    Top,

    /// Is logical bottom (⟘) or falsehood.
    Bottom,

    /// Is an occurrence of a variable.
    Var(Var),

    /// Is a variable with a polarity, wrapping a [`Literal`].
    Literal(Literal),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<Expr>>),

    /// Is a conjunction of zero or more formulae, wrapping an [`And`].
    And(And<Expr>),

    /// Is a disjunction of zero or more formulae, wrapping an [`Or`].
    Or(Or<Expr>),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<Expr>>),

    /// Is a bi-implication between two formulae, wrapping an [`Iff`].
    Iff(Box<Iff<Expr>>),

    /// Requires at least `bound` of its arguments to be true.
    AtLeast(Card<Expr>),

    /// Requires at most `bound` of its arguments to be true.
    AtMost(Card<Expr>),

    /// Requires the number of true arguments to be within a range, wrapping a [`Between`].
    Between(Between<Expr>),

    /// Requires exactly `bound` of its arguments to be true.
    Choose(Card<Expr>),

    /// Is an existentially quantified formula, wrapping an [`Exists`].
    Exists(Box<Exists<Expr>>),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall<Expr>>),
}

/// Names the connectives that can be assembled generically with [`Expr::build`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
    AtLeast(usize),
    AtMost(usize),
    Between(usize, usize),
    Choose(usize),
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Not => write!(f, "not"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Implies => write!(f, "implies"),
            Self::Iff => write!(f, "iff"),
            Self::AtLeast(k) => write!(f, "atleast[{}]", k),
            Self::AtMost(k) => write!(f, "atmost[{}]", k),
            Self::Between(lo, hi) => write!(f, "between[{}, {}]", lo, hi),
            Self::Choose(k) => write!(f, "choose[{}]", k),
        }
    }
}

impl From<Var> for Expr {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Not<Expr>> for Expr {
    fn from(value: Not<Expr>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<Expr>> for Expr {
    fn from(value: And<Expr>) -> Self {
        Self::And(value)
    }
}

impl From<Or<Expr>> for Expr {
    fn from(value: Or<Expr>) -> Self {
        Self::Or(value)
    }
}

impl From<Implies<Expr>> for Expr {
    fn from(value: Implies<Expr>) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Iff<Expr>> for Expr {
    fn from(value: Iff<Expr>) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl From<Between<Expr>> for Expr {
    fn from(value: Between<Expr>) -> Self {
        Self::Between(value)
    }
}

impl From<Exists<Expr>> for Expr {
    fn from(value: Exists<Expr>) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl From<Forall<Expr>> for Expr {
    fn from(value: Forall<Expr>) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl Expr {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns the conjunction of `args`.
    #[inline(always)]
    pub fn all(args: Vec<Self>) -> Self {
        And { args }.into()
    }

    /// Returns the disjunction of `args`.
    #[inline(always)]
    pub fn any(args: Vec<Self>) -> Self {
        Or { args }.into()
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        Self::all(vec![self, other])
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Self::any(vec![self, other])
    }

    /// Returns an implication between `self` and `other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    /// Returns a bi-implication between `self` and `other`.
    #[inline(always)]
    pub fn iff(self, other: Self) -> Self {
        Iff {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a constraint requiring at least `bound` of `args` to be true.
    pub fn at_least(bound: usize, args: Vec<Self>) -> Self {
        Self::AtLeast(Card { bound, args })
    }

    /// Returns a constraint requiring at most `bound` of `args` to be true.
    pub fn at_most(bound: usize, args: Vec<Self>) -> Self {
        Self::AtMost(Card { bound, args })
    }

    /// Returns a constraint requiring between `lower` and `upper` of `args` to be true.
    pub fn between(lower: usize, upper: usize, args: Vec<Self>) -> Self {
        Between { lower, upper, args }.into()
    }

    /// Returns a constraint requiring exactly `bound` of `args` to be true.
    pub fn choose(bound: usize, args: Vec<Self>) -> Self {
        Self::Choose(Card { bound, args })
    }

    /// Returns an existentially quantified formula with the given `variables` and `formula`.
    #[inline(always)]
    pub fn exists(variables: Vec<Var>, formula: Self) -> Self {
        Exists { variables, formula }.into()
    }

    /// Returns a universally quantified formula with the given `variables` and `formula`.
    #[inline(always)]
    pub fn forall(variables: Vec<Var>, formula: Self) -> Self {
        Forall { variables, formula }.into()
    }

    /// Assembles a formula from a `connective` and a list of arguments, checking that the
    /// number of arguments matches the arity of the connective.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_nf::syntax::{Connective, Expr, Var};
    /// let a: Expr = Var::from("a").into();
    /// let b: Expr = Var::from("b").into();
    ///
    /// let formula = Expr::build(Connective::Implies, vec![a.clone(), b]).unwrap();
    /// assert_eq!("a → b", formula.to_string());
    ///
    /// assert!(Expr::build(Connective::Not, vec![]).is_err());
    /// ```
    pub fn build(connective: Connective, args: Vec<Self>) -> Result<Self, Error> {
        let arity = |args: Vec<Self>| Error::BadArity {
            connective,
            expected: if connective == Connective::Not { 1 } else { 2 },
            found: args.len(),
        };

        match connective {
            Connective::Not => {
                let [formula]: [Self; 1] = args.try_into().map_err(arity)?;
                Ok(Self::not(formula))
            }
            Connective::Implies => {
                let [premise, consequence]: [Self; 2] = args.try_into().map_err(arity)?;
                Ok(premise.implies(consequence))
            }
            Connective::Iff => {
                let [left, right]: [Self; 2] = args.try_into().map_err(arity)?;
                Ok(left.iff(right))
            }
            Connective::And => Ok(Self::all(args)),
            Connective::Or => Ok(Self::any(args)),
            Connective::AtLeast(k) => Ok(Self::at_least(k, args)),
            Connective::AtMost(k) => Ok(Self::at_most(k, args)),
            Connective::Choose(k) => Ok(Self::choose(k, args)),
            Connective::Between(lower, upper) => {
                if lower > upper {
                    Err(Error::BadBounds { lower, upper })
                } else {
                    Ok(Self::between(lower, upper, args))
                }
            }
        }
    }

    /// Checks the well-formedness of the receiver: every range constraint has a lower bound
    /// not greater than its upper bound and every quantifier binds at least one variable.
    pub fn validate(&self) -> Result<(), Error> {
        let mut stack = vec![self];
        while let Some(formula) = stack.pop() {
            match formula {
                Self::Between(this) if this.lower > this.upper => {
                    return Err(Error::BadBounds {
                        lower: this.lower,
                        upper: this.upper,
                    });
                }
                Self::Exists(this) if this.variables.is_empty() => {
                    return Err(Error::EmptyQuantifier {
                        formula: formula.clone(),
                    });
                }
                Self::Forall(this) if this.variables.is_empty() => {
                    return Err(Error::EmptyQuantifier {
                        formula: formula.clone(),
                    });
                }
                _ => stack.extend(formula.children().into_iter().rev()),
            }
        }
        Ok(())
    }

    /// Returns the receiver as a [`Literal`] if it is a variable or a literal.
    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Self::Var(this) => Some(Literal::Pos(this.clone())),
            Self::Literal(this) => Some(this.clone()),
            _ => None,
        }
    }

    /// Returns a short name for the kind of the receiver's top-most node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Top => "true",
            Self::Bottom => "false",
            Self::Var(_) => "variable",
            Self::Literal(_) => "literal",
            Self::Not(_) => "not",
            Self::And(_) => "and",
            Self::Or(_) => "or",
            Self::Implies(_) => "implies",
            Self::Iff(_) => "iff",
            Self::AtLeast(_) => "atleast",
            Self::AtMost(_) => "atmost",
            Self::Between(_) => "between",
            Self::Choose(_) => "choose",
            Self::Exists(_) => "exists",
            Self::Forall(_) => "forall",
        }
    }

    /// Returns the immediate subformulae of the receiver.
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Top | Self::Bottom | Self::Var(_) | Self::Literal(_) => Vec::new(),
            Self::Not(this) => vec![&this.formula],
            Self::And(And { args })
            | Self::Or(Or { args })
            | Self::AtLeast(Card { args, .. })
            | Self::AtMost(Card { args, .. })
            | Self::Choose(Card { args, .. })
            | Self::Between(Between { args, .. }) => args.iter().collect(),
            Self::Implies(this) => vec![&this.premise, &this.consequence],
            Self::Iff(this) => vec![&this.left, &this.right],
            Self::Exists(this) => vec![&this.formula],
            Self::Forall(this) => vec![&this.formula],
        }
    }

    /// Returns the number of nodes on the longest path from the receiver to a leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of nodes in the receiver.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Self::size).sum::<usize>()
    }

    /// Returns the truth value of the receiver when every variable `v` is interpreted as
    /// `assignment(v)`.
    ///
    /// **Example**:
    /// ```rust
    /// # use razor_nf::syntax::{Expr, Var};
    /// let a: Expr = Var::from("a").into();
    /// let b: Expr = Var::from("b").into();
    ///
    /// let formula = Expr::at_least(1, vec![a, b]);
    /// assert!(formula.evaluate(&|v: &Var| v.name() == "b").unwrap());
    /// assert!(!formula.evaluate(&|_: &Var| false).unwrap());
    /// ```
    pub fn evaluate(&self, assignment: &impl Fn(&Var) -> bool) -> Result<bool, Error> {
        let count = |args: &[Self]| -> Result<usize, Error> {
            let mut count = 0;
            for arg in args {
                if arg.evaluate(assignment)? {
                    count += 1;
                }
            }
            Ok(count)
        };

        let value = match self {
            Self::Top => true,
            Self::Bottom => false,
            Self::Var(this) => assignment(this),
            Self::Literal(this) => this.evaluate(assignment),
            Self::Not(this) => !this.formula.evaluate(assignment)?,
            Self::And(this) => {
                for arg in &this.args {
                    if !arg.evaluate(assignment)? {
                        return Ok(false);
                    }
                }
                true
            }
            Self::Or(this) => {
                for arg in &this.args {
                    if arg.evaluate(assignment)? {
                        return Ok(true);
                    }
                }
                false
            }
            Self::Implies(this) => {
                !this.premise.evaluate(assignment)? || this.consequence.evaluate(assignment)?
            }
            Self::Iff(this) => {
                this.left.evaluate(assignment)? == this.right.evaluate(assignment)?
            }
            Self::AtLeast(this) => count(&this.args)? >= this.bound,
            Self::AtMost(this) => count(&this.args)? <= this.bound,
            Self::Choose(this) => count(&this.args)? == this.bound,
            Self::Between(this) => {
                let count = count(&this.args)?;
                this.lower <= count && count <= this.upper
            }
            Self::Exists(_) | Self::Forall(_) => {
                return Err(Error::NotPropositional {
                    formula: self.clone(),
                })
            }
        };
        Ok(value)
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Top
            | Self::Bottom
            | Self::Var(_)
            | Self::Literal(_)
            | Self::AtLeast(_)
            | Self::AtMost(_)
            | Self::Between(_)
            | Self::Choose(_) => PRECEDENCE_ATOM,
            Self::Not(_) => PRECEDENCE_NOT,
            Self::And(this) => match this.args.as_slice() {
                [] => PRECEDENCE_ATOM,
                [single] => single.precedence(),
                _ => PRECEDENCE_AND,
            },
            Self::Or(this) => match this.args.as_slice() {
                [] => PRECEDENCE_ATOM,
                [single] => single.precedence(),
                _ => PRECEDENCE_OR,
            },
            Self::Implies(_) => PRECEDENCE_IMPLIES,
            Self::Iff(_) => PRECEDENCE_IFF,
            Self::Exists(_) | Self::Forall(_) => PRECEDENCE_QUANTIFIER,
        }
    }

    // Renders the receiver with the given set of symbols.
    fn render(&self, f: &mut fmt::Formatter, symbols: &Symbols) -> fmt::Result {
        // compound subformulae are parenthesized except under a negation of an atom
        let child = |f: &mut fmt::Formatter, child: &Self| -> fmt::Result {
            if child.precedence() >= PRECEDENCE_NOT {
                child.render(f, symbols)
            } else {
                write!(f, "(")?;
                child.render(f, symbols)?;
                write!(f, ")")
            }
        };
        let list = |f: &mut fmt::Formatter, args: &[Self], sep: &str| -> fmt::Result {
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", sep)?;
                }
                child(f, arg)?;
            }
            Ok(())
        };
        let card = |f: &mut fmt::Formatter, name: &str, args: &[Self]| -> fmt::Result {
            write!(f, "{}(", name)?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                arg.render(f, symbols)?;
            }
            write!(f, ")")
        };

        match self {
            Self::Top => write!(f, "{}", symbols.top),
            Self::Bottom => write!(f, "{}", symbols.bottom),
            Self::Var(this) => write!(f, "{}", this),
            Self::Literal(Literal::Pos(this)) => write!(f, "{}", this),
            Self::Literal(Literal::Neg(this)) => write!(f, "{}{}", symbols.not, this),
            Self::Not(this) => {
                write!(f, "{}", symbols.not)?;
                child(f, &this.formula)
            }
            Self::And(this) => match this.args.as_slice() {
                [] => write!(f, "{}", symbols.top),
                [single] => single.render(f, symbols),
                args => list(f, args, symbols.and),
            },
            Self::Or(this) => match this.args.as_slice() {
                [] => write!(f, "{}", symbols.bottom),
                [single] => single.render(f, symbols),
                args => list(f, args, symbols.or),
            },
            Self::Implies(this) => {
                child(f, &this.premise)?;
                write!(f, " {} ", symbols.implies)?;
                child(f, &this.consequence)
            }
            Self::Iff(this) => {
                child(f, &this.left)?;
                write!(f, " {} ", symbols.iff)?;
                child(f, &this.right)
            }
            Self::AtLeast(this) => card(f, &format!("atleast[{}]", this.bound), &this.args),
            Self::AtMost(this) => card(f, &format!("atmost[{}]", this.bound), &this.args),
            Self::Choose(this) => card(f, &format!("choose[{}]", this.bound), &this.args),
            Self::Between(this) => card(
                f,
                &format!("between[{}, {}]", this.lower, this.upper),
                &this.args,
            ),
            Self::Exists(this) => {
                write!(f, "{} {}. ", symbols.exists, this.variables.iter().join(", "))?;
                child(f, &this.formula)
            }
            Self::Forall(this) => {
                write!(f, "{} {}. ", symbols.forall, this.variables.iter().join(", "))?;
                child(f, &this.formula)
            }
        }
    }
}

const PRECEDENCE_ATOM: u8 = 10;
const PRECEDENCE_NOT: u8 = 8;
const PRECEDENCE_AND: u8 = 6;
const PRECEDENCE_OR: u8 = 5;
const PRECEDENCE_IMPLIES: u8 = 4;
const PRECEDENCE_IFF: u8 = 3;
const PRECEDENCE_QUANTIFIER: u8 = 1;

struct Symbols {
    top: &'static str,
    bottom: &'static str,
    not: &'static str,
    and: &'static str,
    or: &'static str,
    implies: &'static str,
    iff: &'static str,
    exists: &'static str,
    forall: &'static str,
}

const UNICODE: Symbols = Symbols {
    top: "⊤",
    bottom: "⟘",
    not: "¬",
    and: "∧",
    or: "∨",
    implies: "→",
    iff: "⇔",
    exists: "∃",
    forall: "∀",
};

const ASCII: Symbols = Symbols {
    top: "true",
    bottom: "false",
    not: "~",
    and: "&",
    or: "|",
    implies: "->",
    iff: "<=>",
    exists: "?",
    forall: "!",
};

impl Formula for Expr {
    fn variables(&self) -> Vec<&Var> {
        enum Step<'f> {
            Enter(&'f Expr),
            Unbind(usize),
        }

        let mut steps = vec![Step::Enter(self)];
        let mut bound: Vec<&Var> = Vec::new();
        let mut free: Vec<&Var> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => match node {
                    Self::Var(this) if !bound.contains(&this) => free.push(this),
                    Self::Literal(this) if !bound.contains(&this.var()) => free.push(this.var()),
                    Self::Exists(this) => {
                        bound.extend(this.bound_variables());
                        steps.push(Step::Unbind(this.bound_variables().len()));
                        steps.push(Step::Enter(this.formula()));
                    }
                    Self::Forall(this) => {
                        bound.extend(this.bound_variables());
                        steps.push(Step::Unbind(this.bound_variables().len()));
                        steps.push(Step::Enter(this.formula()));
                    }
                    _ => steps.extend(node.children().into_iter().rev().map(Step::Enter)),
                },
                Step::Unbind(count) => bound.truncate(bound.len() - count),
            }
        }

        free.into_iter().unique().collect()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.render(f, &UNICODE)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.render(f, &ASCII)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, test_prelude::*, var};

    #[test]
    fn top_bottom_to_string() {
        assert_eq!("⊤", Expr::Top.to_string());
        assert_eq!("⟘", Expr::Bottom.to_string());
        assert_debug_string!("true", Expr::Top);
        assert_debug_string!("false", Expr::Bottom);
    }

    #[test]
    fn connectives_to_string() {
        assert_eq!("¬a", Expr::not(a()).to_string());
        assert_eq!("a ∧ b", a().and(b()).to_string());
        assert_eq!("a ∨ ¬b", a().or(not_b()).to_string());
        assert_eq!("(a ∧ b) → c", a().and(b()).implies(c()).to_string());
        assert_eq!("a ⇔ (b ∨ c)", a().iff(b().or(c())).to_string());
        assert_eq!("¬(a ∧ b)", Expr::not(a().and(b())).to_string());
        assert_eq!("¬¬a", Expr::not(Expr::not(a())).to_string());
    }

    #[test]
    fn nested_connectives_debug() {
        assert_debug_string!("(a & b) & c", a().and(b()).and(c()));
        assert_debug_string!("a & b & c", Expr::all(vec![a(), b(), c()]));
        assert_debug_string!("(a | b) & (c | ~d)", a().or(b()).and(c().or(not_d())));
        assert_debug_string!("~a | (b -> c)", Expr::not(a()).or(b().implies(c())));
        assert_debug_string!("(a | b) & c", Expr::all(vec![a().or(b()), Expr::any(vec![c()])]));
    }

    #[test]
    fn cardinality_debug() {
        assert_debug_string!("atleast[2](a, b, c)", Expr::at_least(2, vec![a(), b(), c()]));
        assert_debug_string!("atmost[1](a, ~b)", Expr::at_most(1, vec![a(), not_b()]));
        assert_debug_string!("between[1, 2](a, b)", Expr::between(1, 2, vec![a(), b()]));
        assert_debug_string!(
            "~choose[1](a & b, c)",
            Expr::not(Expr::choose(1, vec![a().and(b()), c()]))
        );
    }

    #[test]
    fn quantifier_debug() {
        assert_debug_string!("? x, y. a", Expr::exists(vec![var!(x), var!(y)], a()));
        assert_debug_string!("! x. (a & b)", Expr::forall(vec![var!(x)], a().and(b())));
    }

    #[test]
    fn variables() {
        let formula = a().and(b()).or(Expr::not(a()).implies(c()));
        assert_eq!(vec![&_a(), &_b(), &_c()], formula.variables());
        assert_eq!(
            vec![&_b()],
            Expr::exists(vec![_a()], a().or(not_b())).variables()
        );
    }

    #[test]
    fn build_checks_arity() {
        assert!(Expr::build(Connective::Not, vec![a()]).is_ok());
        assert!(matches!(
            Expr::build(Connective::Not, vec![a(), b()]),
            Err(Error::BadArity {
                connective: Connective::Not,
                expected: 1,
                found: 2,
            })
        ));
        assert!(matches!(
            Expr::build(Connective::Iff, vec![a()]),
            Err(Error::BadArity { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            Expr::build(Connective::Between(3, 1), vec![a()]),
            Err(Error::BadBounds { lower: 3, upper: 1 })
        ));
        assert_debug_string!(
            "a <=> b",
            Expr::build(Connective::Iff, vec![a(), b()]).unwrap()
        );
        assert!(matches!(
            Expr::build(Connective::Implies, vec![]),
            Err(Error::BadArity {
                connective: Connective::Implies,
                expected: 2,
                found: 0,
            })
        ));
        assert_debug_string!(
            "a & b & c",
            Expr::build(Connective::And, vec![a(), b(), c()]).unwrap()
        );
        assert_debug_string!("false", Expr::build(Connective::Or, vec![]).unwrap());
    }

    #[test]
    fn validate() {
        assert!(a().and(Expr::between(0, 1, vec![b()])).validate().is_ok());
        assert!(matches!(
            a().and(Expr::between(2, 1, vec![b()])).validate(),
            Err(Error::BadBounds { .. })
        ));
        assert!(matches!(
            Expr::forall(vec![], a()).validate(),
            Err(Error::EmptyQuantifier { .. })
        ));
    }

    #[test]
    fn depth_and_size() {
        assert_eq!(1, a().depth());
        assert_eq!(3, a().or(b()).and(c()).depth());
        assert_eq!(5, a().or(b()).and(c()).size());
    }

    #[test]
    fn evaluate() {
        let only_a = |v: &Var| v == &_a();
        assert!(a().evaluate(&only_a).unwrap());
        assert!(!b().evaluate(&only_a).unwrap());
        assert!(not_b().evaluate(&only_a).unwrap());
        assert!(a().implies(b()).evaluate(&|_: &Var| false).unwrap());
        assert!(!a().implies(b()).evaluate(&only_a).unwrap());
        assert!(!a().iff(b()).evaluate(&only_a).unwrap());
        assert!(Expr::all(vec![]).evaluate(&only_a).unwrap());
        assert!(!Expr::any(vec![]).evaluate(&only_a).unwrap());
        assert!(Expr::choose(1, vec![a(), b(), c()]).evaluate(&only_a).unwrap());
        assert!(!Expr::at_least(2, vec![a(), b(), c()]).evaluate(&only_a).unwrap());
        assert!(Expr::at_most(0, vec![b(), c()]).evaluate(&only_a).unwrap());
        assert!(Expr::between(1, 2, vec![a(), b()]).evaluate(&only_a).unwrap());
        assert!(matches!(
            Expr::exists(vec![_a()], a()).evaluate(&only_a),
            Err(Error::NotPropositional { .. })
        ));
    }
}
