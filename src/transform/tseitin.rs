/*! Implements the Tseitin transformation of formulae in [`Nnf`] to equisatisfiable sets of
CNF clauses.

Every conjunction and disjunction below the top-most connective of a formula is replaced by
a fresh auxiliary variable `t`, defined by clauses stating that `t` is equivalent to the
connective applied to (the variables of) its arguments. The top-most connective is asserted
directly: a disjunction becomes a single clause over its arguments and a conjunction one
unit clause per argument.
*/
use super::{Error, Nnf};
use crate::syntax::{Clause, Expr, Literal, Var, VariableAllocator};
use std::collections::HashMap;
use tracing::trace;

/// Associates an auxiliary variable with the subformula it stands for and the clauses that
/// define it.
#[derive(Clone, Debug)]
pub struct Substitution {
    variable: Var,
    formula: Nnf,
    clauses: Vec<Clause>,
}

impl Substitution {
    /// Returns the auxiliary variable.
    pub fn variable(&self) -> &Var {
        &self.variable
    }

    /// Returns the subformula replaced by the auxiliary variable.
    pub fn formula(&self) -> &Nnf {
        &self.formula
    }

    /// Returns the clauses that define the auxiliary variable.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

/// Encodes formulae in [`Nnf`] as clauses using the Tseitin transformation.
///
/// Structurally equal subformulae share the same auxiliary variable across all calls on
/// the same encoder.
///
/// **Example**:
/// ```rust
/// # use razor_nf::syntax::{Expr, Var, VariableMap};
/// use razor_nf::transform::{ToNnf, Tseitin};
///
/// let a: Expr = Var::from("a").into();
/// let b: Expr = Var::from("b").into();
/// let c: Expr = Var::from("c").into();
/// let formula = a.and(b).or(c).nnf().unwrap();
///
/// let mut variables = VariableMap::from_formula(&formula);
/// let mut tseitin = Tseitin::new(&mut variables, "t");
/// let clauses = tseitin.assert(&formula).unwrap();
///
/// assert_eq!(
///     "[[a, ~t0], [b, ~t0], [t0, ~a, ~b], [c, t0]]",
///     format!("{:?}", clauses),
/// );
/// assert_eq!(1, tseitin.substitutions().len());
/// ```
pub struct Tseitin<'a> {
    allocator: &'a mut dyn VariableAllocator,
    prefix: String,
    substitutions: Vec<Substitution>,
    index: HashMap<Nnf, usize>,
}

impl<'a> Tseitin<'a> {
    /// Returns an encoder that names auxiliary variables with `prefix`, drawing them from
    /// `allocator`.
    pub fn new(allocator: &'a mut dyn VariableAllocator, prefix: &str) -> Self {
        Self {
            allocator,
            prefix: prefix.into(),
            substitutions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the substitutions made so far, in the order of introduction.
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Consumes the receiver and returns its substitutions.
    pub fn into_substitutions(self) -> Vec<Substitution> {
        self.substitutions
    }

    /// Returns clauses that are satisfiable if and only if `formula` is: the definitions of
    /// the auxiliary variables introduced for `formula`, followed by the clauses asserting
    /// it. Definitions of variables introduced by earlier calls are not repeated.
    ///
    /// `formula` is expected to be simplified: ⊤ and ⟘ may only appear as the whole formula.
    pub fn assert(&mut self, formula: &Nnf) -> Result<Vec<Clause>, Error> {
        let first = self.substitutions.len();
        let assertions: Vec<Clause> = match formula {
            Nnf::Top => Vec::new(),
            Nnf::Bottom => vec![Clause::default()],
            Nnf::Literal(this) => vec![this.clone().into()],
            Nnf::Or(this) => vec![self.encode_all(this.args())?.into_iter().collect()],
            Nnf::And(this) => self
                .encode_all(this.args())?
                .into_iter()
                .map(Clause::from)
                .collect(),
        };

        let mut clauses = self.substitutions[first..]
            .iter()
            .flat_map(|s| s.clauses.iter().cloned())
            .collect::<Vec<_>>();
        clauses.extend(assertions.into_iter().filter(|c| !c.is_tautology()));
        Ok(clauses)
    }

    fn encode_all(&mut self, args: &[Nnf]) -> Result<Vec<Literal>, Error> {
        args.iter().map(|arg| self.encode(arg)).collect()
    }

    // Returns a literal that stands for `formula`, introducing auxiliary variables for its
    // connectives in post-order.
    fn encode(&mut self, formula: &Nnf) -> Result<Literal, Error> {
        enum Step<'f> {
            Enter(&'f Nnf),
            Exit(&'f Nnf),
        }

        let mut steps = vec![Step::Enter(formula)];
        let mut operands: Vec<Literal> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => match node {
                    Nnf::Literal(this) => operands.push(this.clone()),
                    Nnf::And(_) | Nnf::Or(_) => {
                        if let Some(&i) = self.index.get(node) {
                            operands.push(self.substitutions[i].variable.clone().into());
                        } else {
                            steps.push(Step::Exit(node));
                            steps.extend(args_of(node).iter().rev().map(Step::Enter));
                        }
                    }
                    Nnf::Top | Nnf::Bottom => {
                        return Err(Error::unsupported(&Expr::from(node)));
                    }
                },
                Step::Exit(node) => {
                    let arity = args_of(node).len();
                    let args = operands.split_off(operands.len() - arity);
                    let variable = self.substitute(node, args);
                    operands.push(variable.into());
                }
            }
        }

        operands
            .pop()
            .ok_or_else(|| Error::unsupported(&Expr::from(formula)))
    }

    // Introduces an auxiliary variable for `formula`, a conjunction or a disjunction of
    // `args`.
    fn substitute(&mut self, formula: &Nnf, args: Vec<Literal>) -> Var {
        if let Some(&i) = self.index.get(formula) {
            return self.substitutions[i].variable.clone();
        }

        let variable = self.allocator.allocate_fresh(&self.prefix);
        let pos = Literal::Pos(variable.clone());
        let neg = Literal::Neg(variable.clone());
        let mut clauses: Vec<Clause> = Vec::with_capacity(args.len() + 1);
        if let Nnf::And(_) = formula {
            // t → aᵢ and (a₁ ∧ … ∧ aₖ) → t
            clauses.extend(
                args.iter()
                    .map(|a| vec![neg.clone(), a.clone()].into_iter().collect()),
            );
            clauses.push(
                std::iter::once(pos)
                    .chain(args.iter().map(Literal::complement))
                    .collect(),
            );
        } else {
            // aᵢ → t and t → (a₁ ∨ … ∨ aₖ)
            clauses.extend(
                args.iter()
                    .map(|a| vec![pos.clone(), a.complement()].into_iter().collect()),
            );
            clauses.push(std::iter::once(neg).chain(args).collect());
        }
        clauses.retain(|c| !c.is_tautology());

        trace!(
            event = crate::trace::SUBSTITUTE,
            variable = variable.name(),
            formula = %formula,
            clauses = clauses.len()
        );

        self.index.insert(formula.clone(), self.substitutions.len());
        self.substitutions.push(Substitution {
            variable: variable.clone(),
            formula: formula.clone(),
            clauses,
        });
        variable
    }
}

fn args_of(formula: &Nnf) -> &[Nnf] {
    match formula {
        Nnf::And(this) => this.args(),
        Nnf::Or(this) => this.args(),
        _ => &[],
    }
}
