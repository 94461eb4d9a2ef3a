/*! Provides a set of tools for transforming propositional formulae with cardinality
constraints into negation, conjunctive and disjunctive normal forms, including the clausal
variants consumed by SAT solvers. */
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
mod test_prelude;
pub mod trace;
pub mod transform;
