/*! Defines the interface for allocating variables and a bidirectional map between variable
names and integer indices.*/
use super::{Formula, Var};
use std::collections::HashMap;

/// Is the trait of types that hand out fresh variables, for example, auxiliary variables
/// introduced by the Tseitin transformation.
pub trait VariableAllocator {
    /// Returns a variable whose name starts with `prefix` and that has never been returned
    /// or registered before in the receiver.
    fn allocate_fresh(&mut self, prefix: &str) -> Var;
}

/// Maps variable names to integer indices and back.
///
/// Indices start at 1 (like DIMACS variables) and are handed out in the order in which
/// variables are allocated. The map is append-only: variables are never removed and
/// indices are never reused.
///
/// **Example**:
/// ```rust
/// # use razor_nf::syntax::{Var, VariableAllocator, VariableMap};
/// let mut map = VariableMap::new();
/// assert_eq!(1, map.allocate(Var::from("a")));
/// assert_eq!(1, map.allocate(Var::from("a")));
///
/// let fresh = map.allocate_fresh("a");
/// assert_eq!("a0", fresh.name());
/// assert_eq!(Some(2), map.index_of(&fresh));
/// assert_eq!(2, map.count());
/// ```
#[derive(Clone, Default, Debug)]
pub struct VariableMap {
    names: Vec<Var>,
    indices: HashMap<Var, usize>,
    next_fresh: usize,
}

impl VariableMap {
    /// Returns an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a map containing the variables of `formula`, in the order of their first
    /// occurrence.
    pub fn from_formula<F: Formula>(formula: &F) -> Self {
        let mut map = Self::new();
        for var in formula.variables() {
            map.allocate(var.clone());
        }
        map
    }

    /// Returns the variable with the given index.
    pub fn name_of(&self, index: usize) -> Option<&Var> {
        index.checked_sub(1).and_then(|i| self.names.get(i))
    }

    /// Returns the index of the given variable.
    pub fn index_of(&self, var: &Var) -> Option<usize> {
        self.indices.get(var).copied()
    }

    /// Returns the number of variables in the receiver.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Registers `var` and returns its index. If `var` is already registered, its existing
    /// index is returned.
    pub fn allocate(&mut self, var: Var) -> usize {
        if let Some(index) = self.indices.get(&var) {
            return *index;
        }
        self.names.push(var.clone());
        let index = self.names.len();
        self.indices.insert(var, index);
        index
    }

    /// Returns the registered variables in the order of their indices.
    pub fn variables(&self) -> &[Var] {
        &self.names
    }
}

impl VariableAllocator for VariableMap {
    fn allocate_fresh(&mut self, prefix: &str) -> Var {
        loop {
            let var = Var::from(format!("{}{}", prefix, self.next_fresh));
            self.next_fresh += 1;
            if !self.indices.contains_key(&var) {
                self.allocate(var.clone());
                return var;
            }
        }
    }
}
