#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Constraint kinds understood by the engine.
//!
//! Only two are needed: [`Constraint::AllDifferent`] over a group of
//! variables, and [`Constraint::Equals`] pinning one variable to a constant
//! (a clue). A closed enum keeps dispatch trivial; the engine compiles both
//! down to domain operations before search starts.

use crate::csp::domain::{Symbol, Variable};
use crate::csp::solver::Solution;
use itertools::Itertools;
use smallvec::SmallVec;

/// Inline storage for one constraint group. Sixteen covers grids up to
/// box size 4 without spilling to the heap.
pub type Group = SmallVec<[Variable; 16]>;

/// A constraint over the variables of a [`crate::csp::problem::Problem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Every variable in the group takes a distinct symbol.
    AllDifferent(Group),
    /// The variable is fixed to the given symbol.
    Equals(Variable, Symbol),
}

impl Constraint {
    /// An all-different constraint over `variables`.
    pub fn all_different<I: IntoIterator<Item = Variable>>(variables: I) -> Self {
        Self::AllDifferent(variables.into_iter().collect())
    }

    /// A fixed-value constraint for one variable.
    #[must_use]
    pub const fn equals(variable: Variable, symbol: Symbol) -> Self {
        Self::Equals(variable, symbol)
    }

    /// Checks the constraint against a complete assignment.
    #[must_use]
    pub fn is_satisfied(&self, solution: &Solution) -> bool {
        match self {
            Self::AllDifferent(group) => {
                group.iter().map(|&v| solution.value(v)).all_unique()
            }
            Self::Equals(variable, symbol) => solution.value(*variable) == Some(*symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_different_detects_duplicates() {
        let ok = Solution::new(vec![1, 2, 3]);
        let bad = Solution::new(vec![1, 2, 1]);
        let c = Constraint::all_different(1..=3);

        assert!(c.is_satisfied(&ok));
        assert!(!c.is_satisfied(&bad));
    }

    #[test]
    fn equals_checks_the_fixed_symbol() {
        let s = Solution::new(vec![4, 2]);
        assert!(Constraint::equals(1, 4).is_satisfied(&s));
        assert!(!Constraint::equals(2, 4).is_satisfied(&s));
    }
}
