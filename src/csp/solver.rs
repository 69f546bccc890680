#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! The solver-facing surface of the engine: the [`Solver`] trait, the
//! [`Solution`] produced by a successful search, and [`SearchStats`].

use crate::csp::domain::{Symbol, Variable};
use crate::csp::problem::Problem;

/// A complete assignment: every variable mapped to one symbol.
///
/// Produced only by a finished search, so it always satisfies the problem's
/// constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    values: Vec<Symbol>,
}

impl Solution {
    /// Builds a solution from symbol values listed in variable order
    /// (`values[0]` belongs to variable 1).
    #[must_use]
    pub fn new(values: Vec<Symbol>) -> Self {
        Self { values }
    }

    /// The symbol assigned to `variable`, or `None` if the variable id is
    /// out of range.
    #[must_use]
    pub fn value(&self, variable: Variable) -> Option<Symbol> {
        variable
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// Number of variables covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(variable, symbol)` pairs in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, Symbol)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &symbol)| (i + 1, symbol))
    }
}

/// Counters describing one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Value choices tried at branch points.
    pub decisions: u64,
    /// Symbols removed from domains by propagation.
    pub propagations: u64,
    /// Domain wipeouts that forced a backtrack.
    pub conflicts: u64,
}

/// A constraint-satisfaction solver.
///
/// Mirrors the lifecycle of the search: construct from a [`Problem`], call
/// [`Solver::solve`] (or [`Solver::solve_all`]), then inspect
/// [`Solver::stats`]. A `None` from `solve` means the problem is
/// unsatisfiable; it is an expected outcome, not an error.
pub trait Solver {
    /// Builds the solver's search state from a problem.
    fn new(problem: Problem) -> Self;

    /// Searches for one solution. Returns `None` if none exists.
    fn solve(&mut self) -> Option<Solution>;

    /// Enumerates solutions, stopping after `limit` have been found.
    fn solve_all(&mut self, limit: usize) -> Vec<Solution>;

    /// Counters accumulated so far.
    fn stats(&self) -> SearchStats;
}
