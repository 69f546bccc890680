#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! The backtrack trail.
//!
//! Every symbol removed from a domain during search is recorded here. A
//! search frame takes a [`Mark`] before branching and calls
//! [`Trail::undo_to`] when the branch fails, which re-inserts the removed
//! symbols in reverse order and restores the exact prior domains.

use crate::csp::domain::{Domain, Symbol, Variable};

/// A position in the trail, taken before a decision.
pub type Mark = usize;

/// Chronological log of domain removals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    removals: Vec<(Variable, Symbol)>,
}

impl Trail {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            removals: Vec::new(),
        }
    }

    /// The current position; removals recorded after this point are undone
    /// by `undo_to(mark, ..)`.
    #[must_use]
    pub fn mark(&self) -> Mark {
        self.removals.len()
    }

    /// Records that `symbol` was removed from `variable`'s domain.
    pub fn record(&mut self, variable: Variable, symbol: Symbol) {
        self.removals.push((variable, symbol));
    }

    /// Rolls the domains back to the state they had at `mark`.
    pub fn undo_to(&mut self, mark: Mark, domains: &mut [Domain]) {
        for (variable, symbol) in self.removals.drain(mark..).rev() {
            domains[variable].insert(symbol);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.removals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }
}
