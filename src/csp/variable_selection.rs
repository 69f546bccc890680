#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Branching heuristics: which unassigned variable to try next.

use crate::csp::domain::{Domain, Variable};

/// Picks the next variable to branch on.
///
/// A variable counts as assigned once its domain is a singleton; `pick`
/// returns `None` when every variable is assigned, which is the search's
/// success condition.
pub trait VariableSelection {
    fn new(num_variables: usize) -> Self;

    /// The next unassigned variable, or `None` if there is none left.
    fn pick(&self, domains: &[Domain]) -> Option<Variable>;
}

/// Minimum-remaining-values: branch on the unassigned variable with the
/// smallest domain, ties broken by smallest variable id.
///
/// The tie-break makes repeated runs on identical input produce identical
/// solutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimumRemaining;

impl VariableSelection for MinimumRemaining {
    fn new(_num_variables: usize) -> Self {
        Self
    }

    fn pick(&self, domains: &[Domain]) -> Option<Variable> {
        let mut best: Option<(usize, Variable)> = None;

        for (variable, domain) in domains.iter().enumerate().skip(1) {
            if domain.is_singleton() {
                continue;
            }
            // Strict < keeps the smallest id among equal domain sizes,
            // since we scan ids in ascending order.
            if best.map_or(true, |(size, _)| domain.len() < size) {
                best = Some((domain.len(), variable));
            }
        }

        best.map(|(_, variable)| variable)
    }
}

/// First unassigned variable in id order. Kept as the trivial baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn new(_num_variables: usize) -> Self {
        Self
    }

    fn pick(&self, domains: &[Domain]) -> Option<Variable> {
        domains
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, domain)| !domain.is_singleton())
            .map(|(variable, _)| variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(sizes: &[usize]) -> Vec<Domain> {
        // Slot 0 plus one domain per entry, shrunk to the requested size.
        let mut out = vec![Domain::singleton(0, 9)];
        for &size in sizes {
            let mut d = Domain::full(9);
            for symbol in (size + 1)..=9 {
                d.remove(symbol);
            }
            out.push(d);
        }
        out
    }

    #[test]
    fn minimum_remaining_prefers_smallest_domain() {
        let ds = domains(&[4, 2, 3]);
        assert_eq!(MinimumRemaining.pick(&ds), Some(2));
    }

    #[test]
    fn ties_break_towards_the_smallest_id() {
        let ds = domains(&[3, 2, 2, 9]);
        assert_eq!(MinimumRemaining.pick(&ds), Some(2));
    }

    #[test]
    fn singletons_are_never_picked() {
        let ds = domains(&[1, 1, 5]);
        assert_eq!(MinimumRemaining.pick(&ds), Some(3));
        assert_eq!(FixedOrder.pick(&ds), Some(3));
    }

    #[test]
    fn fully_assigned_state_yields_none() {
        let ds = domains(&[1, 1, 1]);
        assert_eq!(MinimumRemaining.pick(&ds), None);
        assert_eq!(FixedOrder.pick(&ds), None);
    }
}
