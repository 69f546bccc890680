#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Forward-checking propagation over all-different groups.
//!
//! The propagator pre-computes, for every variable, the deduplicated list of
//! peers it shares an [`Constraint::AllDifferent`] group with. Whenever a
//! variable's domain collapses to a singleton, that symbol is removed from
//! every peer's domain; removals that produce new singletons are queued and
//! processed in turn, so one assignment can cascade through the whole
//! problem. An emptied domain is a conflict and stops propagation
//! immediately.

use crate::csp::constraint::Constraint;
use crate::csp::domain::{Domain, Variable};
use crate::csp::solver::SearchStats;
use crate::csp::trail::Trail;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Propagates singleton domains through all-different groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Propagator {
    /// Peers of each variable, indexed by variable id (slot 0 unused),
    /// sorted ascending.
    peers: Vec<Vec<Variable>>,
    queue: VecDeque<Variable>,
}

impl Propagator {
    /// Builds peer lists from the `AllDifferent` constraints among
    /// `constraints`. `Equals` constraints carry no peer information.
    #[must_use]
    pub fn new(num_variables: usize, constraints: &[Constraint]) -> Self {
        let mut peer_sets: Vec<FxHashSet<Variable>> =
            vec![FxHashSet::default(); num_variables + 1];

        for constraint in constraints {
            if let Constraint::AllDifferent(group) = constraint {
                for &a in group {
                    for &b in group {
                        if a != b {
                            peer_sets[a].insert(b);
                        }
                    }
                }
            }
        }

        let peers = peer_sets
            .into_iter()
            .map(|set| {
                let mut list: Vec<Variable> = set.into_iter().collect();
                list.sort_unstable();
                list
            })
            .collect();

        Self {
            peers,
            queue: VecDeque::new(),
        }
    }

    /// Variables sharing at least one all-different group with `variable`.
    #[must_use]
    pub fn peers(&self, variable: Variable) -> &[Variable] {
        &self.peers[variable]
    }

    /// Propagates from `seed`, whose domain must already be a singleton.
    ///
    /// Every removal is recorded on the trail so the caller can restore the
    /// prior domains on backtrack. Returns `false` if some domain was wiped
    /// out, in which case the current partial assignment is infeasible.
    pub fn propagate(
        &mut self,
        domains: &mut [Domain],
        trail: &mut Trail,
        seed: Variable,
        stats: &mut SearchStats,
    ) -> bool {
        self.queue.clear();
        self.queue.push_back(seed);

        while let Some(variable) = self.queue.pop_front() {
            let Some(symbol) = domains[variable].value() else {
                continue;
            };

            for &peer in &self.peers[variable] {
                if !domains[peer].remove(symbol) {
                    continue;
                }
                trail.record(peer, symbol);
                stats.propagations += 1;

                match domains[peer].len() {
                    0 => {
                        stats.conflicts += 1;
                        self.queue.clear();
                        return false;
                    }
                    1 => self.queue.push_back(peer),
                    _ => {}
                }
            }
        }

        true
    }
}
