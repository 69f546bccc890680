#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Depth-first backtracking search with propagation.
//!
//! The solver owns one mutable copy of the domain state. Each branch narrows
//! a variable to a candidate value, propagates, and recurses; the trail
//! records every domain removal so a failed branch restores the exact prior
//! state before the next value is tried. Value order is ascending and the
//! default selector is minimum-remaining-values with a smallest-id
//! tie-break, so repeated runs on the same problem return the same solution.
//!
//! `Equals` constraints and the clues' initial propagation are applied at
//! construction; an over-constrained problem (say, two equal clues in one
//! group) is detected there and simply makes every later `solve` return
//! `None`.

use crate::csp::constraint::Constraint;
use crate::csp::domain::{Domain, Symbol, Variable};
use crate::csp::problem::Problem;
use crate::csp::propagation::Propagator;
use crate::csp::solver::{SearchStats, Solution, Solver};
use crate::csp::trail::Trail;
use crate::csp::variable_selection::{MinimumRemaining, VariableSelection};
use smallvec::SmallVec;

/// A backtracking solver, generic over the branching heuristic.
#[derive(Debug, Clone)]
pub struct Backtracking<S: VariableSelection = MinimumRemaining> {
    domains: Vec<Domain>,
    propagator: Propagator,
    selector: S,
    trail: Trail,
    stats: SearchStats,
    /// Set when construction already proved the problem unsatisfiable.
    infeasible: bool,
}

impl<S: VariableSelection> Solver for Backtracking<S> {
    /// Builds the search state: peer lists from the all-different groups,
    /// domains narrowed by every `Equals` constraint, then one round of
    /// initial propagation from all pre-assigned variables.
    fn new(problem: Problem) -> Self {
        let num_variables = problem.num_variables();
        let (mut domains, constraints) = problem.into_parts();
        let propagator = Propagator::new(num_variables, &constraints);
        let mut solver = Self {
            domains: Vec::new(),
            propagator,
            selector: S::new(num_variables),
            trail: Trail::new(),
            stats: SearchStats::default(),
            infeasible: false,
        };

        for constraint in &constraints {
            if let Constraint::Equals(variable, symbol) = *constraint {
                if !narrow(&mut domains[variable], symbol) {
                    solver.infeasible = true;
                }
            }
        }
        solver.domains = domains;

        if !solver.infeasible {
            solver.infeasible = !solver.propagate_assigned();
        }

        solver
    }

    fn solve(&mut self) -> Option<Solution> {
        if self.infeasible {
            return None;
        }
        let root = self.trail.mark();
        let found = self.search();
        let solution = found.then(|| self.solution());
        self.trail.undo_to(root, &mut self.domains);
        solution
    }

    fn solve_all(&mut self, limit: usize) -> Vec<Solution> {
        let mut solutions = Vec::new();
        if self.infeasible || limit == 0 {
            return solutions;
        }
        let root = self.trail.mark();
        self.search_all(limit, &mut solutions);
        self.trail.undo_to(root, &mut self.domains);
        solutions
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<S: VariableSelection> Backtracking<S> {
    /// Propagates every variable whose domain is already a singleton.
    /// Returns `false` on a conflict.
    fn propagate_assigned(&mut self) -> bool {
        for variable in 1..self.domains.len() {
            if self.domains[variable].is_singleton()
                && !self.propagator.propagate(
                    &mut self.domains,
                    &mut self.trail,
                    variable,
                    &mut self.stats,
                )
            {
                return false;
            }
        }
        true
    }

    /// Narrows `variable` to `symbol` (recording the removals) and
    /// propagates the new singleton. Returns `false` on a conflict.
    fn assign(&mut self, variable: Variable, symbol: Symbol) -> bool {
        let others: SmallVec<[Symbol; 16]> = self.domains[variable]
            .iter()
            .filter(|&s| s != symbol)
            .collect();
        for other in others {
            self.domains[variable].remove(other);
            self.trail.record(variable, other);
        }
        self.propagator
            .propagate(&mut self.domains, &mut self.trail, variable, &mut self.stats)
    }

    /// Returns `true` once a complete assignment is reached; the domains
    /// then hold the solution as singletons.
    fn search(&mut self) -> bool {
        let Some(variable) = self.selector.pick(&self.domains) else {
            return true;
        };

        let candidates: SmallVec<[Symbol; 16]> = self.domains[variable].iter().collect();
        for symbol in candidates {
            let mark = self.trail.mark();
            self.stats.decisions += 1;
            if self.assign(variable, symbol) && self.search() {
                return true;
            }
            self.trail.undo_to(mark, &mut self.domains);
        }

        false
    }

    /// Exhaustive variant of [`Self::search`]: records each complete
    /// assignment and keeps backtracking. Returns `true` once `limit`
    /// solutions have been collected.
    fn search_all(&mut self, limit: usize, solutions: &mut Vec<Solution>) -> bool {
        let Some(variable) = self.selector.pick(&self.domains) else {
            solutions.push(self.solution());
            return solutions.len() >= limit;
        };

        let candidates: SmallVec<[Symbol; 16]> = self.domains[variable].iter().collect();
        for symbol in candidates {
            let mark = self.trail.mark();
            self.stats.decisions += 1;
            let done = self.assign(variable, symbol) && self.search_all(limit, solutions);
            self.trail.undo_to(mark, &mut self.domains);
            if done {
                return true;
            }
        }

        false
    }

    /// Reads the complete assignment out of the singleton domains.
    fn solution(&self) -> Solution {
        Solution::new(
            self.domains
                .iter()
                .skip(1)
                .map(|domain| domain.value().unwrap_or_default())
                .collect(),
        )
    }
}

/// Restricts `domain` to exactly `{symbol}`. Returns `false` when the symbol
/// is not available, i.e. the constraint contradicts an earlier one.
fn narrow(domain: &mut Domain, symbol: Symbol) -> bool {
    if !domain.contains(symbol) {
        return false;
    }
    let others: SmallVec<[Symbol; 16]> = domain.iter().filter(|&s| s != symbol).collect();
    for other in others {
        domain.remove(other);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::variable_selection::FixedOrder;

    fn permutation_problem(n: usize) -> Problem {
        let mut problem = Problem::new(n, n);
        problem.add_constraint(Constraint::all_different(1..=n));
        problem
    }

    #[test]
    fn finds_the_lexicographically_first_permutation() {
        let mut solver: Backtracking = Solver::new(permutation_problem(4));
        let solution = solver.solve().expect("satisfiable");
        assert_eq!(
            (1..=4).map(|v| solution.value(v)).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3), Some(4)],
        );
    }

    #[test]
    fn enumerates_all_permutations() {
        let mut solver: Backtracking = Solver::new(permutation_problem(3));
        let solutions = solver.solve_all(100);
        assert_eq!(solutions.len(), 6);
        // Deterministic order: first solution is the identity.
        assert_eq!(solutions[0], Solution::new(vec![1, 2, 3]));
        // All distinct.
        for (i, a) in solutions.iter().enumerate() {
            for b in &solutions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn enumeration_respects_the_limit() {
        let mut solver: Backtracking = Solver::new(permutation_problem(3));
        assert_eq!(solver.solve_all(2).len(), 2);
        assert!(solver.solve_all(0).is_empty());
    }

    #[test]
    fn contradictory_clues_are_unsatisfiable() {
        let mut problem = permutation_problem(3);
        problem.add_constraint(Constraint::equals(1, 2));
        problem.add_constraint(Constraint::equals(2, 2));
        let mut solver: Backtracking = Solver::new(problem);
        assert_eq!(solver.solve(), None);
        assert!(solver.solve_all(10).is_empty());
    }

    #[test]
    fn equals_outside_the_domain_is_unsatisfiable() {
        let mut problem = permutation_problem(2);
        problem.add_constraint(Constraint::equals(1, 5));
        let mut solver: Backtracking = Solver::new(problem);
        assert_eq!(solver.solve(), None);
    }

    #[test]
    fn clues_are_honoured() {
        let mut problem = permutation_problem(3);
        problem.add_constraint(Constraint::equals(2, 1));
        let mut solver: Backtracking = Solver::new(problem);
        let solution = solver.solve().expect("satisfiable");
        assert_eq!(solution.value(2), Some(1));
        for c in [Constraint::all_different(1..=3), Constraint::equals(2, 1)] {
            assert!(c.is_satisfied(&solution));
        }
    }

    #[test]
    fn fixed_order_selector_agrees_on_satisfiability() {
        let mut mrv: Backtracking = Solver::new(permutation_problem(4));
        let mut fixed: Backtracking<FixedOrder> = Solver::new(permutation_problem(4));
        assert_eq!(mrv.solve().is_some(), fixed.solve().is_some());
        assert_eq!(mrv.solve_all(100).len(), fixed.solve_all(100).len());
    }

    #[test]
    fn repeated_solves_are_deterministic() {
        let mut a: Backtracking = Solver::new(permutation_problem(4));
        let mut b: Backtracking = Solver::new(permutation_problem(4));
        assert_eq!(a.solve(), b.solve());
        assert_eq!(a.solve(), b.solve());
    }
}
