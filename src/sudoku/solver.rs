#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Puzzle assembly: composing the geometry with the constraint engine.
//!
//! A puzzle becomes a [`Problem`] with one variable per cell, one
//! [`Constraint::AllDifferent`] per row/column/box group, and one
//! [`Constraint::Equals`] per clue. Solving returns either a complete
//! [`Puzzle`] extending the clues, or [`Unsatisfiable`] — a normal outcome
//! for over-constrained inputs, not a fault.

use crate::csp::backtracking::Backtracking;
use crate::csp::constraint::Constraint;
use crate::csp::problem::Problem;
use crate::csp::solver::{SearchStats, Solution, Solver};
use crate::sudoku::geometry::{all_groups, BoxSize};
use crate::sudoku::puzzle::Puzzle;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// No assignment satisfies the puzzle's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("puzzle is unsatisfiable")]
pub struct Unsatisfiable;

/// Builds the constraint problem for `puzzle`.
///
/// The returned problem has `N²` variables over `N` symbols; clue validation
/// already happened when the [`Puzzle`] was constructed.
#[must_use]
pub fn as_problem(puzzle: &Puzzle) -> Problem {
    let box_size = puzzle.box_size();
    let mut problem = Problem::new(box_size.cells(), box_size.symbols());

    for group in all_groups(box_size) {
        problem.add_constraint(Constraint::all_different(group));
    }
    for (&cell, &value) in puzzle.clues() {
        problem.add_constraint(Constraint::equals(cell, value));
    }

    problem
}

/// Solves `puzzle`, returning one complete grid.
///
/// Deterministic: identical input always yields the same grid.
///
/// # Errors
///
/// [`Unsatisfiable`] when no assignment exists.
pub fn solve(puzzle: &Puzzle) -> Result<Puzzle, Unsatisfiable> {
    solve_with_stats(puzzle).map(|(solved, _)| solved)
}

/// Like [`solve`], also reporting the search counters.
///
/// # Errors
///
/// [`Unsatisfiable`] when no assignment exists.
pub fn solve_with_stats(puzzle: &Puzzle) -> Result<(Puzzle, SearchStats), Unsatisfiable> {
    let mut solver: Backtracking = Solver::new(as_problem(puzzle));
    let solution = solver.solve().ok_or(Unsatisfiable)?;
    Ok((
        solution_to_puzzle(&solution, puzzle.box_size()),
        solver.stats(),
    ))
}

/// Enumerates up to `limit` distinct complete grids for `puzzle`.
///
/// An empty result means the puzzle is unsatisfiable (or `limit` was 0).
#[must_use]
pub fn solve_all(puzzle: &Puzzle, limit: usize) -> Vec<Puzzle> {
    let mut solver: Backtracking = Solver::new(as_problem(puzzle));
    solver
        .solve_all(limit)
        .iter()
        .map(|solution| solution_to_puzzle(solution, puzzle.box_size()))
        .collect()
}

fn solution_to_puzzle(solution: &Solution, box_size: BoxSize) -> Puzzle {
    let clues: FxHashMap<_, _> = solution.iter().collect();
    Puzzle::from_clues(box_size, clues).expect("solver produced an in-range assignment")
}
