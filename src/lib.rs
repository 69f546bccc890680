//! A Sudoku solver for arbitrary box sizes.
//!
//! The crate is split into two layers. The [`csp`] module is a generic
//! constraint-satisfaction engine: variables with finite domains,
//! all-different and fixed-value constraints, and a backtracking search with
//! forward-checking propagation. The [`sudoku`] module maps a Sudoku grid of
//! box size `k` (grid dimension `N = k²`) onto that engine: it computes the
//! flat cell numbering and the row/column/box constraint groups, parses and
//! formats puzzle strings, and assembles the constraint problem from a clue
//! map.

/// The `csp` module implements the generic constraint-satisfaction engine.
pub mod csp;

/// The `sudoku` module implements the grid geometry and puzzle assembly.
pub mod sudoku;
