#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Grid geometry: cell numbering and constraint groups.
//!
//! A puzzle of box size `k` has grid dimension `N = k²`; rows, columns,
//! boxes, and symbols all number `N`, and cells number `N²`. Cells carry a
//! flat 1-based label in row-major order: `cell = (row - 1) * N + column`.
//! Everything here is a pure function of [`BoxSize`]; the three group
//! families (rows, columns, boxes) each partition the cells into `N` groups
//! of `N`.
//!
//! The only delicate arithmetic is the box family. Box `b`'s representative
//! (its smallest cell label) is
//! `rep = N*k*((b - 1) div k) + k*((b - 1) mod k) + 1`
//! with floor division; the rest of the box is reached by striding `k`
//! columns across `k` row offsets of `N` cells each.

use smallvec::SmallVec;
use thiserror::Error;

/// A 1-based cell label in `[1, N²]`.
pub type Cell = usize;

/// One constraint group: the `N` cells of a row, column, or box.
pub type Group = SmallVec<[Cell; 16]>;

/// Errors from geometry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Box size below 1.
    #[error("box size must be at least 1, found {0}")]
    InvalidConfiguration(usize),
    /// Row or column index outside `[1, N]`.
    #[error("row {row}, column {column} outside 1..={limit}")]
    InvalidIndex {
        row: usize,
        column: usize,
        limit: usize,
    },
    /// Cell label outside `[1, N²]`.
    #[error("cell label {cell} outside 1..={limit}")]
    InvalidCell { cell: Cell, limit: usize },
}

/// The side length `k` of one sub-box. Guaranteed `>= 1` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxSize(usize);

impl BoxSize {
    /// # Errors
    ///
    /// `InvalidConfiguration` when `k < 1`.
    pub const fn new(k: usize) -> Result<Self, GeometryError> {
        if k < 1 {
            Err(GeometryError::InvalidConfiguration(k))
        } else {
            Ok(Self(k))
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Grid dimension `N = k²`; also the number of columns, boxes, and
    /// symbols.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.0 * self.0
    }

    #[must_use]
    pub const fn columns(self) -> usize {
        self.rows()
    }

    #[must_use]
    pub const fn boxes(self) -> usize {
        self.rows()
    }

    #[must_use]
    pub const fn symbols(self) -> usize {
        self.rows()
    }

    /// Total cell count `N²`.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.rows() * self.columns()
    }
}

impl TryFrom<usize> for BoxSize {
    type Error = GeometryError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// The label of the cell at (`row`, `column`), both 1-based.
///
/// # Errors
///
/// `InvalidIndex` when either coordinate falls outside `[1, N]`.
pub const fn cell_at(row: usize, column: usize, box_size: BoxSize) -> Result<Cell, GeometryError> {
    let n = box_size.rows();
    if row < 1 || row > n || column < 1 || column > n {
        return Err(GeometryError::InvalidIndex {
            row,
            column,
            limit: n,
        });
    }
    Ok((row - 1) * n + column)
}

/// The row containing `cell`.
///
/// # Errors
///
/// `InvalidCell` when the label falls outside `[1, N²]`.
pub fn row_of(cell: Cell, box_size: BoxSize) -> Result<usize, GeometryError> {
    check_cell(cell, box_size)?;
    Ok((cell - 1) / box_size.columns() + 1)
}

/// The column containing `cell`.
///
/// # Errors
///
/// `InvalidCell` when the label falls outside `[1, N²]`.
pub fn column_of(cell: Cell, box_size: BoxSize) -> Result<usize, GeometryError> {
    check_cell(cell, box_size)?;
    Ok((cell - 1) % box_size.rows() + 1)
}

const fn check_cell(cell: Cell, box_size: BoxSize) -> Result<(), GeometryError> {
    let limit = box_size.cells();
    if cell < 1 || cell > limit {
        return Err(GeometryError::InvalidCell { cell, limit });
    }
    Ok(())
}

/// The smallest cell label in box `b` (1-based box index, row-major box
/// order). Callers must pass `b` in `[1, N]`.
#[must_use]
pub const fn box_representative(b: usize, box_size: BoxSize) -> Cell {
    let k = box_size.get();
    let n = box_size.rows();
    n * k * ((b - 1) / k) + k * ((b - 1) % k) + 1
}

/// The `N` cell labels of `row`, left to right.
#[must_use]
pub fn row_cells(row: usize, box_size: BoxSize) -> Group {
    let n = box_size.rows();
    ((n * (row - 1) + 1)..=(n * row)).collect()
}

/// The `N` cell labels of `column`, top to bottom.
#[must_use]
pub fn column_cells(column: usize, box_size: BoxSize) -> Group {
    let n = box_size.columns();
    (0..n).map(|i| column + i * n).collect()
}

/// The `N` cell labels of box `b`, in ascending label order: `k` row
/// offsets of `N` cells each, `k` consecutive columns within each.
#[must_use]
pub fn box_cells(b: usize, box_size: BoxSize) -> Group {
    let k = box_size.get();
    let n = box_size.rows();
    let rep = box_representative(b, box_size);
    (0..k)
        .flat_map(|row_offset| (0..k).map(move |col_offset| rep + row_offset * n + col_offset))
        .collect()
}

/// All row groups, in row order.
#[must_use]
pub fn row_groups(box_size: BoxSize) -> Vec<Group> {
    (1..=box_size.rows())
        .map(|row| row_cells(row, box_size))
        .collect()
}

/// All column groups, in column order.
#[must_use]
pub fn column_groups(box_size: BoxSize) -> Vec<Group> {
    (1..=box_size.columns())
        .map(|column| column_cells(column, box_size))
        .collect()
}

/// All box groups, in box order.
#[must_use]
pub fn box_groups(box_size: BoxSize) -> Vec<Group> {
    (1..=box_size.boxes())
        .map(|b| box_cells(b, box_size))
        .collect()
}

/// The `3N` all-different groups of the puzzle: rows, then columns, then
/// boxes.
#[must_use]
pub fn all_groups(box_size: BoxSize) -> Vec<Group> {
    let mut groups = row_groups(box_size);
    groups.extend(column_groups(box_size));
    groups.extend(box_groups(box_size));
    groups
}

/// Every unordered pair of distinct cells that share a row, column, or box,
/// as `(low, high)` pairs in ascending order.
///
/// The core solver derives its peer lists directly from [`all_groups`];
/// this export exists for encodings that need the dependency graph itself
/// (graph colouring, polynomial systems).
#[must_use]
pub fn dependent_pairs(box_size: BoxSize) -> Vec<(Cell, Cell)> {
    use itertools::Itertools;
    use rustc_hash::FxHashSet;

    let mut pairs: FxHashSet<(Cell, Cell)> = FxHashSet::default();
    for group in all_groups(box_size) {
        for (a, b) in group.iter().copied().tuple_combinations() {
            pairs.insert(if a < b { (a, b) } else { (b, a) });
        }
    }

    let mut pairs: Vec<(Cell, Cell)> = pairs.into_iter().collect();
    pairs.sort_unstable();
    pairs
}
