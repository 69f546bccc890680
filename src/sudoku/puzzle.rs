#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Puzzles as clue maps, plus the plain-text grid format.
//!
//! A [`Puzzle`] is a box size and a mapping from cell labels to clue values;
//! a complete puzzle (every cell mapped) is also how solutions are
//! represented. The text format is one character per cell in row-major
//! order: `.` for a blank, `1`-`9` then `a`-`z` then `A`-`Z` for symbols
//! (so grids up to box size 7 can be written down). Whitespace and the grid
//! decoration characters `/ | + -` are ignored on input, which lets the
//! parser read back its own `Display` output as well as single-line batch
//! puzzles.

use crate::csp::domain::Symbol;
use crate::sudoku::geometry::{BoxSize, Cell};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Printable characters for symbols, indexed by symbol value.
/// Index 0 is the digit `0`, which is never a valid symbol.
const PRINTABLE: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters skipped by the parser: layout and grid decoration.
const DECORATION: &[char] = &['/', '|', '+', '-'];

/// Errors from building or parsing a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A clue's cell label lies outside the grid.
    #[error("clue cell {cell} outside 1..={limit}")]
    InvalidClueCell { cell: Cell, limit: usize },
    /// A clue's value lies outside the symbol range.
    #[error("clue at cell {cell} has value {value}, outside 1..={limit}")]
    InvalidClue {
        cell: Cell,
        value: Symbol,
        limit: usize,
    },
    /// A character that is neither a symbol, a blank, nor decoration.
    #[error("unexpected character {0:?} in puzzle string")]
    UnexpectedCharacter(char),
    /// The string does not describe exactly `N²` cells.
    #[error("puzzle string has {found} cells, expected {expected}")]
    WrongLength { expected: usize, found: usize },
}

/// A (possibly partial) assignment of symbols to grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    box_size: BoxSize,
    clues: FxHashMap<Cell, Symbol>,
}

impl Puzzle {
    /// A puzzle with no clues.
    #[must_use]
    pub fn empty(box_size: BoxSize) -> Self {
        Self {
            box_size,
            clues: FxHashMap::default(),
        }
    }

    /// Builds a puzzle from a clue map, validating every entry.
    ///
    /// # Errors
    ///
    /// `InvalidClueCell` or `InvalidClue` naming the offending cell.
    pub fn from_clues(
        box_size: BoxSize,
        clues: FxHashMap<Cell, Symbol>,
    ) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::empty(box_size);
        for (&cell, &value) in &clues {
            puzzle.set(cell, value)?;
        }
        Ok(puzzle)
    }

    /// Records a clue.
    ///
    /// # Errors
    ///
    /// `InvalidClueCell` or `InvalidClue` when the cell or value is out of
    /// range.
    pub fn set(&mut self, cell: Cell, value: Symbol) -> Result<(), PuzzleError> {
        let cell_limit = self.box_size.cells();
        if cell < 1 || cell > cell_limit {
            return Err(PuzzleError::InvalidClueCell {
                cell,
                limit: cell_limit,
            });
        }
        let symbol_limit = self.box_size.symbols();
        if value < 1 || value > symbol_limit {
            return Err(PuzzleError::InvalidClue {
                cell,
                value,
                limit: symbol_limit,
            });
        }
        self.clues.insert(cell, value);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Symbol> {
        self.clues.get(&cell).copied()
    }

    #[must_use]
    pub const fn box_size(&self) -> BoxSize {
        self.box_size
    }

    #[must_use]
    pub const fn clues(&self) -> &FxHashMap<Cell, Symbol> {
        &self.clues
    }

    /// Number of filled cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Whether every cell carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.clues.len() == self.box_size.cells()
    }

    /// Parses a puzzle string: one character per cell in row-major order,
    /// `.` or `_` for blanks, whitespace and `/ | + -` ignored.
    ///
    /// # Errors
    ///
    /// `UnexpectedCharacter`, `WrongLength`, or `InvalidClue` when a symbol
    /// exceeds the grid's range (e.g. `a` in a 9×9 puzzle).
    pub fn parse(text: &str, box_size: BoxSize) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::empty(box_size);
        let expected = box_size.cells();
        let mut cell: Cell = 0;

        for c in text.chars() {
            if c.is_whitespace() || DECORATION.contains(&c) {
                continue;
            }
            cell += 1;
            if cell > expected {
                // Count the rest of the cells for the error message.
                continue;
            }
            match c {
                '.' | '_' => {}
                _ => {
                    let value = printable_to_symbol(c)
                        .ok_or(PuzzleError::UnexpectedCharacter(c))?;
                    puzzle.set(cell, value)?;
                }
            }
        }

        if cell != expected {
            return Err(PuzzleError::WrongLength {
                expected,
                found: cell,
            });
        }
        Ok(puzzle)
    }
}

/// The character for `symbol`, or `None` beyond the printable table.
#[must_use]
pub fn symbol_to_printable(symbol: Symbol) -> Option<char> {
    PRINTABLE.get(symbol).map(|&b| b as char)
}

/// The symbol value of `c`, or `None` for characters outside the table
/// (including `'0'`, which is index 0 and never a valid symbol).
#[must_use]
pub fn printable_to_symbol(c: char) -> Option<Symbol> {
    PRINTABLE
        .iter()
        .position(|&b| b as char == c)
        .filter(|&value| value > 0)
}

impl fmt::Display for Puzzle {
    /// Renders the grid with `|` box separators and `+---+` band rules, the
    /// way the solver's CLI prints puzzles and solutions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let k = self.box_size.get();
        let n = self.box_size.rows();

        let band_rule = {
            let segment = "-".repeat(2 * k + 1);
            let mut rule = String::new();
            for _ in 0..k {
                rule.push('+');
                rule.push_str(&segment);
            }
            rule.push('+');
            rule
        };

        writeln!(f, "{band_rule}")?;
        for row in 1..=n {
            write!(f, "|")?;
            for column in 1..=n {
                let cell = (row - 1) * n + column;
                let glyph = self
                    .get(cell)
                    .and_then(symbol_to_printable)
                    .unwrap_or('.');
                write!(f, " {glyph}")?;
                if column % k == 0 {
                    write!(f, " |")?;
                }
            }
            writeln!(f)?;
            if row % k == 0 {
                writeln!(f, "{band_rule}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k3() -> BoxSize {
        BoxSize::new(3).expect("valid box size")
    }

    fn k2() -> BoxSize {
        BoxSize::new(2).expect("valid box size")
    }

    #[test]
    fn printable_table_round_trips() {
        assert_eq!(printable_to_symbol('1'), Some(1));
        assert_eq!(printable_to_symbol('9'), Some(9));
        assert_eq!(printable_to_symbol('a'), Some(10));
        assert_eq!(printable_to_symbol('A'), Some(36));
        assert_eq!(printable_to_symbol('0'), None);
        assert_eq!(printable_to_symbol('!'), None);
        assert_eq!(symbol_to_printable(10), Some('a'));
        for value in 1..=61 {
            let c = symbol_to_printable(value).expect("in table");
            assert_eq!(printable_to_symbol(c), Some(value));
        }
    }

    #[test]
    fn parses_a_plain_grid_string() {
        let p = Puzzle::parse("1234341221434321", k2()).expect("parses");
        assert_eq!(p.len(), 16);
        assert_eq!(p.get(1), Some(1));
        assert_eq!(p.get(16), Some(1));
        assert!(p.is_complete());
    }

    #[test]
    fn blanks_and_separators_are_skipped() {
        let p = Puzzle::parse("12.. / ..21 / 2.. 1 / ..1 2", k2()).expect("parses");
        assert_eq!(p.len(), 8);
        assert_eq!(p.get(3), None);
        assert_eq!(p.get(8), Some(1));
    }

    #[test]
    fn wrong_cell_count_is_reported() {
        assert_eq!(
            Puzzle::parse("123", k2()),
            Err(PuzzleError::WrongLength {
                expected: 16,
                found: 3
            })
        );
        assert!(matches!(
            Puzzle::parse(&".".repeat(17), k2()),
            Err(PuzzleError::WrongLength {
                expected: 16,
                found: 17
            })
        ));
    }

    #[test]
    fn unknown_characters_are_reported() {
        assert_eq!(
            Puzzle::parse("12!4............", k2()),
            Err(PuzzleError::UnexpectedCharacter('!'))
        );
    }

    #[test]
    fn symbols_beyond_the_grid_range_are_invalid_clues() {
        assert_eq!(
            Puzzle::parse("5...............", k2()),
            Err(PuzzleError::InvalidClue {
                cell: 1,
                value: 5,
                limit: 4
            })
        );
    }

    #[test]
    fn set_validates_cell_and_value() {
        let mut p = Puzzle::empty(k3());
        assert!(p.set(81, 9).is_ok());
        assert_eq!(
            p.set(82, 1),
            Err(PuzzleError::InvalidClueCell {
                cell: 82,
                limit: 81
            })
        );
        assert_eq!(
            p.set(1, 10),
            Err(PuzzleError::InvalidClue {
                cell: 1,
                value: 10,
                limit: 9
            })
        );
    }

    #[test]
    fn display_output_parses_back() {
        let text = "2 5 . . 3 . 9 . 1 \
                    . 1 . . . 4 . . . \
                    4 . 7 . . . 2 . 8 \
                    . . 5 2 . . . . . \
                    . . . . 9 8 1 . . \
                    . 4 . . . 3 . . . \
                    . . . 3 6 . . 7 2 \
                    . 7 . . . . . . 3 \
                    9 . 3 . . . 6 . 4";
        let p = Puzzle::parse(text, k3()).expect("parses");
        let rendered = p.to_string();
        assert!(rendered.contains('|'));
        let reparsed = Puzzle::parse(&rendered, k3()).expect("round-trips");
        assert_eq!(reparsed, p);
    }
}
