#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Candidate-symbol domains.
//!
//! A [`Domain`] is the set of symbols still possible for one variable. It is
//! stored as a bitset indexed by symbol value (bit 0 unused, symbols are
//! 1-based) together with a cached cardinality, so the minimum-remaining-values
//! heuristic can compare domain sizes without scanning bits.
//!
//! Domains only ever shrink during search; [`Domain::insert`] exists so the
//! trail can restore the exact prior state on backtrack.

use bit_vec::BitVec;

/// A variable identifier. Variables are numbered `1..=num_variables`;
/// index 0 is reserved so identifiers can index storage directly.
pub type Variable = usize;

/// A symbol value, in `1..=num_symbols`.
pub type Symbol = usize;

/// The set of candidate symbols for one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    bits: BitVec,
    len: usize,
}

impl Domain {
    /// A full domain containing every symbol in `1..=num_symbols`.
    #[must_use]
    pub fn full(num_symbols: usize) -> Self {
        let mut bits = BitVec::from_elem(num_symbols + 1, true);
        bits.set(0, false);
        Self {
            bits,
            len: num_symbols,
        }
    }

    /// A singleton domain holding only `symbol`.
    #[must_use]
    pub fn singleton(symbol: Symbol, num_symbols: usize) -> Self {
        let mut bits = BitVec::from_elem(num_symbols + 1, false);
        bits.set(symbol, true);
        Self { bits, len: 1 }
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.bits.get(symbol).unwrap_or(false)
    }

    /// Removes `symbol`. Returns `true` if it was present.
    pub fn remove(&mut self, symbol: Symbol) -> bool {
        if self.contains(symbol) {
            self.bits.set(symbol, false);
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Re-inserts `symbol` (used when undoing trailed removals).
    /// Returns `true` if it was absent.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.contains(symbol) {
            false
        } else {
            self.bits.set(symbol, true);
            self.len += 1;
            true
        }
    }

    /// Number of candidate symbols remaining.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// An empty domain means the current partial assignment is infeasible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A singleton domain is an assigned variable.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        self.len == 1
    }

    /// The assigned symbol, if this domain is a singleton.
    #[must_use]
    pub fn value(&self) -> Option<Symbol> {
        if self.is_singleton() {
            self.iter().next()
        } else {
            None
        }
    }

    /// Remaining symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(symbol, present)| present.then_some(symbol))
    }
}
