#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! A constraint problem: variables, their initial domains, and constraints.

use crate::csp::constraint::Constraint;
use crate::csp::domain::Domain;

/// The immutable description of a constraint-satisfaction instance.
///
/// Variables are numbered `1..=num_variables` and every variable starts with
/// the full domain `1..=num_symbols`; constraints narrow it. The domain
/// vector reserves slot 0 so variable ids index it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    num_variables: usize,
    num_symbols: usize,
    domains: Vec<Domain>,
    constraints: Vec<Constraint>,
}

impl Problem {
    /// A problem over `num_variables` variables, each ranging over
    /// `1..=num_symbols`, with no constraints yet.
    #[must_use]
    pub fn new(num_variables: usize, num_symbols: usize) -> Self {
        let mut domains = Vec::with_capacity(num_variables + 1);
        domains.push(Domain::singleton(0, num_symbols)); // unused slot 0
        domains.resize(num_variables + 1, Domain::full(num_symbols));
        Self {
            num_variables,
            num_symbols,
            domains,
            constraints: Vec::new(),
        }
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    #[must_use]
    pub const fn num_variables(&self) -> usize {
        self.num_variables
    }

    #[must_use]
    pub const fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    /// Initial domains, indexed by variable id (slot 0 unused).
    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Decomposes the problem into its domains and constraints, letting a
    /// solver take ownership without cloning.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Domain>, Vec<Constraint>) {
        (self.domains, self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_problem_has_full_domains() {
        let p = Problem::new(4, 2);
        assert_eq!(p.domains().len(), 5);
        assert!(p.domains()[1..].iter().all(|d| d.len() == 2));
        assert!(p.constraints().is_empty());
    }

    #[test]
    fn constraints_accumulate_in_order() {
        let mut p = Problem::new(3, 3);
        p.add_constraint(Constraint::all_different(1..=3));
        p.add_constraint(Constraint::equals(2, 1));
        assert_eq!(p.constraints().len(), 2);
        assert_eq!(p.constraints()[1], Constraint::equals(2, 1));
    }
}
