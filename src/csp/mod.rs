#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
pub mod backtracking;
pub mod constraint;
pub mod domain;
pub mod problem;
pub mod propagation;
pub mod solver;
pub mod trail;
pub mod variable_selection;
