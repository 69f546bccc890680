#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
pub mod geometry;
pub mod puzzle;
pub mod solver;
