//! Backtracking solver engine for classic 9x9 Sudoku.
//!
//! The solver fills the first empty cell (row-major) with the lowest digit
//! that keeps every row, column, and 3x3 box free of duplicates, recursing
//! until the grid is complete and undoing placements on dead ends. Givens
//! are validated up front so an inconsistent puzzle is rejected instead of
//! silently "solved".

mod grid;
mod solver;

pub use grid::{Conflict, Grid, Position, ValidationResult, BOX_SIZE, GRID_SIZE};
pub use solver::{SolveError, SolveResult, Solver, SolverConfig};
