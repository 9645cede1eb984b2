use crate::grid::{Grid, Position, ValidationResult, BOX_SIZE, GRID_SIZE};
use std::fmt;

/// Result type for solve operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors that can end a solve before a solution is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The filled cells already conflict before any search.
    InvalidPuzzle(ValidationResult),
    /// Exhaustive search found no completion.
    Unsolvable,
    /// The configured step budget ran out mid-search.
    StepLimitExceeded(u64),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPuzzle(result) => {
                write!(f, "invalid puzzle: {} conflicting pair(s)", result.conflicts.len())?;
                if let Some(c) = result.conflicts.first() {
                    write!(f, ", e.g. {} at {} and {}", c.value, c.first, c.second)?;
                }
                Ok(())
            }
            Self::Unsolvable => write!(f, "puzzle has no solution"),
            Self::StepLimitExceeded(limit) => {
                write!(f, "search exceeded the step limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum number of search steps before giving up (None = unbounded).
    pub max_steps: Option<u64>,
    /// Whether to reject puzzles whose givens already conflict.
    pub validate_input: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            validate_input: true,
        }
    }
}

/// Depth-first backtracking solver.
///
/// Scans for the first empty cell in row-major order and tries the digits
/// 1 through 9 in ascending order, so the solution surfaced for a puzzle
/// with several completions is deterministic.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with a custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve the puzzle, returning the solved grid if a completion exists.
    ///
    /// The input grid is left untouched; the search runs on a working copy.
    pub fn solve(&self, grid: &Grid) -> SolveResult<Grid> {
        if self.config.validate_input {
            let result = grid.validate();
            if !result.is_valid {
                return Err(SolveError::InvalidPuzzle(result));
            }
        }

        let mut working = grid.clone();
        let mut steps = 0;
        if self.search(&mut working, &mut steps)? {
            Ok(working)
        } else {
            Err(SolveError::Unsolvable)
        }
    }

    /// Recursive core: fill the first empty cell with the lowest digit that
    /// keeps the grid consistent, undoing the placement when the branch
    /// dead-ends. On `Ok(false)` every cell that was empty on entry is
    /// empty again.
    fn search(&self, grid: &mut Grid, steps: &mut u64) -> SolveResult<bool> {
        if let Some(limit) = self.config.max_steps {
            *steps += 1;
            if *steps > limit {
                return Err(SolveError::StepLimitExceeded(limit));
            }
        }

        let pos = match find_next_empty(grid) {
            Some(pos) => pos,
            None => return Ok(true),
        };

        for guess in 1..=9 {
            if !is_valid(grid, guess, pos) {
                continue;
            }
            grid.set(pos, Some(guess));
            if self.search(grid, steps)? {
                return Ok(true);
            }
            grid.set(pos, None);
        }

        Ok(false)
    }
}

/// First empty cell in row-major order, `None` when the grid is full.
fn find_next_empty(grid: &Grid) -> Option<Position> {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            if grid.get(pos).is_none() {
                return Some(pos);
            }
        }
    }
    None
}

/// Whether placing `guess` at `pos` leaves the row, column, and box free of
/// a duplicate. The cell at `pos` is assumed empty.
fn is_valid(grid: &Grid, guess: u8, pos: Position) -> bool {
    for col in 0..GRID_SIZE {
        if grid.get(Position::new(pos.row, col)) == Some(guess) {
            return false;
        }
    }

    for row in 0..GRID_SIZE {
        if grid.get(Position::new(row, pos.col)) == Some(guess) {
            return false;
        }
    }

    let origin = pos.box_origin();
    for row in origin.row..origin.row + BOX_SIZE {
        for col in origin.col..origin.col + BOX_SIZE {
            if grid.get(Position::new(row, col)) == Some(guess) {
                return false;
            }
        }
    }

    true
}
