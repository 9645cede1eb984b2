//! Basic example of using the solver engine

use sudoku_engine::{Grid, SolveError, Solver};

fn main() {
    // Parse a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("fixture is well-formed");

    println!("Puzzle:");
    println!("{}", puzzle);
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    match solver.solve(&puzzle) {
        Ok(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        Err(e) => println!("No solution: {}", e),
    }

    // An inconsistent puzzle is rejected before any search
    let mut broken = puzzle.clone();
    broken.set(sudoku_engine::Position::new(0, 2), Some(5));
    match solver.solve(&broken) {
        Err(SolveError::InvalidPuzzle(result)) => {
            println!("Broken puzzle rejected with {} conflict(s):", result.conflicts.len());
            for c in &result.conflicts {
                println!("  {} at {} and {}", c.value, c.first, c.second);
            }
        }
        other => println!("Unexpected outcome: {:?}", other.map(|g| g.to_string_compact())),
    }
}
