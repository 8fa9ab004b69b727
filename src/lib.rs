//! Hit-and-blow ("moo") puzzles and a parallel solver for them.
//!
//! A [`Puzzle`] hides a sequence of distinct digits. Guesses are answered with
//! [`Feedback`]: how many digits sit in the right place (hits) and how many
//! appear elsewhere (blow). [`solve`] recovers the secret from any [`Oracle`]
//! using hits alone, one worker per position.
//!
//! ```
//! use moo::{solve, Puzzle};
//!
//! let puzzle = Puzzle::from_secret("3142".parse()?)?;
//! let oracle = puzzle.oracle();
//! let guess = solve(puzzle.difficulty(), &oracle)?;
//! assert!(puzzle.is_solved(&guess));
//! assert_eq!(oracle.query_count(), 14);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod digit;
pub mod feedback;
pub mod oracle;
pub mod puzzle;
pub mod solver;
pub mod task_group;

pub use digit::{Digit, Sequence, SequenceError};
pub use feedback::{blow, check, hits, Feedback};
pub use oracle::{LogObserver, Oracle, QueryObserver};
pub use puzzle::{generate_secret, Difficulty, Puzzle, PuzzleError, PuzzleOracle};
pub use solver::{solve, solve_position, PositionResult, SolveError};
