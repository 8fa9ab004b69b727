//! Recovers a secret from hit counts alone, one worker per position.
//!
//! Each worker holds every digit of its candidate at zero except the one it
//! owns, and walks that digit upwards. Only that index changes between its
//! queries, so the hit count moves by at most one and the move belongs to
//! that index: a rise means the current digit is right, a drop means the
//! baseline zero was. Workers share the oracle but never a candidate, so
//! they can run in any order.

use crate::digit::{Digit, Sequence};
use crate::oracle::Oracle;
use crate::puzzle::Difficulty;
use crate::task_group;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The hit count never moved while probing every digit, which a single
    /// fixed secret cannot produce.
    #[display("oracle gave no signal for position {position}")]
    NoSignal { position: usize },
    #[display("position {position} is out of range for length {len}")]
    PositionOutOfRange { position: usize, len: usize },
}

impl SolveError {
    pub fn position(&self) -> usize {
        match *self {
            SolveError::NoSignal { position } | SolveError::PositionOutOfRange { position, .. } => {
                position
            }
        }
    }
}

/// The digit found for one index.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct PositionResult {
    pub position: usize,
    pub digit: Digit,
}

/// Finds the digit at `position` by probing 1 through 9 there.
///
/// Issues at most ten queries.
pub fn solve_position<O>(
    difficulty: Difficulty,
    position: usize,
    oracle: &O,
) -> Result<PositionResult, SolveError>
where
    O: Oracle + ?Sized,
{
    let len = difficulty.get();
    if position >= len {
        return Err(SolveError::PositionOutOfRange { position, len });
    }

    let mut guess = Sequence::zeroed(len);
    let baseline = oracle.query(&guess).hits;
    while let Some(next) = guess[position].succ() {
        guess[position] = next;
        let digit = match oracle.query(&guess).hits.cmp(&baseline) {
            Ordering::Greater => next,
            Ordering::Less => Digit::Zero,
            Ordering::Equal => continue,
        };
        log::trace!("position {} is {}", position, digit);
        return Ok(PositionResult { position, digit });
    }
    Err(SolveError::NoSignal { position })
}

/// Solves every position in parallel and assembles the secret.
///
/// Blocks until all workers have finished. If any position fails, the whole
/// solve fails with the error for the lowest such position.
pub fn solve<O>(difficulty: Difficulty, oracle: &O) -> Result<Sequence, SolveError>
where
    O: Oracle + ?Sized,
{
    let results = task_group::run_all(difficulty.get(), |position| {
        solve_position(difficulty, position, oracle)
    });

    let mut guess = Sequence::zeroed(difficulty.get());
    let mut failure: Option<SolveError> = None;
    for result in results {
        match result {
            Ok(PositionResult { position, digit }) => guess[position] = digit,
            Err(err) => {
                if failure.map_or(true, |f| err.position() < f.position()) {
                    failure = Some(err);
                }
            }
        }
    }
    if let Some(err) = failure {
        return Err(err);
    }

    log::debug!("solved {}", guess);
    Ok(guess)
}
