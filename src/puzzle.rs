use crate::digit::{Digit, Sequence, MAX_LEN};
use crate::feedback::{self, Feedback};
use crate::oracle::{LogObserver, Oracle, QueryObserver};
use rand::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    #[display("{value} is an invalid moo digit count, expected 1 to 9")]
    InvalidDifficulty { value: usize },
}

/// Length of the secret and of every guess.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(usize);

impl Difficulty {
    pub const MIN: usize = 1;
    pub const MAX: usize = MAX_LEN;
    pub const DEFAULT: Difficulty = Difficulty(4);

    pub fn new(value: usize) -> Result<Self, PuzzleError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PuzzleError::InvalidDifficulty { value })
        }
    }

    /// Like [`Difficulty::new`], but falls back to [`Difficulty::DEFAULT`]
    /// with a warning instead of failing.
    pub fn clamped(value: usize) -> Self {
        Self::new(value).unwrap_or_else(|err| {
            log::warn!("{}, difficulty set to {}", err, Self::DEFAULT);
            Self::DEFAULT
        })
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Draws `difficulty` distinct digits.
pub fn generate_secret<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Sequence {
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    let mut secret = Sequence::zeroed(difficulty.get());
    for (i, d) in digits.iter().take(difficulty.get()).enumerate() {
        secret[i] = *d;
    }
    secret
}

/// One game: a secret that never changes once the puzzle exists.
#[derive(Clone, Debug)]
pub struct Puzzle {
    difficulty: Difficulty,
    secret: Sequence,
}

impl Puzzle {
    /// Creates a puzzle with a random secret, clamping `difficulty`.
    pub fn new(difficulty: usize) -> Self {
        Self::with_rng(difficulty, &mut thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(difficulty: usize, rng: &mut R) -> Self {
        let difficulty = Difficulty::clamped(difficulty);
        Self {
            difficulty,
            secret: generate_secret(difficulty, rng),
        }
    }

    pub fn from_secret(secret: Sequence) -> Result<Self, PuzzleError> {
        Ok(Self {
            difficulty: Difficulty::new(secret.len())?,
            secret,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> &Sequence {
        &self.secret
    }

    pub fn hits(&self, guess: &Sequence) -> usize {
        feedback::hits(guess.as_slice(), self.secret.as_slice())
    }

    pub fn blow(&self, guess: &Sequence) -> usize {
        feedback::blow(guess.as_slice(), self.secret.as_slice())
    }

    pub fn check(&self, guess: &Sequence) -> Feedback {
        feedback::check(&self.secret, guess)
    }

    pub fn is_solved(&self, guess: &Sequence) -> bool {
        *guess == self.secret
    }

    /// Binds an oracle that logs each query.
    pub fn oracle(&self) -> PuzzleOracle<'_, LogObserver> {
        self.oracle_with(LogObserver)
    }

    pub fn oracle_with<O: QueryObserver>(&self, observer: O) -> PuzzleOracle<'_, O> {
        PuzzleOracle {
            puzzle: self,
            count: AtomicUsize::new(0),
            observer,
        }
    }
}

impl TryFrom<Sequence> for Puzzle {
    type Error = PuzzleError;

    fn try_from(secret: Sequence) -> Result<Self, Self::Error> {
        Self::from_secret(secret)
    }
}

/// A puzzle's answer key that counts how often it has been asked.
#[derive(Debug)]
pub struct PuzzleOracle<'a, O = LogObserver> {
    puzzle: &'a Puzzle,
    count: AtomicUsize,
    observer: O,
}

impl<O> PuzzleOracle<'_, O> {
    /// Number of queries answered since this oracle was bound.
    pub fn query_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.puzzle
    }
}

impl<O: QueryObserver> Oracle for PuzzleOracle<'_, O> {
    fn query(&self, candidate: &Sequence) -> Feedback {
        self.count.fetch_add(1, Ordering::SeqCst);
        if candidate.len() != self.puzzle.difficulty.get() {
            log::warn!(
                "guess {} has {} digits but the puzzle has {}",
                candidate,
                candidate.len(),
                self.puzzle.difficulty
            );
        }
        let feedback = self.puzzle.check(candidate);
        self.observer.observe(candidate, feedback);
        feedback
    }
}
