//! The feedback source a solver queries.
//!
//! An [`Oracle`] answers guesses against one fixed secret. Solvers call it from
//! several threads at once, so every oracle must be `Sync`; any state it keeps
//! (such as a call counter) has to be synchronized internally.

use crate::digit::Sequence;
use crate::feedback::Feedback;

pub trait Oracle: Sync {
    fn query(&self, candidate: &Sequence) -> Feedback;
}

impl<F> Oracle for F
where
    F: Fn(&Sequence) -> Feedback + Sync,
{
    fn query(&self, candidate: &Sequence) -> Feedback {
        self(candidate)
    }
}

/// Receives every query answered by a puzzle oracle.
pub trait QueryObserver: Sync {
    fn observe(&self, candidate: &Sequence, feedback: Feedback);
}

/// Silent observer.
impl QueryObserver for () {
    fn observe(&self, _candidate: &Sequence, _feedback: Feedback) {}
}

/// Writes each query to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl QueryObserver for LogObserver {
    fn observe(&self, candidate: &Sequence, feedback: Feedback) {
        log::debug!("{}: {}", candidate, feedback);
    }
}
