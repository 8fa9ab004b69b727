use std::sync::Mutex;

use moo::{check, solve, Difficulty, Feedback, Puzzle, Sequence};

/// An oracle whose bookkeeping is not thread-safe on its own and is
/// serialized behind a mutex.
struct LedgerOracle {
    secret: Sequence,
    ledger: Mutex<Vec<Sequence>>,
}

impl moo::Oracle for LedgerOracle {
    fn query(&self, candidate: &Sequence) -> Feedback {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.push(candidate.clone());
        check(&self.secret, candidate)
    }
}

#[test]
fn mutex_oracle() {
    let secret: Sequence = "386142975".parse().unwrap();
    let oracle = LedgerOracle {
        secret: secret.clone(),
        ledger: Mutex::new(Vec::new()),
    };
    let guess = solve(Difficulty::new(9).unwrap(), &oracle).unwrap();
    assert_eq!(guess, secret);

    let ledger = oracle.ledger.into_inner().unwrap();
    // Every position probes from the all-zero baseline.
    let zeros = Sequence::zeroed(9);
    assert_eq!(ledger.iter().filter(|g| **g == zeros).count(), 9);
    // 9 baselines, plus 3+8+6+1+4+2+9+7+5 probes.
    assert_eq!(ledger.len(), 9 + 45);
    // Each probe varies only one index away from zero.
    assert!(ledger
        .iter()
        .all(|g| g.iter().filter(|d| u8::from(*d) != 0).count() <= 1));
}

#[test]
fn worked_examples() {
    let puzzle = Puzzle::from_secret("3142".parse().unwrap()).unwrap();
    assert_eq!(
        solve(puzzle.difficulty(), &puzzle.oracle()).unwrap().to_string(),
        "3142"
    );

    let puzzle = Puzzle::from_secret("059".parse().unwrap()).unwrap();
    assert_eq!(
        solve(puzzle.difficulty(), &puzzle.oracle()).unwrap().to_string(),
        "059"
    );
}

#[test]
fn single_thread_pool() {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    let puzzle = Puzzle::from_secret("7031".parse().unwrap()).unwrap();
    let oracle = puzzle.oracle_with(());
    let guess = pool.install(|| solve(puzzle.difficulty(), &oracle)).unwrap();
    assert!(puzzle.is_solved(&guess));
    assert_eq!(oracle.query_count(), 8 + 2 + 4 + 2);
}
