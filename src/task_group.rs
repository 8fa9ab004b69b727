//! Fan-out/fan-in over the rayon pool.

use std::sync::mpsc;

/// Runs `task(0)` through `task(count - 1)` in parallel and returns every
/// output once all of them have finished.
///
/// Outputs come back in completion order. Callers that care about position
/// should carry the index in `T`.
pub fn run_all<T, F>(count: usize, task: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let (tx, rx) = mpsc::channel();
    let task = &task;
    rayon::scope(|s| {
        for index in 0..count {
            let tx = tx.clone();
            s.spawn(move |_| {
                // The receiver outlives the scope, so this cannot fail.
                let _ = tx.send(task(index));
            });
        }
    });
    drop(tx);
    rx.into_iter().collect()
}
