//! Environment configuration for the `moo` binary.
//!
//! Reads `MOO_DIFFICULTY`, `MOO_SEED` and `RAYON_NUM_THREADS`.

use crate::puzzle::Difficulty;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Requested secret length. Not validated here; `Puzzle::new` clamps it.
    pub difficulty: usize,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::DEFAULT.get(),
            seed: None,
            threads: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            difficulty: parse_var(&lookup, "MOO_DIFFICULTY").unwrap_or(defaults.difficulty),
            seed: parse_var(&lookup, "MOO_SEED"),
            threads: parse_var(&lookup, "RAYON_NUM_THREADS"),
        }
    }

    /// Builds the rayon global pool when a thread count was given. Tolerates
    /// an already-initialized pool.
    pub fn init_thread_pool(&self) {
        if let Some(threads) = self.threads {
            if let Err(err) = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
            {
                log::warn!("could not configure {} rayon threads: {}", threads, err);
            }
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(Config::default().difficulty, 4);
    }

    #[test]
    fn reads_vars() {
        let c = config(&[
            ("MOO_DIFFICULTY", "7"),
            ("MOO_SEED", " 42 "),
            ("RAYON_NUM_THREADS", "3"),
        ]);
        assert_eq!(
            c,
            Config {
                difficulty: 7,
                seed: Some(42),
                threads: Some(3),
            }
        );
    }

    #[test]
    fn ignores_garbage() {
        let c = config(&[("MOO_DIFFICULTY", "four"), ("MOO_SEED", "-1")]);
        assert_eq!(c, Config::default());
    }

    #[test]
    fn keeps_out_of_range_difficulty() {
        assert_eq!(config(&[("MOO_DIFFICULTY", "12")]).difficulty, 12);
    }
}
