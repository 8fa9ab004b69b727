use moo::config::Config;
use moo::{solve, Puzzle};
use rand::prelude::*;
use rand::rngs::StdRng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.init_thread_pool();

    let puzzle = match config.seed {
        Some(seed) => Puzzle::with_rng(config.difficulty, &mut StdRng::seed_from_u64(seed)),
        None => Puzzle::new(config.difficulty),
    };
    log::info!("new game with {} digits", puzzle.difficulty());

    let oracle = puzzle.oracle();
    let guess = match solve(puzzle.difficulty(), &oracle) {
        Ok(guess) => guess,
        Err(err) => {
            log::error!("couldn't find code: {}", err);
            std::process::exit(1);
        }
    };
    log::info!("solved in {} queries", oracle.query_count());

    println!("answer {}", puzzle.secret());
    println!("done {}", guess);
    if !puzzle.is_solved(&guess) {
        log::error!("guess {} does not match the answer", guess);
        std::process::exit(1);
    }
}
