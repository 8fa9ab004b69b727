use crate::digit::{Digit, Sequence};
use std::fmt;

/// Response to a single guess.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Feedback {
    /// Positions where guess and secret agree.
    pub hits: usize,
    /// Ordered pairs `(i, j)`, `i != j`, with `guess[i] == secret[j]`.
    pub blow: usize,
}

impl From<(usize, usize)> for Feedback {
    fn from((hits, blow): (usize, usize)) -> Self {
        Self { hits, blow }
    }
}

impl From<Feedback> for (usize, usize) {
    fn from(f: Feedback) -> Self {
        (f.hits, f.blow)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hits: {} blow: {}", self.hits, self.blow)
    }
}

/// Exact-position matches. Zero when the lengths differ.
pub fn hits(guess: &[Digit], secret: &[Digit]) -> usize {
    if guess.len() != secret.len() {
        return 0;
    }
    guess.iter().zip(secret).filter(|(g, s)| g == s).count()
}

/// Value matches at mismatched positions. Zero when the lengths differ.
///
/// Every ordered pair is counted, so repeated digits can push this above the
/// number of shared values: guessing `11` against `11` gives a blow of 2.
pub fn blow(guess: &[Digit], secret: &[Digit]) -> usize {
    if guess.len() != secret.len() {
        return 0;
    }
    guess
        .iter()
        .enumerate()
        .map(|(i, g)| {
            secret
                .iter()
                .enumerate()
                .filter(|&(j, s)| i != j && g == s)
                .count()
        })
        .sum()
}

pub fn check(secret: &Sequence, guess: &Sequence) -> Feedback {
    Feedback {
        hits: hits(guess.as_slice(), secret.as_slice()),
        blow: blow(guess.as_slice(), secret.as_slice()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn check(code: &str, guess: &str) -> (usize, usize) {
        super::check(&seq(code), &seq(guess)).into()
    }

    #[test]
    fn check_distinct() {
        let code = "123406";
        assert_eq!(check(code, code), (6, 0));
        assert_eq!(check(code, "604321"), (0, 6));
        assert_eq!(check(code, "999999"), (0, 0));
        assert_eq!(check(code, "123460"), (4, 2));
        assert_eq!(check(code, "123499"), (4, 0));
        assert_eq!(check("3142", "0000"), (0, 0));
        assert_eq!(check("0592", "0000"), (1, 3));
    }

    #[test]
    fn check_repeated_digits() {
        assert_eq!(check("11", "11"), (2, 2));
        assert_eq!(check("123406", "123400"), (5, 1));
        assert_eq!(check("111222", "111122"), (5, 13));
        assert_eq!(check("129999", "112222"), (1, 5));
    }

    #[test]
    fn check_length_mismatch() {
        assert_eq!(check("3142", "314"), (0, 0));
        assert_eq!(check("314", "3142"), (0, 0));
        assert_eq!(check("", "1"), (0, 0));
    }

    #[test]
    fn feedback_display() {
        let f = Feedback::from((2, 1));
        assert_eq!(f.to_string(), "hits: 2 blow: 1");
    }
}
