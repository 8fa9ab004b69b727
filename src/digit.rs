use arrayvec::ArrayVec;
use itertools::Itertools;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Longest sequence a puzzle can use.
pub const MAX_LEN: usize = 9;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    pub const ALL: [Digit; 10] = {
        use Digit::*;
        [Zero, One, Two, Three, Four, Five, Six, Seven, Eight, Nine]
    };

    /// The next digit in the alphabet, or `None` after `Nine`.
    pub fn succ(self) -> Option<Digit> {
        Digit::try_from(u8::from(self) + 1).ok()
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        use Digit::*;

        match d {
            Zero => 0,
            One => 1,
            Two => 2,
            Three => 3,
            Four => 4,
            Five => 5,
            Six => 6,
            Seven => 7,
            Eight => 8,
            Nine => 9,
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = SequenceError;

    fn try_from(d: u8) -> Result<Self, Self::Error> {
        use Digit::*;

        Ok(match d {
            0 => Zero,
            1 => One,
            2 => Two,
            3 => Three,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            9 => Nine,
            value => return Err(SequenceError::InvalidDigit { value }),
        })
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Errors raised while building a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SequenceError {
    #[display("invalid digit: {value}")]
    InvalidDigit { value: u8 },
    #[display("sequence of length {len} is too long")]
    TooLong { len: usize },
    #[display("invalid character in sequence: {ch:?}")]
    InvalidCharacter { ch: char },
}

/// An ordered run of at most [`MAX_LEN`] digits.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sequence(ArrayVec<Digit, MAX_LEN>);

impl Sequence {
    /// A sequence of `len` zeros; `len` is capped at [`MAX_LEN`].
    pub fn zeroed(len: usize) -> Self {
        Self(std::iter::repeat(Digit::Zero).take(len.min(MAX_LEN)).collect())
    }

    pub fn from_digits(digits: &[u8]) -> Result<Self, SequenceError> {
        if digits.len() > MAX_LEN {
            return Err(SequenceError::TooLong { len: digits.len() });
        }
        digits
            .iter()
            .map(|&d| Digit::try_from(d))
            .collect::<Result<ArrayVec<_, MAX_LEN>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.0.iter().copied()
    }

    pub fn has_distinct_digits(&self) -> bool {
        self.0.iter().all_unique()
    }
}

impl Index<usize> for Sequence {
    type Output = Digit;

    fn index(&self, i: usize) -> &Digit {
        &self.0[i]
    }
}

impl IndexMut<usize> for Sequence {
    fn index_mut(&mut self, i: usize) -> &mut Digit {
        &mut self.0[i]
    }
}

impl TryFrom<Vec<Digit>> for Sequence {
    type Error = SequenceError;

    fn try_from(digits: Vec<Digit>) -> Result<Self, Self::Error> {
        let len = digits.len();
        ArrayVec::try_from(digits.as_slice())
            .map(Self)
            .map_err(|_| SequenceError::TooLong { len })
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(SequenceError::InvalidCharacter { ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_digits(&digits)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}
