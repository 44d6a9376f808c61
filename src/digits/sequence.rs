use std::fmt;
use std::str::FromStr;

use crate::digits::digit::Digit;
use crate::digits::errors::DigitError;
use crate::digits::validation::validate_hex_string;

/// Widest sequence whose value still fits in a `u128`
pub const MAX_SEQUENCE_LEN: usize = 32;

/// An ordered run of hexadecimal digits, read as a base-16 numeral.
///
/// Sequences are treated as values: [`Sequence::extended`] returns a new
/// sequence and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    digits: Vec<Digit>,
}

impl Sequence {
    /// The empty sequence, used as the root of the search
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn get(&self, index: usize) -> Option<Digit> {
        self.digits.get(index).copied()
    }

    /// A copy of this sequence with `digit` appended
    pub fn extended(&self, digit: Digit) -> Self {
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.extend_from_slice(&self.digits);
        digits.push(digit);
        Self { digits }
    }

    /// The first `k` digits as a sequence of their own
    pub fn prefix(&self, k: usize) -> Option<Self> {
        self.digits.get(..k).map(|digits| Self {
            digits: digits.to_vec(),
        })
    }

    /// Value of the first `k` digits.
    ///
    /// `None` when `k` is zero, exceeds the length, or the value overflows.
    pub fn prefix_value(&self, k: usize) -> Option<u128> {
        if k == 0 {
            return None;
        }
        self.digits.get(..k)?.iter().try_fold(0u128, |acc, digit| {
            acc.checked_mul(16)?.checked_add(u128::from(digit.value()))
        })
    }

    /// Value of the whole sequence; the empty sequence has none
    pub fn value(&self) -> Option<u128> {
        self.prefix_value(self.len())
    }
}

impl FromStr for Sequence {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_hex_string(s)?;
        let digits = s
            .chars()
            .map(|c| Digit::from_char(c).ok_or(DigitError::InvalidDigit(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { digits })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text: String = self.digits.iter().map(|d| d.to_char()).collect();
        f.pad(&text)
    }
}
