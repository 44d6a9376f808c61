use crate::digits::{Digit, Sequence};

/// The digit or digits sitting at the centre of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddleDigits {
    /// Odd length: the centre digit and its 0-based index
    Single { index: usize, digit: Digit },
    /// Even length: the two digits either side of the centre
    Pair { left: Digit, right: Digit },
}

impl MiddleDigits {
    /// Odd lengths need the centre digit to be `3`; even lengths need
    /// either of the two centre digits to be `3`.
    pub fn satisfied(self) -> bool {
        match self {
            MiddleDigits::Single { digit, .. } => digit == Digit::THREE,
            MiddleDigits::Pair { left, right } => left == Digit::THREE || right == Digit::THREE,
        }
    }
}

/// `None` for the empty sequence
pub fn middle_digits(seq: &Sequence) -> Option<MiddleDigits> {
    let n = seq.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    if n % 2 == 1 {
        Some(MiddleDigits::Single {
            index: mid,
            digit: seq.get(mid)?,
        })
    } else {
        Some(MiddleDigits::Pair {
            left: seq.get(mid - 1)?,
            right: seq.get(mid)?,
        })
    }
}

/// Checks the middle-digit rule at the sequence's current length
pub fn middle_digit_valid(seq: &Sequence) -> bool {
    middle_digits(seq).is_some_and(MiddleDigits::satisfied)
}
