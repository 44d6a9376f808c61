//! Pure checks over digit sequences

mod middle;
mod prefix;

pub use middle::{MiddleDigits, middle_digit_valid, middle_digits};
pub use prefix::{prefix_remainder, prefix_valid};

use crate::digits::Sequence;

/// True when the middle-digit rule holds and every prefix satisfies the
/// divisibility rule. The empty sequence is never valid.
pub fn is_valid_sequence(seq: &Sequence) -> bool {
    middle_digit_valid(seq) && (1..=seq.len()).all(|k| prefix_valid(seq, k))
}
