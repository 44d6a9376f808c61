use log::debug;

use crate::digits::Sequence;

/// Remainder of the first `k` digits divided by `k`.
///
/// `None` when `k` is zero or longer than the sequence.
pub fn prefix_remainder(seq: &Sequence, k: usize) -> Option<u128> {
    let value = seq.prefix_value(k)?;
    let modulus = u128::try_from(k).ok()?;
    value.checked_rem(modulus)
}

/// Whether the first `k` digits, read as a base-16 number, leave remainder
/// `k - 1` when divided by `k`
pub fn prefix_valid(seq: &Sequence, k: usize) -> bool {
    if k == 0 || k > seq.len() {
        debug!("Prefix length {} out of range for '{}'", k, seq);
        return false;
    }

    match (prefix_remainder(seq, k), u128::try_from(k - 1)) {
        (Some(remainder), Ok(expected)) => remainder == expected,
        _ => false,
    }
}
