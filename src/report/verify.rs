use log::debug;

use crate::digits::Sequence;
use crate::predicate::{MiddleDigits, middle_digits, prefix_remainder};

/// Number of prefix rows shown when a report is displayed
pub const DISPLAY_LIMIT: usize = 10;

/// One row of the prefix audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixCheck {
    pub k: usize,
    pub prefix: Sequence,
    pub value: u128,
    pub remainder: u128,
    pub expected: u128,
}

impl PrefixCheck {
    fn compute(seq: &Sequence, k: usize) -> Option<Self> {
        Some(Self {
            k,
            prefix: seq.prefix(k)?,
            value: seq.prefix_value(k)?,
            remainder: prefix_remainder(seq, k)?,
            expected: u128::try_from(k.checked_sub(1)?).ok()?,
        })
    }

    pub fn passed(&self) -> bool {
        self.remainder == self.expected
    }
}

/// Audit trail for a sequence: its middle digits, every prefix check and
/// its decimal value. Building a report never changes a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub sequence: Sequence,
    pub middle: MiddleDigits,
    pub checks: Vec<PrefixCheck>,
    pub decimal_value: u128,
}

impl VerificationReport {
    /// Replay the checks over `seq`; `None` for the empty sequence
    pub fn build(seq: &Sequence) -> Option<Self> {
        let middle = middle_digits(seq)?;
        let decimal_value = seq.value()?;
        let checks = (1..=seq.len())
            .map(|k| PrefixCheck::compute(seq, k))
            .collect::<Option<Vec<_>>>()?;

        debug!("Built report for '{}' with {} checks", seq, checks.len());
        Some(Self {
            sequence: seq.clone(),
            middle,
            checks,
            decimal_value,
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Middle-digit rule and every prefix check, not only the displayed ones
    pub fn all_valid(&self) -> bool {
        self.middle.satisfied() && self.checks.iter().all(PrefixCheck::passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &PrefixCheck> {
        self.checks.iter().filter(|check| !check.passed())
    }
}
