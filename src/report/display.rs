use std::fmt;

use crate::predicate::MiddleDigits;
use crate::report::verify::{DISPLAY_LIMIT, PrefixCheck, VerificationReport};

fn mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}

impl fmt::Display for PrefixCheck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "k={:2}: {:10} = {:8}, {} mod {} = {} (expected {}) {}",
            self.k,
            self.prefix,
            self.value,
            self.value,
            self.k,
            self.remainder,
            self.expected,
            mark(self.passed())
        )
    }
}

impl fmt::Display for MiddleDigits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MiddleDigits::Single { index, digit } => {
                write!(f, "Middle digit (position {}): {}", index + 1, digit)
            }
            MiddleDigits::Pair { left, right } => write!(f, "Middle digits: {}{}", left, right),
        }
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Verifying solution: {}", self.sequence)?;
        writeln!(f, "Length: {}", self.len())?;
        writeln!(f, "{}", self.middle)?;

        writeln!(f)?;
        writeln!(f, "Prefix checks:")?;
        for check in self.checks.iter().take(DISPLAY_LIMIT) {
            writeln!(f, "{}", check)?;
        }
        if self.checks.len() > DISPLAY_LIMIT {
            writeln!(
                f,
                "... (showing first {} of {} checks)",
                DISPLAY_LIMIT,
                self.checks.len()
            )?;
        }

        writeln!(f)?;
        write!(f, "Decimal value: {}", self.decimal_value)
    }
}
