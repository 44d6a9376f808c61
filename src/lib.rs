//! Hexpuzzle - find the longest hexadecimal number whose every prefix of
//! length k leaves remainder k - 1 when divided by k, and whose middle digit
//! is 3.
//!
//! The search is an exhaustive depth-first walk over digit strings, pruned
//! as soon as the newest prefix or the middle digit breaks a rule.

pub mod digits;
pub mod predicate;
pub mod report;
pub mod solver;

// Re-export the main public API
pub use digits::{Digit, DigitError, Sequence, validate_hex_string};
pub use predicate::{is_valid_sequence, middle_digit_valid, prefix_valid};
pub use report::VerificationReport;
pub use solver::{HexSolver, SearchConfig, SearchOutcome, SolverError};

/// Check a hexadecimal digit string against both rules
///
/// # Errors
///
/// Returns an error if the string is empty, too long, or contains a
/// character that is not a hexadecimal digit.
///
/// # Examples
///
/// ```
/// use hexpuzzle::is_valid_number;
///
/// assert_eq!(is_valid_number("3"), Ok(true));
/// assert_eq!(is_valid_number("30"), Ok(false));
/// ```
pub fn is_valid_number(hex: &str) -> Result<bool, DigitError> {
    let seq: Sequence = hex.parse()?;
    Ok(is_valid_sequence(&seq))
}

/// Run the search with the default 20-digit limit and return the best
/// sequence, or `None` if nothing valid exists
///
/// # Examples
///
/// ```
/// use hexpuzzle::solve_hex_puzzle;
///
/// match solve_hex_puzzle() {
///     Some(best) => println!("Best solution found: {}", best),
///     None => println!("No solution found!"),
/// }
/// ```
pub fn solve_hex_puzzle() -> Option<Sequence> {
    HexSolver::default().find_longest().into_solution()
}
