use thiserror::Error;

/// Errors that can occur when reading hexadecimal digit strings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigitError {
    #[error("Digit string cannot be empty")]
    EmptyDigitString,
    #[error("Not a hexadecimal digit: '{0}'")]
    InvalidDigit(char),
    #[error("Digit string too long: {length} digits (maximum {max})")]
    TooLong { length: usize, max: usize },
}
