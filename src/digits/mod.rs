//! Hexadecimal digit model split into submodules

mod digit;
mod errors;
mod sequence;
mod validation;

pub use digit::Digit;
pub use errors::DigitError;
pub use sequence::{MAX_SEQUENCE_LEN, Sequence};
pub use validation::validate_hex_string;

#[cfg(test)]
mod tests;
