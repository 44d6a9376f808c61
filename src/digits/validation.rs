use log::{debug, warn};

use crate::digits::errors::DigitError;
use crate::digits::sequence::MAX_SEQUENCE_LEN;

/// # Errors
///
/// Returns an error if the string is empty, longer than [`MAX_SEQUENCE_LEN`],
/// or contains a character that is not a hexadecimal digit.
pub fn validate_hex_string(hex_string: &str) -> Result<(), DigitError> {
    debug!("Validating hex string: '{}'", hex_string);

    if hex_string.is_empty() {
        warn!("Hex string is empty");
        return Err(DigitError::EmptyDigitString);
    }

    if let Some(bad) = hex_string.chars().find(|c| !c.is_ascii_hexdigit()) {
        warn!("Hex string '{}' contains '{}'", hex_string, bad);
        return Err(DigitError::InvalidDigit(bad));
    }

    let length = hex_string.len();
    if length > MAX_SEQUENCE_LEN {
        warn!("Hex string has {} digits", length);
        return Err(DigitError::TooLong {
            length,
            max: MAX_SEQUENCE_LEN,
        });
    }

    debug!("Hex string validation successful");
    Ok(())
}
