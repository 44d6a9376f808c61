//! Verification report replayed over a finished sequence

mod display;
mod verify;

pub use verify::{DISPLAY_LIMIT, PrefixCheck, VerificationReport};
