use std::fmt;

/// One base-16 digit, stored as its value `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// The digit required at the middle of a valid sequence
    pub const THREE: Digit = Digit(3);

    /// All sixteen digits in canonical order, `0` through `F`
    pub const ALL: [Digit; 16] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
        Digit(10),
        Digit(11),
        Digit(12),
        Digit(13),
        Digit(14),
        Digit(15),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value < 16).then_some(Self(value))
    }

    /// Accepts `0`-`9`, `A`-`F` and `a`-`f`
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(16)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Uppercase symbol for this digit
    pub fn to_char(self) -> char {
        char::from_digit(u32::from(self.0), 16)
            .map_or('?', |c| c.to_ascii_uppercase())
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
