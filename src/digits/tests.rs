use crate::digits::{Digit, DigitError, MAX_SEQUENCE_LEN, Sequence, validate_hex_string};

#[test]
fn test_digit_canonical_order() {
    let symbols: String = Digit::ALL.iter().map(|d| d.to_char()).collect();
    assert_eq!(symbols, "0123456789ABCDEF");
    for (value, digit) in Digit::ALL.iter().enumerate() {
        assert_eq!(usize::from(digit.value()), value);
    }
}

#[test]
fn test_digit_from_char() {
    assert_eq!(Digit::from_char('3'), Some(Digit::THREE));
    assert_eq!(Digit::from_char('b'), Digit::new(11));
    assert_eq!(Digit::from_char('F'), Digit::new(15));
    assert_eq!(Digit::from_char('G'), None);
    assert_eq!(Digit::new(16), None);
}

#[test]
fn test_digit_display_is_uppercase() {
    let digit = Digit::from_char('e');
    assert!(digit.is_some());
    if let Some(d) = digit {
        assert_eq!(format!("{}", d), "E");
    }
}

#[test]
fn test_parse_and_display_sequence() {
    let seq: Result<Sequence, _> = "3323".parse();
    assert!(seq.is_ok());
    if let Ok(seq) = seq {
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.to_string(), "3323");
        assert_eq!(seq.value(), Some(0x3323));
    }

    let lower: Result<Sequence, _> = "3a".parse();
    assert_eq!(lower.map(|s| s.to_string()), Ok("3A".to_string()));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!(
        "".parse::<Sequence>(),
        Err(DigitError::EmptyDigitString)
    );
    assert_eq!(
        "12G4".parse::<Sequence>(),
        Err(DigitError::InvalidDigit('G'))
    );
    let long = "1".repeat(MAX_SEQUENCE_LEN + 1);
    assert_eq!(
        long.parse::<Sequence>(),
        Err(DigitError::TooLong {
            length: MAX_SEQUENCE_LEN + 1,
            max: MAX_SEQUENCE_LEN,
        })
    );
}

#[test]
fn test_validate_hex_string() {
    assert!(validate_hex_string("0").is_ok());
    assert!(validate_hex_string("DEADbeef").is_ok());
    assert!(validate_hex_string("12.4").is_err());
    assert!(validate_hex_string("-1").is_err());
}

#[test]
fn test_prefix_value() {
    let seq: Result<Sequence, _> = "3323".parse();
    assert!(seq.is_ok());
    if let Ok(seq) = seq {
        assert_eq!(seq.prefix_value(1), Some(3));
        assert_eq!(seq.prefix_value(2), Some(51));
        assert_eq!(seq.prefix_value(3), Some(818));
        assert_eq!(seq.prefix_value(4), Some(13091));
        assert_eq!(seq.prefix_value(0), None);
        assert_eq!(seq.prefix_value(5), None);
        assert_eq!(seq.prefix(2).map(|p| p.to_string()), Some("33".to_string()));
    }
}

#[test]
fn test_widest_sequence_fits() {
    let seq: Result<Sequence, _> = "F".repeat(MAX_SEQUENCE_LEN).parse();
    assert_eq!(seq.ok().and_then(|s| s.value()), Some(u128::MAX));
}

#[test]
fn test_empty_sequence_has_no_value() {
    let seq = Sequence::new();
    assert!(seq.is_empty());
    assert_eq!(seq.value(), None);
    assert_eq!(seq.to_string(), "");
}

#[test]
fn test_extended_leaves_original_untouched() {
    let base = Sequence::new().extended(Digit::THREE);
    let longer = base.extended(Digit::ALL[1]);
    assert_eq!(base.to_string(), "3");
    assert_eq!(longer.to_string(), "31");
    assert_eq!(longer.get(1), Digit::new(1));
    assert_eq!(longer.get(2), None);
}

#[test]
fn test_display_honours_width() {
    let seq: Result<Sequence, _> = "33".parse();
    assert_eq!(seq.map(|s| format!("[{:5}]", s)), Ok("[33   ]".to_string()));
}
