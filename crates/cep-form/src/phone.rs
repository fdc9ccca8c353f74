//! Phone number formatting.
//!
//! Input is reduced to digits on every keystroke. A 10 or 11 digit number
//! is re-rendered as `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`; anything else
//! stays digits-only and is reported invalid.

use std::ops::RangeInclusive;

use crate::validator::strip_non_digits;

pub const PHONE_DIGIT_COUNT: RangeInclusive<usize> = 10..=11;

/// Result of processing one phone keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneInput {
    /// Value to write back into the field.
    pub display: String,
    pub digits: String,
    pub is_valid: bool,
}

pub fn format_phone(raw: &str) -> PhoneInput {
    let digits = strip_non_digits(raw);
    match mask_phone(&digits) {
        Some(display) => PhoneInput {
            display,
            digits,
            is_valid: true,
        },
        None => PhoneInput {
            display: digits.clone(),
            digits,
            is_valid: false,
        },
    }
}

/// Apply the display mask to an all-digit string of valid length.
pub fn mask_phone(digits: &str) -> Option<String> {
    if !PHONE_DIGIT_COUNT.contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (area, rest) = digits.split_at(2);
    let (middle, last) = rest.split_at(rest.len() - 4);
    Some(format!("({area}) {middle}-{last}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_use_four_digit_middle_group() {
        let input = format_phone("1133334444");
        assert!(input.is_valid);
        assert_eq!(input.display, "(11) 3333-4444");
    }

    #[test]
    fn eleven_digits_use_five_digit_middle_group() {
        let input = format_phone("11987654321");
        assert!(input.is_valid);
        assert_eq!(input.display, "(11) 98765-4321");
        assert_eq!(input.digits, "11987654321");
    }

    #[test]
    fn separators_typed_by_the_user_are_dropped() {
        let input = format_phone("11 9.8765/4321x");
        assert_eq!(input.display, "(11) 98765-4321");
    }

    #[test]
    fn wrong_digit_count_stays_digits_only() {
        for raw in ["", "1", "113333444", "119876543210", "(11) 3333-44"] {
            let input = format_phone(raw);
            assert!(!input.is_valid, "{raw:?} should be invalid");
            assert_eq!(input.display, strip_non_digits(raw));
        }
    }

    #[test]
    fn formatting_is_idempotent() {
        for digits in ["1133334444", "11987654321"] {
            let first = format_phone(digits).display;
            let second = format_phone(&strip_non_digits(&first)).display;
            assert_eq!(first, second);
            assert_eq!(format_phone(&first).display, first);
        }
    }
}
