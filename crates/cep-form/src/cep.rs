//! CEP (Brazilian postal code) masking and shape check.

use std::sync::LazyLock;

use regex::Regex;

use crate::validator::strip_non_digits;

pub const CEP_DIGITS: usize = 8;

static CEP_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("valid CEP regex"));

/// Strip non-digits and render `DDDDD-DDD` once exactly 8 digits are present.
/// Partial or overlong input stays digits-only.
pub fn mask_cep(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() == CEP_DIGITS {
        let (head, tail) = digits.split_at(5);
        format!("{head}-{tail}")
    } else {
        digits
    }
}

pub fn is_cep_shape(value: &str) -> bool {
    CEP_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_digits_get_hyphenated() {
        assert_eq!(mask_cep("01310100"), "01310-100");
        assert_eq!(mask_cep("01310-100"), "01310-100");
        assert_eq!(mask_cep("01.310 100"), "01310-100");
        assert!(is_cep_shape(&mask_cep("01310100")));
    }

    #[test]
    fn partial_input_stays_digits_only() {
        assert_eq!(mask_cep("0131010"), "0131010");
        assert!(!is_cep_shape(&mask_cep("0131010")));
        assert_eq!(mask_cep("0131-0"), "01310");
    }

    #[test]
    fn overlong_input_fails_shape_check() {
        let masked = mask_cep("013101001");
        assert_eq!(masked, "013101001");
        assert!(!is_cep_shape(&masked));
    }

    #[test]
    fn shape_check_is_anchored() {
        assert!(!is_cep_shape("x01310-100"));
        assert!(!is_cep_shape("01310-1000"));
        assert!(!is_cep_shape("01310100"));
    }
}
