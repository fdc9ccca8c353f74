//! Pure field predicates.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Drop every character that is not an ASCII digit.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `local@domain.tld` with a top-level segment of at least two letters.
/// The whole value must match; surrounding whitespace makes it invalid.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(strip_non_digits("(11) 9 8765-4321"), "11987654321");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits("０１"), "");
    }

    #[test]
    fn non_empty_ignores_whitespace() {
        assert!(is_non_empty("Ana"));
        assert!(is_non_empty("  Ana "));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty(" \t\n"));
    }

    #[test]
    fn email_accepts_common_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("ana.maria+news@mail.example.com.br"));
        assert!(is_valid_email("a_b%c-d@host-1.io"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@example.c"));
        assert!(!is_valid_email("ana@example.c0m"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(" ana@example.com"));
        assert!(!is_valid_email("ana@exa mple.com"));
    }
}
