//! Format-check predicates
//!
//! The flat catalogue of stateless leaf predicates consumed by the string
//! and format validators. Each is a pure `fn(&str, options?) -> bool` with no
//! interaction between predicates.
//!
//! Passing a non-string input is a programmer error, not a data error: the
//! `&str` parameter type makes it unrepresentable at the call site, so a
//! wrong-typed call fails to compile rather than producing a validation
//! failure. The validators bridge dynamic values to `&str` themselves and
//! report wrong primitive kinds through their own type rules.

use std::sync::LazyLock;

use base64::Engine as _;
use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap());

/// Checks email format with a simple but effective pattern.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Checks http(s) URL format.
#[must_use]
pub fn is_url(input: &str) -> bool {
    URL.is_match(input)
}

/// Checks hyphenated UUID format (any version).
#[must_use]
pub fn is_uuid(input: &str) -> bool {
    UUID.is_match(input)
}

/// ASCII letters and digits only; empty input fails.
#[must_use]
pub fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric())
}

/// ASCII letters only; empty input fails.
#[must_use]
pub fn is_alphabetic(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic())
}

/// ASCII digits only; empty input fails.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

/// True when the input equals its lowercase form.
#[must_use]
pub fn is_lowercase(input: &str) -> bool {
    input == input.to_lowercase()
}

/// True when the input equals its uppercase form.
#[must_use]
pub fn is_uppercase(input: &str) -> bool {
    input == input.to_uppercase()
}

/// Hexadecimal digits only; empty input fails.
#[must_use]
pub fn is_hex(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_hexdigit())
}

/// Standard-alphabet base64 with padding.
#[must_use]
pub fn is_base64(input: &str) -> bool {
    base64::engine::general_purpose::STANDARD.decode(input).is_ok()
}

/// Parses as a JSON document.
#[must_use]
pub fn is_json(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input).is_ok()
}

/// An optionally signed, arbitrary-precision integer literal.
#[must_use]
pub fn is_bigint(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// An optionally signed decimal literal (`12`, `-3.5`).
#[must_use]
pub fn is_decimal(input: &str) -> bool {
    DECIMAL.is_match(input)
}

/// Checks the UTF-8 byte length against an inclusive range.
///
/// `max` of `None` means unbounded above.
#[must_use]
pub fn byte_length(input: &str, min: usize, max: Option<usize>) -> bool {
    let len = input.len();
    len >= min && max.map_or(true, |max| len <= max)
}

// ============================================================================
// PASSWORD STRENGTH
// ============================================================================

/// Options for [`is_strong_password`].
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one ASCII digit.
    pub require_digit: bool,
    /// Require at least one non-alphanumeric character.
    pub require_symbol: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: false,
        }
    }
}

/// Checks a password against the given strength options.
#[must_use]
pub fn is_strong_password(input: &str, options: &PasswordOptions) -> bool {
    if input.chars().count() < options.min_length {
        return false;
    }
    if options.require_uppercase && !input.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if options.require_lowercase && !input.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    if options.require_digit && !input.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if options.require_symbol && !input.chars().any(|c| !c.is_alphanumeric()) {
        return false;
    }
    true
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    fn test_is_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_email(input), expected);
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com/path?q=1", true)]
    #[case("ftp://example.com", false)]
    #[case("not a url", false)]
    fn test_is_url(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_url(input), expected);
    }

    #[rstest]
    #[case("550e8400-e29b-41d4-a716-446655440000", true)]
    #[case("550E8400-E29B-41D4-A716-446655440000", true)]
    #[case("550e8400e29b41d4a716446655440000", false)]
    #[case("zzze8400-e29b-41d4-a716-446655440000", false)]
    fn test_is_uuid(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_uuid(input), expected);
    }

    #[rstest]
    #[case("abc123", true)]
    #[case("abc 123", false)]
    #[case("", false)]
    fn test_is_alphanumeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_alphanumeric(input), expected);
    }

    #[rstest]
    #[case("abc", true)]
    #[case("abc1", false)]
    #[case("", false)]
    fn test_is_alphabetic(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_alphabetic(input), expected);
    }

    #[rstest]
    #[case("0123", true)]
    #[case("12a", false)]
    #[case("", false)]
    fn test_is_numeric(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_numeric(input), expected);
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_lowercase("hello 123"));
        assert!(!is_lowercase("Hello"));
        assert!(is_uppercase("HELLO 123"));
        assert!(!is_uppercase("Hello"));
    }

    #[rstest]
    #[case("deadBEEF01", true)]
    #[case("xyz", false)]
    #[case("", false)]
    fn test_is_hex(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_hex(input), expected);
    }

    #[test]
    fn test_is_base64() {
        assert!(is_base64("aGVsbG8="));
        assert!(!is_base64("not base64!!"));
    }

    #[rstest]
    #[case(r#"{"a": [1, 2]}"#, true)]
    #[case("[1, 2, 3]", true)]
    #[case("{broken", false)]
    fn test_is_json(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_json(input), expected);
    }

    #[rstest]
    #[case("12345678901234567890123456789", true)]
    #[case("-42", true)]
    #[case("+7", true)]
    #[case("12.5", false)]
    #[case("-", false)]
    #[case("", false)]
    fn test_is_bigint(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_bigint(input), expected);
    }

    #[rstest]
    #[case("3.14", true)]
    #[case("-0.5", true)]
    #[case("12", true)]
    #[case("1.", false)]
    #[case(".5", false)]
    fn test_is_decimal(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_decimal(input), expected);
    }

    #[test]
    fn test_byte_length() {
        assert!(byte_length("hello", 1, Some(5)));
        assert!(!byte_length("hello!", 1, Some(5)));
        assert!(byte_length("hello", 5, None));
        // multi-byte characters count as bytes, not chars
        assert!(!byte_length("h\u{e9}llo", 1, Some(5)));
    }

    #[test]
    fn test_password_defaults() {
        let options = PasswordOptions::default();
        assert!(is_strong_password("Str0ngpass", &options));
        assert!(!is_strong_password("short1A", &options));
        assert!(!is_strong_password("nouppercase1", &options));
        assert!(!is_strong_password("NODIGITSHERE", &options));
    }

    #[test]
    fn test_password_symbol_requirement() {
        let options = PasswordOptions {
            require_symbol: true,
            ..PasswordOptions::default()
        };
        assert!(!is_strong_password("Str0ngpass", &options));
        assert!(is_strong_password("Str0ngpass!", &options));
    }
}
