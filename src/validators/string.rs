//! String validators
//!
//! [`string()`] seeds a `string` type rule; the builder methods append
//! content rules over the string value. Length is measured in Unicode scalar
//! values; use [`byte_length`](StringValidator::byte_length) for byte
//! counting.
//!
//! Content rules pass vacuously on non-string values so that a wrong-typed
//! input reports the type failure once rather than one error per rule.

use regex::Regex;

use crate::foundation::{Rule, RuleChain, SchemaError};
use crate::formats;
use crate::formats::PasswordOptions;
use crate::macros::{impl_chain_builder, impl_leaf_validate};

/// Validator for string values.
#[derive(Debug)]
pub struct StringValidator {
    chain: RuleChain,
}

/// Creates a string validator.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let username = string().min(3).max(20).alphanumeric();
/// assert!(username.test(&json!("alice")));
/// assert!(!username.test(&json!("a!")));
/// ```
#[must_use]
pub fn string() -> StringValidator {
    StringValidator {
        chain: type_rule_chain(),
    }
}

/// Creates a string validator for long-form text columns.
///
/// Identical to [`string()`]; exists so schemas can mirror storage types.
#[must_use]
pub fn text() -> StringValidator {
    string()
}

/// Creates a string validator with the default password strength rule.
///
/// Use [`string().password(options)`](StringValidator::password) for custom
/// strength options.
#[must_use]
pub fn password() -> StringValidator {
    string().password(PasswordOptions::default())
}

fn type_rule_chain() -> RuleChain {
    let mut chain = RuleChain::new();
    chain.push(
        Rule::new("string", serde_json::Value::is_string).with_template("Must be a string"),
    );
    chain
}

/// Builds a rule over the string content that passes vacuously for
/// non-string values.
fn str_rule<F>(name: &'static str, predicate: F) -> Rule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Rule::new(name, move |v: &serde_json::Value| {
        v.as_str().map_or(true, &predicate)
    })
}

impl StringValidator {
    /// Requires at least `min` characters.
    #[must_use]
    pub fn min(self, min: usize) -> Self {
        self.rule(
            str_rule("min_length", move |s| s.chars().count() >= min)
                .with_template("Must be at least {min} characters")
                .with_param("min", min),
        )
    }

    /// Requires at most `max` characters.
    #[must_use]
    pub fn max(self, max: usize) -> Self {
        self.rule(
            str_rule("max_length", move |s| s.chars().count() <= max)
                .with_template("Must be at most {max} characters")
                .with_param("max", max),
        )
    }

    /// Requires exactly `length` characters.
    #[must_use]
    pub fn length(self, length: usize) -> Self {
        self.rule(
            str_rule("length", move |s| s.chars().count() == length)
                .with_template("Must be exactly {length} characters")
                .with_param("length", length),
        )
    }

    /// Requires a UTF-8 byte length within the inclusive range.
    #[must_use]
    pub fn byte_length(self, min: usize, max: usize) -> Self {
        self.rule(
            str_rule("byte_length", move |s| {
                formats::byte_length(s, min, Some(max))
            })
            .with_template("Must be between {min} and {max} bytes")
            .with_param("min", min)
            .with_param("max", max),
        )
    }

    /// Rejects the empty string.
    #[must_use]
    pub fn not_empty(self) -> Self {
        self.rule(str_rule("not_empty", |s| !s.is_empty()).with_template("Must not be empty"))
    }

    /// Requires the value to match a regular expression.
    ///
    /// A malformed pattern fails here, at build time, never at validate time.
    pub fn matches(self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern)?;
        let shown = pattern.to_string();
        Ok(self.rule(
            str_rule("matches", move |s| regex.is_match(s))
                .with_template("Must match the pattern {pattern}")
                .with_param("pattern", shown),
        ))
    }

    /// Requires email format.
    #[must_use]
    pub fn email(self) -> Self {
        self.rule(str_rule("email", formats::is_email).with_template("Must be a valid email address"))
    }

    /// Requires http(s) URL format.
    #[must_use]
    pub fn url(self) -> Self {
        self.rule(str_rule("url", formats::is_url).with_template("Must be a valid URL"))
    }

    /// Requires hyphenated UUID format.
    #[must_use]
    pub fn uuid(self) -> Self {
        self.rule(str_rule("uuid", formats::is_uuid).with_template("Must be a valid UUID"))
    }

    /// Requires ASCII letters and digits only.
    #[must_use]
    pub fn alphanumeric(self) -> Self {
        self.rule(
            str_rule("alphanumeric", formats::is_alphanumeric)
                .with_template("Must contain only letters and numbers"),
        )
    }

    /// Requires ASCII letters only.
    #[must_use]
    pub fn alphabetic(self) -> Self {
        self.rule(
            str_rule("alphabetic", formats::is_alphabetic)
                .with_template("Must contain only letters"),
        )
    }

    /// Requires ASCII digits only.
    #[must_use]
    pub fn numeric(self) -> Self {
        self.rule(
            str_rule("numeric", formats::is_numeric).with_template("Must contain only digits"),
        )
    }

    /// Requires the value to equal its lowercase form.
    #[must_use]
    pub fn lowercase(self) -> Self {
        self.rule(str_rule("lowercase", formats::is_lowercase).with_template("Must be lowercase"))
    }

    /// Requires the value to equal its uppercase form.
    #[must_use]
    pub fn uppercase(self) -> Self {
        self.rule(str_rule("uppercase", formats::is_uppercase).with_template("Must be uppercase"))
    }

    /// Requires the value to contain a substring.
    #[must_use]
    pub fn contains(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let shown = needle.clone();
        self.rule(
            str_rule("contains", move |s| s.contains(needle.as_str()))
                .with_template("Must contain {needle}")
                .with_param("needle", shown),
        )
    }

    /// Requires the value to start with a prefix.
    #[must_use]
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let shown = prefix.clone();
        self.rule(
            str_rule("starts_with", move |s| s.starts_with(prefix.as_str()))
                .with_template("Must start with {prefix}")
                .with_param("prefix", shown),
        )
    }

    /// Requires the value to end with a suffix.
    #[must_use]
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let shown = suffix.clone();
        self.rule(
            str_rule("ends_with", move |s| s.ends_with(suffix.as_str()))
                .with_template("Must end with {suffix}")
                .with_param("suffix", shown),
        )
    }

    /// Requires password strength per `options`.
    #[must_use]
    pub fn password(self, options: PasswordOptions) -> Self {
        let min_length = options.min_length;
        self.rule(
            str_rule("password", move |s| formats::is_strong_password(s, &options))
                .with_template("Password does not meet the strength requirements")
                .with_param("min_length", min_length),
        )
    }
}

impl_chain_builder!(StringValidator);
impl_leaf_validate!(StringValidator);

// ============================================================================
// TESTS
// ============================================================================
