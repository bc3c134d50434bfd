//! Type-agnostic and storage-oriented validators
//!
//! [`any()`] seeds no type rule at all: it accepts every JSON value and only
//! enforces presence plus whatever rules are chained onto it. The remaining
//! constructors cover storage column types whose wire form is a string:
//! big integers, arbitrary-precision decimals, binary payloads, and embedded
//! JSON documents.

use serde_json::Value;

use crate::foundation::{Rule, RuleChain};
use crate::formats;
use crate::macros::{impl_chain_builder, impl_leaf_validate};

/// Validator that accepts any JSON value.
#[derive(Debug)]
pub struct AnyValidator {
    chain: RuleChain,
}

/// Creates a validator with no type rule.
///
/// Useful for presence-only checks and as a carrier for custom rules.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// assert!(any().test(&json!("anything")));
/// assert!(any().test(&json!([1, 2])));
/// assert!(!any().test(&json!(null)));
/// assert!(any().optional().test(&json!(null)));
/// ```
#[must_use]
pub fn any() -> AnyValidator {
    AnyValidator {
        chain: RuleChain::new(),
    }
}

/// Creates a validator from a single named predicate.
///
/// Shorthand for `any().custom(name, predicate)`.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let even = custom("even", |v| v.as_i64().is_some_and(|n| n % 2 == 0));
/// assert!(even.test(&json!(4)));
/// assert!(!even.test(&json!(3)));
/// ```
#[must_use]
pub fn custom<F>(name: &'static str, predicate: F) -> AnyValidator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    any().custom(name, predicate)
}

/// Creates a validator for big integers: a JSON integer, or a string of
/// digits with an optional leading sign.
#[must_use]
pub fn bigint() -> AnyValidator {
    any().rule(
        Rule::new("bigint", |v: &Value| match v {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => formats::is_bigint(s),
            _ => false,
        })
        .with_template("Must be an integer"),
    )
}

/// Creates a validator for decimals: any JSON number, or a string in plain
/// decimal notation.
#[must_use]
pub fn decimal() -> AnyValidator {
    any().rule(
        Rule::new("decimal", |v: &Value| match v {
            Value::Number(_) => true,
            Value::String(s) => formats::is_decimal(s),
            _ => false,
        })
        .with_template("Must be a decimal number"),
    )
}

/// Creates a validator for binary payloads encoded as base64 or hex strings.
#[must_use]
pub fn binary() -> AnyValidator {
    any().rule(
        Rule::new("binary", |v: &Value| {
            v.as_str()
                .map_or(false, |s| formats::is_base64(s) || formats::is_hex(s))
        })
        .with_template("Must be base64 or hex encoded binary data"),
    )
}

/// Creates a validator for blob columns. Alias for [`binary()`].
#[must_use]
pub fn blob() -> AnyValidator {
    binary()
}

/// Creates a validator for strings containing a JSON document.
#[must_use]
pub fn json() -> AnyValidator {
    any().rule(
        Rule::new("json", |v: &Value| {
            v.as_str().map_or(false, formats::is_json)
        })
        .with_template("Must be a valid JSON string"),
    )
}

impl_chain_builder!(AnyValidator);
impl_leaf_validate!(AnyValidator);

// ============================================================================
// TESTS
// ============================================================================
