//! Numeric validators
//!
//! [`number()`] seeds a `number` type rule; range and property rules operate
//! on the `f64` view of the value and pass vacuously on non-numbers.

use serde_json::Value;

use crate::foundation::{Rule, RuleChain};
use crate::macros::{impl_chain_builder, impl_leaf_validate};

const MULTIPLE_EPSILON: f64 = 1e-9;

/// Validator for numeric values.
#[derive(Debug)]
pub struct NumberValidator {
    chain: RuleChain,
}

/// Creates a number validator.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let age = number().integer().min(0.0).max(130.0);
/// assert!(age.test(&json!(42)));
/// assert!(!age.test(&json!(5.5)));
/// ```
#[must_use]
pub fn number() -> NumberValidator {
    let mut chain = RuleChain::new();
    chain.push(Rule::new("number", Value::is_number).with_template("Must be a number"));
    NumberValidator { chain }
}

/// Creates a number validator that additionally requires an integral value.
#[must_use]
pub fn integer() -> NumberValidator {
    number().integer()
}

/// Creates a number validator for floating-point columns.
///
/// Identical to [`number()`]; exists so schemas can mirror storage types.
#[must_use]
pub fn float() -> NumberValidator {
    number()
}

/// Builds a rule over the `f64` view that passes vacuously for non-numbers.
fn num_rule<F>(name: &'static str, predicate: F) -> Rule
where
    F: Fn(f64) -> bool + Send + Sync + 'static,
{
    Rule::new(name, move |v: &Value| v.as_f64().map_or(true, &predicate))
}

impl NumberValidator {
    /// Requires an integral value. `5` and `5.0` pass, `5.5` fails.
    #[must_use]
    pub fn integer(self) -> Self {
        self.rule(
            Rule::new("integer", |v: &Value| match v {
                Value::Number(n) => {
                    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
                }
                _ => true,
            })
            .with_template("Must be an integer"),
        )
    }

    /// Requires `value >= min`.
    #[must_use]
    pub fn min(self, min: f64) -> Self {
        self.rule(
            num_rule("min", move |n| n >= min)
                .with_template("Must be at least {min}")
                .with_param("min", min),
        )
    }

    /// Requires `value <= max`.
    #[must_use]
    pub fn max(self, max: f64) -> Self {
        self.rule(
            num_rule("max", move |n| n <= max)
                .with_template("Must be at most {max}")
                .with_param("max", max),
        )
    }

    /// Requires `value > 0`.
    #[must_use]
    pub fn positive(self) -> Self {
        self.rule(num_rule("positive", |n| n > 0.0).with_template("Must be a positive number"))
    }

    /// Requires `value < 0`.
    #[must_use]
    pub fn negative(self) -> Self {
        self.rule(num_rule("negative", |n| n < 0.0).with_template("Must be a negative number"))
    }

    /// Requires the value to be a multiple of `factor`.
    #[must_use]
    pub fn multiple_of(self, factor: f64) -> Self {
        self.rule(
            num_rule("multiple_of", move |n| {
                let remainder = (n % factor).abs();
                remainder < MULTIPLE_EPSILON || (factor.abs() - remainder) < MULTIPLE_EPSILON
            })
            .with_template("Must be a multiple of {factor}")
            .with_param("factor", factor),
        )
    }
}

impl_chain_builder!(NumberValidator);
impl_leaf_validate!(NumberValidator);

// ============================================================================
// TESTS
// ============================================================================
