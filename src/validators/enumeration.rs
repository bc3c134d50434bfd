//! Enum validator
//!
//! [`one_of`] accepts a closed set of allowed values. Choices are arbitrary
//! JSON values, so string enums, numeric enums, and mixed sets all work.

use serde_json::Value;

use crate::foundation::{Rule, RuleChain};
use crate::macros::{impl_chain_builder, impl_leaf_validate};

/// Validator restricting a value to a closed set of choices.
#[derive(Debug)]
pub struct EnumValidator {
    chain: RuleChain,
}

/// Creates an enum validator from the allowed choices.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let role = one_of(["admin", "editor", "viewer"]);
/// assert!(role.test(&json!("editor")));
/// assert!(!role.test(&json!("root")));
/// ```
#[must_use]
pub fn one_of<I, V>(choices: I) -> EnumValidator
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let choices: Vec<Value> = choices.into_iter().map(Into::into).collect();
    let shown = Value::Array(choices.clone());
    let mut chain = RuleChain::new();
    chain.push(
        Rule::new("one_of", move |v: &Value| choices.contains(v))
            .with_template("Must be one of {choices}")
            .with_param("choices", shown),
    );
    EnumValidator { chain }
}

impl_chain_builder!(EnumValidator);
impl_leaf_validate!(EnumValidator);
