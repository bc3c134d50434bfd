//! Boolean validator

use serde_json::Value;

use crate::foundation::{Rule, RuleChain};
use crate::macros::{impl_chain_builder, impl_leaf_validate};

/// Validator for boolean values.
#[derive(Debug)]
pub struct BooleanValidator {
    chain: RuleChain,
}

/// Creates a boolean validator.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// assert!(boolean().test(&json!(true)));
/// assert!(!boolean().test(&json!("true")));
/// ```
#[must_use]
pub fn boolean() -> BooleanValidator {
    let mut chain = RuleChain::new();
    chain.push(Rule::new("boolean", Value::is_boolean).with_template("Must be true or false"));
    BooleanValidator { chain }
}

impl BooleanValidator {
    /// Requires the value to be exactly `true`.
    #[must_use]
    pub fn is_true(self) -> Self {
        self.rule(
            Rule::new("is_true", |v: &Value| v.as_bool().map_or(true, |b| b))
                .with_template("Must be true"),
        )
    }

    /// Requires the value to be exactly `false`.
    #[must_use]
    pub fn is_false(self) -> Self {
        self.rule(
            Rule::new("is_false", |v: &Value| v.as_bool().map_or(true, |b| !b))
                .with_template("Must be false"),
        )
    }
}

impl_chain_builder!(BooleanValidator);
impl_leaf_validate!(BooleanValidator);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_type_rule() {
        assert!(boolean().test(&json!(false)));
        assert!(!boolean().test(&json!(0)));
        assert!(!boolean().test(&json!("false")));
    }

    #[test]
    fn test_is_true() {
        assert!(boolean().is_true().test(&json!(true)));
        assert!(!boolean().is_true().test(&json!(false)));
    }

    #[test]
    fn test_is_false() {
        assert!(boolean().is_false().test(&json!(false)));
        assert!(!boolean().is_false().test(&json!(true)));
    }

    #[test]
    fn test_required_null() {
        assert!(!boolean().test(&json!(null)));
        assert!(boolean().optional().test(&json!(null)));
    }
}
