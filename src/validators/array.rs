//! Array validator
//!
//! [`array()`] seeds an `array` type rule; size rules count elements and pass
//! vacuously on non-arrays. [`each`](ArrayValidator::each) applies a child
//! validator to every element and reports a single aggregate error when any
//! element fails; [`unique`](ArrayValidator::unique) rejects duplicate
//! elements by structural equality.

use std::collections::HashSet;

use serde_json::Value;

use crate::foundation::{Rule, RuleChain, Validate};
use crate::macros::{impl_chain_builder, impl_leaf_validate};

/// Validator for array values.
#[derive(Debug)]
pub struct ArrayValidator {
    chain: RuleChain,
}

/// Creates an array validator.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let tags = array().min(1).each(string().not_empty());
/// assert!(tags.test(&json!(["rust", "validation"])));
/// assert!(!tags.test(&json!([])));
/// assert!(!tags.test(&json!(["ok", ""])));
/// ```
#[must_use]
pub fn array() -> ArrayValidator {
    let mut chain = RuleChain::new();
    chain.push(Rule::new("array", Value::is_array).with_template("Must be an array"));
    ArrayValidator { chain }
}

/// Builds a rule over the element list that passes vacuously for non-arrays.
fn items_rule<F>(name: &'static str, predicate: F) -> Rule
where
    F: Fn(&[Value]) -> bool + Send + Sync + 'static,
{
    Rule::new(name, move |v: &Value| {
        v.as_array().map_or(true, |items| predicate(items))
    })
}

impl ArrayValidator {
    /// Requires at least `min` elements.
    #[must_use]
    pub fn min(self, min: usize) -> Self {
        self.rule(
            items_rule("min_items", move |items| items.len() >= min)
                .with_template("Must contain at least {min} items")
                .with_param("min", min),
        )
    }

    /// Requires at most `max` elements.
    #[must_use]
    pub fn max(self, max: usize) -> Self {
        self.rule(
            items_rule("max_items", move |items| items.len() <= max)
                .with_template("Must contain at most {max} items")
                .with_param("max", max),
        )
    }

    /// Requires exactly `size` elements.
    #[must_use]
    pub fn length(self, size: usize) -> Self {
        self.rule(
            items_rule("size", move |items| items.len() == size)
                .with_template("Must contain exactly {size} items")
                .with_param("size", size),
        )
    }

    /// Applies `item` to every element.
    ///
    /// Any failing element fails the whole rule with one aggregate error;
    /// per-element reports are not surfaced. The child validator's required
    /// flag applies to each element, so a null element fails a required child.
    #[must_use]
    pub fn each<V: Validate + 'static>(self, item: V) -> Self {
        self.rule(
            Rule::new("each", move |v: &Value| {
                v.as_array().map_or(true, |items| {
                    items.iter().all(|element| item.test_value(Some(element)))
                })
            })
            .with_template("One or more items are invalid"),
        )
    }

    /// Rejects duplicate elements, compared by structural equality.
    #[must_use]
    pub fn unique(self) -> Self {
        self.rule(
            items_rule("unique", |items| {
                // serde_json objects keep sorted keys, so the serialized text
                // is a canonical identity for each element
                let mut seen = HashSet::with_capacity(items.len());
                items.iter().all(|element| seen.insert(element.to_string()))
            })
            .with_template("Items must be unique"),
        )
    }
}

impl_chain_builder!(ArrayValidator);
impl_leaf_validate!(ArrayValidator);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{number, string};
    use serde_json::json;

    #[test]
    fn test_type_rule() {
        assert!(array().test(&json!([])));
        assert!(array().test(&json!([1, "a"])));
        assert!(!array().test(&json!("[]")));
        assert!(!array().test(&json!({})));
    }

    #[test]
    fn test_min_max() {
        let validator = array().min(1).max(3);
        assert!(validator.test(&json!([1])));
        assert!(validator.test(&json!([1, 2, 3])));
        assert!(!validator.test(&json!([])));
        assert!(!validator.test(&json!([1, 2, 3, 4])));
    }

    #[test]
    fn test_length() {
        let validator = array().length(2);
        assert!(validator.test(&json!([1, 2])));
        assert!(!validator.test(&json!([1])));
    }

    #[test]
    fn test_wrong_type_reports_only_type_rule() {
        let report = array().min(1).validate(&json!("nope"));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.iter().next().unwrap().rule, "array");
    }

    #[test]
    fn test_each() {
        let validator = array().each(number().min(0.0));
        assert!(validator.test(&json!([1, 2, 3])));
        assert!(!validator.test(&json!([1, -2, 3])));
        assert!(validator.test(&json!([])));
    }

    #[test]
    fn test_each_single_aggregate_error() {
        let report = array().each(number()).validate(&json!(["a", "b", "c"]));
        assert_eq!(report.error_count(), 1);
        let error = report.iter().next().unwrap();
        assert_eq!(error.rule, "each");
        assert_eq!(error.message, "One or more items are invalid");
    }

    #[test]
    fn test_each_null_element_fails_required_child() {
        let required = array().each(string());
        assert!(!required.test(&json!(["a", null])));

        let optional = array().each(string().optional());
        assert!(optional.test(&json!(["a", null])));
    }

    #[test]
    fn test_unique() {
        assert!(array().unique().test(&json!([1, 2, 3])));
        assert!(!array().unique().test(&json!([1, 2, 1])));
        assert!(array().unique().test(&json!([])));
    }

    #[test]
    fn test_unique_structural_equality_for_objects() {
        let validator = array().unique();
        assert!(!validator.test(&json!([{"a": 1, "b": 2}, {"b": 2, "a": 1}])));
        assert!(validator.test(&json!([{"a": 1}, {"a": 2}])));
    }

    #[test]
    fn test_unique_distinguishes_types() {
        // 1 and "1" are different values
        assert!(array().unique().test(&json!([1, "1"])));
    }

    #[test]
    fn test_required_and_optional() {
        assert!(!array().test(&json!(null)));
        assert!(array().optional().test(&json!(null)));
    }
}
