//! Object validator
//!
//! [`object()`] seeds an `object` type rule. A populated
//! [`shape`](ObjectValidator::shape) pulls each named property out of the
//! input and runs its child validator with that property name as field
//! context; failing fields land in a field-keyed report, with nested paths
//! joined by dots on each error.
//!
//! Node-level failures (wrong type, required, unknown keys under
//! [`strict`](ObjectValidator::strict)) short the field pass entirely and
//! come back as a flat report: the two shapes never mix within one call.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::foundation::{ErrorMap, Report, Rule, RuleChain, Validate, ValidationError};
use crate::macros::impl_chain_builder;
use crate::messages::MessageProvider;

/// A shape entry: property name plus the validator applied to it.
pub type ShapeEntry = (String, Box<dyn Validate>);

/// Validator for object values, with an optional per-field shape.
pub struct ObjectValidator {
    chain: RuleChain,
    shape: Vec<ShapeEntry>,
    strict: bool,
}

/// Creates an object validator.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let schema = object().shape(shape! {
///     username: string().min(3),
///     age: number().integer().optional(),
/// });
///
/// assert!(schema.test(&json!({"username": "alice", "age": 30})));
/// assert!(!schema.test(&json!({"username": "al"})));
/// ```
#[must_use]
pub fn object() -> ObjectValidator {
    let mut chain = RuleChain::new();
    chain.push(Rule::new("object", Value::is_object).with_template("Must be an object"));
    ObjectValidator {
        chain,
        shape: Vec::new(),
        strict: false,
    }
}

impl ObjectValidator {
    /// Declares the expected properties, usually via the
    /// [`shape!`](crate::shape) macro.
    ///
    /// Entry order is preserved in keyed reports. Absent properties are
    /// passed to their child as absent, so a required child fails them.
    #[must_use = "builder methods must be chained or built"]
    pub fn shape(mut self, entries: Vec<ShapeEntry>) -> Self {
        self.shape = entries;
        self
    }

    /// Rejects input keys that are not declared in the shape.
    ///
    /// Each unknown key is one `unknown_key` error at the node level.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    fn unknown_key_errors(
        &self,
        input: &Map<String, Value>,
        field: Option<&str>,
        messages: &MessageProvider,
    ) -> Vec<ValidationError> {
        input
            .keys()
            .filter(|key| !self.shape.iter().any(|(name, _)| name == *key))
            .map(|key| {
                let mut params = Map::new();
                params.insert("key".to_string(), Value::from(key.as_str()));
                let message =
                    messages.resolve("unknown_key", Some("Unknown field: {key}"), field, &params);
                let mut error = ValidationError::new("unknown_key", message);
                if let Some(field) = field {
                    error = error.with_field(field);
                }
                error
            })
            .collect()
    }
}

/// Rewrites a child's node-level error field into a path rooted at `name`.
///
/// Node-level errors normally already carry the context name; an explicit
/// `field(...)` on the child surfaces as a segment under this entry.
fn node_path(name: &str, inner: Option<&str>) -> String {
    match inner {
        None => name.to_string(),
        Some(f) if f == name => name.to_string(),
        Some(f) => format!("{name}.{f}"),
    }
}

/// Flattens a failing child report into this entry's error list.
///
/// The report shape tells where the errors sit: `Flat` errors belong to the
/// child node itself, `Keyed` errors belong to the child's own shape fields
/// one level down and always get `name.` prefixed onto their path, even when
/// a nested field shares this entry's name.
fn collect_child_errors(name: &str, errors: ErrorMap) -> Vec<ValidationError> {
    match errors {
        ErrorMap::Flat(errors) => errors
            .into_iter()
            .map(|mut error| {
                error.field = Some(node_path(name, error.field.as_deref()));
                error
            })
            .collect(),
        ErrorMap::Keyed(fields) => fields
            .into_values()
            .flatten()
            .map(|mut error| {
                error.field = Some(match error.field.take() {
                    Some(path) => format!("{name}.{path}"),
                    None => name.to_string(),
                });
                error
            })
            .collect(),
    }
}

impl Validate for ObjectValidator {
    fn check(
        &self,
        value: Option<&Value>,
        field: Option<&str>,
        messages: &MessageProvider,
    ) -> Report {
        let eff_field = self.chain.field().or(field);
        let mut errors = self.chain.evaluate(value, field, messages);

        if self.strict && !self.shape.is_empty() {
            if let Some(input) = value.and_then(Value::as_object) {
                errors.extend(self.unknown_key_errors(input, eff_field, messages));
            }
        }

        // Node-level failures suppress the field pass
        if !errors.is_empty() {
            return Report::flat(errors);
        }

        let input = match value.filter(|v| !v.is_null()).and_then(Value::as_object) {
            Some(input) if !self.shape.is_empty() => input,
            _ => return Report::success(),
        };

        let mut failed: IndexMap<String, Vec<ValidationError>> = IndexMap::new();
        for (name, child) in &self.shape {
            let report = child.check(input.get(name.as_str()), Some(name), messages);
            if report.is_valid() {
                continue;
            }
            failed.insert(name.clone(), collect_child_errors(name, report.into_errors()));
        }

        if failed.is_empty() {
            Report::success()
        } else {
            Report::keyed(failed)
        }
    }
}

impl_chain_builder!(ObjectValidator);

impl std::fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("chain", &self.chain)
            .field("shape", &self.shape.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .field("strict", &self.strict)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorMap;
    use crate::validators::{array, number, string};
    use crate::shape;
    use serde_json::json;

    fn user_schema() -> ObjectValidator {
        object().shape(shape! {
            username: string().min(3),
            age: number().integer().optional(),
        })
    }

    #[test]
    fn test_type_rule() {
        assert!(object().test(&json!({})));
        assert!(!object().test(&json!([])));
        assert!(!object().test(&json!("{}")));
    }

    #[test]
    fn test_wrong_type_is_flat() {
        let report = user_schema().validate(&json!("not an object"));
        assert!(!report.is_valid());
        let ErrorMap::Flat(errors) = report.errors() else {
            panic!("expected flat errors");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "object");
    }

    #[test]
    fn test_shape_pass() {
        assert!(user_schema().test(&json!({"username": "alice", "age": 30})));
        // optional field may be absent
        assert!(user_schema().test(&json!({"username": "alice"})));
    }

    #[test]
    fn test_failing_fields_are_keyed() {
        let report = user_schema().validate(&json!({"username": "al", "age": 1.5}));
        assert!(!report.is_valid());

        let ErrorMap::Keyed(fields) = report.errors() else {
            panic!("expected keyed errors");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(report.field_errors("username")[0].rule, "min_length");
        assert_eq!(report.field_errors("age")[0].rule, "integer");
    }

    #[test]
    fn test_passing_fields_are_absent_from_keyed_map() {
        let report = user_schema().validate(&json!({"username": "alice", "age": 1.5}));
        let ErrorMap::Keyed(fields) = report.errors() else {
            panic!("expected keyed errors");
        };
        assert!(!fields.contains_key("username"));
    }

    #[test]
    fn test_missing_required_field() {
        let report = user_schema().validate(&json!({}));
        assert_eq!(report.field_errors("username")[0].rule, "required");
        assert!(report.field_errors("age").is_empty());
    }

    #[test]
    fn test_keyed_order_follows_shape_order() {
        let schema = object().shape(shape! {
            b: string(),
            a: string(),
        });
        let report = schema.validate(&json!({}));
        let ErrorMap::Keyed(fields) = report.errors() else {
            panic!("expected keyed errors");
        };
        let keys: Vec<_> = fields.keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_nested_object_paths() {
        let schema = object().shape(shape! {
            address: object().shape(shape! {
                street: string().min(1),
            }),
        });
        let report = schema.validate(&json!({"address": {"street": ""}}));

        let errors = report.field_errors("address");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("address.street"));
        assert_eq!(errors[0].rule, "min_length");
    }

    #[test]
    fn test_nested_field_sharing_parent_name_keeps_full_path() {
        let schema = object().shape(shape! {
            user: object().shape(shape! {
                user: string(),
            }),
        });
        let report = schema.validate(&json!({"user": {"user": 5}}));

        let errors = report.field_errors("user");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "string");
        assert_eq!(errors[0].field.as_deref(), Some("user.user"));
    }

    #[test]
    fn test_nested_object_wrong_type_path() {
        let schema = object().shape(shape! {
            address: object().shape(shape! {
                street: string(),
            }),
        });
        let report = schema.validate(&json!({"address": 5}));

        let errors = report.field_errors("address");
        assert_eq!(errors[0].rule, "object");
        assert_eq!(errors[0].field.as_deref(), Some("address"));
    }

    #[test]
    fn test_strict_rejects_unknown_keys() {
        let schema = object().strict().shape(shape! {
            name: string(),
        });
        let report = schema.validate(&json!({"name": "ok", "extra": 1, "more": 2}));

        assert!(!report.is_valid());
        let ErrorMap::Flat(errors) = report.errors() else {
            panic!("expected flat errors");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.rule == "unknown_key"));
        assert_eq!(errors[0].message, "Unknown field: extra");
    }

    #[test]
    fn test_non_strict_ignores_unknown_keys() {
        let schema = object().shape(shape! {
            name: string(),
        });
        assert!(schema.test(&json!({"name": "ok", "extra": 1})));
    }

    #[test]
    fn test_unknown_keys_suppress_field_pass() {
        let schema = object().strict().shape(shape! {
            name: string().min(3),
        });
        let report = schema.validate(&json!({"name": "x", "extra": 1}));
        // node-level failure: the short name is not reported this call
        let ErrorMap::Flat(errors) = report.errors() else {
            panic!("expected flat errors");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "unknown_key");
    }

    #[test]
    fn test_shapeless_object_accepts_any_keys() {
        assert!(object().test(&json!({"whatever": 1})));
    }

    #[test]
    fn test_array_field_in_shape() {
        let schema = object().shape(shape! {
            tags: array().min(1).each(string()),
        });
        assert!(schema.test(&json!({"tags": ["a"]})));

        let report = schema.validate(&json!({"tags": []}));
        assert_eq!(report.field_errors("tags")[0].rule, "min_items");
    }

    #[test]
    fn test_string_literal_shape_keys() {
        let schema = object().shape(shape! {
            "first-name": string(),
        });
        let report = schema.validate(&json!({}));
        assert_eq!(report.field_errors("first-name")[0].rule, "required");
    }

    #[test]
    fn test_required_object_null() {
        let report = user_schema().validate(&json!(null));
        let ErrorMap::Flat(errors) = report.errors() else {
            panic!("expected flat errors");
        };
        assert_eq!(errors[0].rule, "required");
    }

    #[test]
    fn test_optional_object_null_passes() {
        assert!(user_schema().optional().test(&json!(null)));
    }
}
