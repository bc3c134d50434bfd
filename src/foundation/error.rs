//! Error types for validation failures
//!
//! Two kinds of failure live here and must not be confused:
//!
//! - [`ValidationError`] is a *data* failure: a named rule rejected a present
//!   value. It is an ordinary, inspectable value inside a
//!   [`Report`](crate::foundation::Report), never an `Err`.
//! - [`SchemaError`] is a *configuration* failure: a validator was built from
//!   malformed input (a bad regex pattern, an unparseable bound). These fail
//!   at build time, before any value is validated.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed rule with its resolved, parameter-substituted message.
///
/// `rule` is the rule name (`"min_length"`, `"required"`, ...), stable for
/// programmatic handling. `message` has already been routed through the
/// [`MessageProvider`](crate::messages::MessageProvider), so field-specific
/// and global overrides are reflected here. `field` carries the dotted path
/// of the failing field for nested shapes (`"address.zip"`), or `None` for a
/// bare leaf validation.
///
/// # Examples
///
/// ```
/// use verdict::foundation::ValidationError;
///
/// let error = ValidationError::new("required", "This field is required")
///     .with_field("email");
/// assert_eq!(error.field.as_deref(), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the rule that failed.
    pub rule: Cow<'static, str>,

    /// Resolved display message.
    pub message: String,

    /// Dotted field path, when the failure is attached to a named field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error from a rule name and resolved message.
    pub fn new(rule: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Returns true if this error belongs to the given rule.
    #[must_use]
    pub fn is_rule(&self, rule: &str) -> bool {
        self.rule == rule
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.rule, self.message)
        } else {
            write!(f, "{}: {}", self.rule, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// A validator was constructed from malformed configuration.
///
/// Returned by the fallible builder calls (`matches`, `after`, `before`) so
/// that misconfiguration surfaces where the schema is assembled, not when a
/// value is validated.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A regex pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A temporal bound could not be parsed for the node's kind.
    #[error("invalid {kind} bound: `{value}`")]
    Bound {
        /// Which kind of bound was being parsed ("date", "time", ...).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("min_length", "Too short");
        assert_eq!(error.rule, "min_length");
        assert_eq!(error.message, "Too short");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_error_with_field() {
        let error = ValidationError::new("required", "This field is required").with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::new("required", "This field is required").with_field("email");
        assert_eq!(error.to_string(), "[email] required: This field is required");
    }

    #[test]
    fn test_display_without_field() {
        let error = ValidationError::new("min", "Too small");
        assert_eq!(error.to_string(), "min: Too small");
    }

    #[test]
    fn test_zero_alloc_static_rule_names() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.rule, Cow::Borrowed(_)));
    }

    #[test]
    fn test_serialize_skips_absent_field() {
        let error = ValidationError::new("min", "Too small");
        let json = serde_json::to_value(&error).unwrap();
        assert!(json.get("field").is_none());
        assert_eq!(json["rule"], "min");
    }

    #[test]
    fn test_schema_error_display() {
        let error = SchemaError::Bound {
            kind: "date",
            value: "not-a-date".to_string(),
        };
        assert_eq!(error.to_string(), "invalid date bound: `not-a-date`");
    }
}
