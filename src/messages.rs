//! Message resolution
//!
//! Turns a failed rule into a user-facing string. Lookup order is exactly:
//!
//! 1. `"{field}.{rule}"` override
//! 2. `"{rule}"` override
//! 3. the rule's own template
//! 4. the built-in default table, keyed by rule name
//! 5. the literal `"Validation failed"`
//!
//! Once a template is chosen, `{key}` placeholders are substituted from the
//! rule's parameters; dotted paths (`{range.min}`) descend into nested
//! parameter objects. An unresolved placeholder is left as literal text,
//! never an error.
//!
//! Every failing rule resolves through a [`MessageProvider`] — including
//! required and strict-mode failures — so overrides always take effect.
//!
//! A process-wide active provider backs the plain `validate` call and is
//! replaced wholesale via [`set_active`]; [`validate_with`](crate::foundation::Validate::validate_with)
//! bypasses it entirely for test isolation and concurrent reconfiguration.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\}").unwrap()
});

// ============================================================================
// MESSAGE PROVIDER
// ============================================================================

/// Precedence-based resolver from failed rules to display strings.
///
/// Overrides are keyed by `"rule"` or `"field.rule"`. Providers are cheap to
/// build and immutable once installed as the active instance; reconfiguration
/// is wholesale replacement.
///
/// # Examples
///
/// ```
/// use verdict::messages::MessageProvider;
/// use serde_json::Map;
///
/// let provider = MessageProvider::new()
///     .with_field_message("username", "required", "Please choose a username");
///
/// let message = provider.resolve("required", None, Some("username"), &Map::new());
/// assert_eq!(message, "Please choose a username");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageProvider {
    overrides: HashMap<String, Cow<'static, str>>,
}

impl MessageProvider {
    /// Creates a provider with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule-global override template.
    pub fn set_message(&mut self, rule: impl Into<String>, template: impl Into<Cow<'static, str>>) {
        self.overrides.insert(rule.into(), template.into());
    }

    /// Registers a field-specific override template for `"{field}.{rule}"`.
    pub fn set_field_message(
        &mut self,
        field: &str,
        rule: &str,
        template: impl Into<Cow<'static, str>>,
    ) {
        self.overrides.insert(format!("{field}.{rule}"), template.into());
    }

    /// Registers many overrides at once; keys may be `"rule"` or
    /// `"field.rule"`.
    pub fn set_messages<I, K, T>(&mut self, messages: I)
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Cow<'static, str>>,
    {
        for (key, template) in messages {
            self.overrides.insert(key.into(), template.into());
        }
    }

    /// Chaining form of [`set_message`](Self::set_message).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        rule: impl Into<String>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.set_message(rule, template);
        self
    }

    /// Chaining form of [`set_field_message`](Self::set_field_message).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_message(
        mut self,
        field: &str,
        rule: &str,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.set_field_message(field, rule, template);
        self
    }

    /// Resolves the display message for a failed rule.
    ///
    /// `fallback` is the rule's own template; `field` the node's effective
    /// field name; `params` the rule's template parameters.
    #[must_use]
    pub fn resolve(
        &self,
        rule: &str,
        fallback: Option<&str>,
        field: Option<&str>,
        params: &Map<String, Value>,
    ) -> String {
        let template = field
            .and_then(|f| self.overrides.get(&format!("{f}.{rule}")))
            .or_else(|| self.overrides.get(rule))
            .map(Cow::as_ref)
            .or(fallback)
            .or_else(|| default_template(rule))
            .unwrap_or("Validation failed");
        substitute(template, params)
    }
}

// ============================================================================
// SUBSTITUTION
// ============================================================================

fn substitute(template: &str, params: &Map<String, Value>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match lookup(params, &caps[1]) {
            Some(value) => render(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Walks a dotted path into nested parameter objects.
fn lookup<'a>(params: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = params.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Strings render bare; everything else renders as JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// DEFAULT TABLE
// ============================================================================

fn default_template(rule: &str) -> Option<&'static str> {
    Some(match rule {
        "required" => "This field is required",
        "string" => "Must be a string",
        "number" => "Must be a number",
        "integer" => "Must be an integer",
        "float" => "Must be a number",
        "decimal" => "Must be a decimal number",
        "bigint" => "Must be an integer",
        "boolean" => "Must be true or false",
        "array" => "Must be an array",
        "object" => "Must be an object",
        "date" => "Must be a valid date",
        "datetime" => "Must be a valid date and time",
        "time" => "Must be a valid time",
        "timestamp" => "Must be a valid unix timestamp",
        "timestamp_millis" => "Must be a valid millisecond timestamp",
        "not_empty" => "Must not be empty",
        "min_length" => "Must be at least {min} characters",
        "max_length" => "Must be at most {max} characters",
        "length" => "Must be exactly {length} characters",
        "byte_length" => "Must be between {min} and {max} bytes",
        "min" => "Must be at least {min}",
        "max" => "Must be at most {max}",
        "positive" => "Must be a positive number",
        "negative" => "Must be a negative number",
        "multiple_of" => "Must be a multiple of {factor}",
        "email" => "Must be a valid email address",
        "url" => "Must be a valid URL",
        "uuid" => "Must be a valid UUID",
        "alphanumeric" => "Must contain only letters and numbers",
        "alphabetic" => "Must contain only letters",
        "numeric" => "Must contain only digits",
        "lowercase" => "Must be lowercase",
        "uppercase" => "Must be uppercase",
        "contains" => "Must contain {needle}",
        "starts_with" => "Must start with {prefix}",
        "ends_with" => "Must end with {suffix}",
        "matches" => "Must match the expected pattern",
        "password" => "Password does not meet the strength requirements",
        "one_of" => "Must be one of {choices}",
        "binary" => "Must be base64 or hex encoded binary data",
        "json" => "Must be a valid JSON string",
        "min_items" => "Must contain at least {min} items",
        "max_items" => "Must contain at most {max} items",
        "size" => "Must contain exactly {size} items",
        "each" => "One or more items are invalid",
        "unique" => "Items must be unique",
        "unknown_key" => "Unknown field: {key}",
        "before" => "Must be before {bound}",
        "after" => "Must be after {bound}",
        _ => return None,
    })
}

// ============================================================================
// ACTIVE PROVIDER
// ============================================================================

static ACTIVE: LazyLock<ArcSwap<MessageProvider>> =
    LazyLock::new(|| ArcSwap::from_pointee(MessageProvider::new()));

static PLAIN: LazyLock<MessageProvider> = LazyLock::new(MessageProvider::new);

/// Returns the process-wide active provider.
#[must_use]
pub fn active() -> Arc<MessageProvider> {
    ACTIVE.load_full()
}

/// Replaces the process-wide active provider atomically.
///
/// Intended as a configuration-time operation; in-flight validations keep
/// the provider they loaded.
pub fn set_active(provider: MessageProvider) {
    ACTIVE.store(Arc::new(provider));
}

/// Restores the default, override-free active provider.
pub fn reset_active() {
    set_active(MessageProvider::new());
}

/// An override-free provider for boolean-only evaluation paths.
pub(crate) fn plain() -> &'static MessageProvider {
    &PLAIN
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn test_field_override_wins() {
        let provider = MessageProvider::new()
            .with_message("required", "Global required")
            .with_field_message("username", "required", "Field required");
        let message = provider.resolve("required", Some("Fallback"), Some("username"), &Map::new());
        assert_eq!(message, "Field required");
    }

    #[test]
    fn test_rule_override_beats_fallback() {
        let provider = MessageProvider::new().with_message("required", "Global required");
        let message = provider.resolve("required", Some("Fallback"), Some("other"), &Map::new());
        assert_eq!(message, "Global required");
    }

    #[test]
    fn test_fallback_beats_default_table() {
        let provider = MessageProvider::new();
        let message = provider.resolve("required", Some("Fallback"), None, &Map::new());
        assert_eq!(message, "Fallback");
    }

    #[test]
    fn test_default_table() {
        let provider = MessageProvider::new();
        let message = provider.resolve("required", None, None, &Map::new());
        assert_eq!(message, "This field is required");
    }

    #[test]
    fn test_last_resort_literal() {
        let provider = MessageProvider::new();
        let message = provider.resolve("no_such_rule", None, None, &Map::new());
        assert_eq!(message, "Validation failed");
    }

    #[test]
    fn test_substitution() {
        let provider = MessageProvider::new();
        let message = provider.resolve(
            "x",
            Some("At least {min}, at most {max}"),
            None,
            &params(&[("min", json!(3)), ("max", json!(5))]),
        );
        assert_eq!(message, "At least 3, at most 5");
    }

    #[test]
    fn test_dotted_path_substitution() {
        let provider = MessageProvider::new();
        let message = provider.resolve(
            "x",
            Some("From {range.min} to {range.max}"),
            None,
            &params(&[("range", json!({"min": 1, "max": 9}))]),
        );
        assert_eq!(message, "From 1 to 9");
    }

    #[test]
    fn test_unresolved_placeholder_stays_literal() {
        let provider = MessageProvider::new();
        let message = provider.resolve("x", Some("Value is {missing}"), None, &Map::new());
        assert_eq!(message, "Value is {missing}");
    }

    #[test]
    fn test_string_params_render_bare() {
        let provider = MessageProvider::new();
        let message = provider.resolve(
            "x",
            Some("Got {value}"),
            None,
            &params(&[("value", json!("abc"))]),
        );
        assert_eq!(message, "Got abc");
    }

    #[test]
    fn test_array_params_render_as_json() {
        let provider = MessageProvider::new();
        let message = provider.resolve(
            "one_of",
            None,
            None,
            &params(&[("choices", json!(["a", "b"]))]),
        );
        assert_eq!(message, r#"Must be one of ["a","b"]"#);
    }

    #[test]
    fn test_set_messages_bulk() {
        let mut provider = MessageProvider::new();
        provider.set_messages([
            ("required", "R"),
            ("username.required", "U"),
        ]);
        assert_eq!(provider.resolve("required", None, None, &Map::new()), "R");
        assert_eq!(
            provider.resolve("required", None, Some("username"), &Map::new()),
            "U"
        );
    }

    #[test]
    fn test_active_round_trip() {
        // Uses a rule name no other test touches to stay race-free under
        // parallel test execution.
        set_active(MessageProvider::new().with_message("messages_test_rule", "Replaced"));
        let message = active().resolve("messages_test_rule", None, None, &Map::new());
        assert_eq!(message, "Replaced");
        reset_active();
        let message = active().resolve("messages_test_rule", None, None, &Map::new());
        assert_eq!(message, "Validation failed");
    }
}
