//! Rules and rule chains
//!
//! A [`Rule`] is a named predicate over a dynamic value plus the message
//! template and parameters used when it fails. A [`RuleChain`] is the shared
//! core of every validator node: an ordered rule list, the required flag, and
//! an optional field name.
//!
//! Evaluation never short-circuits: every rule runs against a present value
//! and every failure is collected, so a value failing m of k rules yields
//! exactly m errors, in rule declaration order.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::foundation::ValidationError;
use crate::messages::MessageProvider;

type Predicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

// ============================================================================
// RULE
// ============================================================================

/// A named predicate with its failure message template and parameters.
///
/// Immutable once appended to a chain. Built-in rules are total over
/// `&Value` and never panic; a rule that needs to signal "wrong primitive
/// type" fails instead of panicking. User-supplied predicates may panic, and
/// such panics propagate to the caller of `validate`/`test` unmodified.
///
/// # Examples
///
/// ```
/// use verdict::foundation::Rule;
/// use serde_json::json;
///
/// let rule = Rule::new("even", |v| v.as_i64().is_some_and(|n| n % 2 == 0))
///     .with_template("Must be an even number");
/// assert!(rule.check(&json!(4)));
/// assert!(!rule.check(&json!(3)));
/// ```
pub struct Rule {
    name: Cow<'static, str>,
    template: Option<Cow<'static, str>>,
    params: Map<String, Value>,
    predicate: Predicate,
}

impl Rule {
    /// Creates a rule from a name and predicate, with no template of its own.
    ///
    /// Without a template, a failure falls through to the provider's override
    /// chain and built-in default table.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            template: None,
            params: Map::new(),
            predicate: Box::new(predicate),
        }
    }

    /// Sets the rule's fallback message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Adds a template parameter, available as `{key}` during substitution.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The rule name, used for message lookup and carried on errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule's own message template, if any.
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// The rule's template parameters.
    #[must_use]
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Runs the predicate against a present value.
    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("template", &self.template)
            .field("params", &self.params)
            .field("predicate", &"<fn>")
            .finish()
    }
}

// ============================================================================
// RULE CHAIN
// ============================================================================

/// The shared core of a validator node.
///
/// Holds the ordered rule list, the required/optional flag (required by
/// default, for every node kind), and the optional field name used as the
/// first key in message lookup.
#[derive(Debug)]
pub struct RuleChain {
    rules: SmallVec<[Rule; 4]>,
    required: bool,
    field: Option<Cow<'static, str>>,
}

impl RuleChain {
    /// Creates an empty chain. Nodes are required by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: SmallVec::new(),
            required: true,
            field: None,
        }
    }

    /// Appends a rule. Declaration order is evaluation and message order.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Sets the required flag.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Attaches the field name used for message lookup and error paths.
    pub fn set_field(&mut self, name: impl Into<Cow<'static, str>>) {
        self.field = Some(name.into());
    }

    /// Whether absent/null input fails with a required error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The explicitly attached field name, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The rules appended so far, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates the chain.
    ///
    /// `value` is `None` when the input property was absent; JSON null is
    /// treated the same way. On the absent branch no rules run: a required
    /// chain yields exactly one `required` error, an optional chain yields
    /// none. A present value is run through every rule; each failure resolves
    /// its display message through `messages`.
    ///
    /// An explicitly attached field name takes precedence over the `field`
    /// context passed by an enclosing shape.
    #[must_use]
    pub fn evaluate(
        &self,
        value: Option<&Value>,
        field: Option<&str>,
        messages: &MessageProvider,
    ) -> Vec<ValidationError> {
        let field = self.field.as_deref().or(field);

        let Some(value) = value.filter(|v| !v.is_null()) else {
            if self.required {
                let message = messages.resolve("required", None, field, &Map::new());
                let mut error = ValidationError::new("required", message);
                if let Some(field) = field {
                    error = error.with_field(field);
                }
                return vec![error];
            }
            return Vec::new();
        };

        let mut errors = Vec::new();
        for rule in &self.rules {
            if rule.check(value) {
                continue;
            }
            let message = messages.resolve(&rule.name, rule.template(), field, &rule.params);
            let mut error = ValidationError::new(rule.name.clone(), message);
            if let Some(field) = field {
                error = error.with_field(field);
            }
            errors.push(error);
        }
        errors
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
