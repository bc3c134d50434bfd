//! The shared validator contract
//!
//! [`Validate`] is object-safe so that object shapes can hold heterogeneous
//! children as `Box<dyn Validate>`. Implementors provide the single core
//! method [`Validate::check`]; everything else is derived.

use serde_json::Value;

use crate::foundation::Report;
use crate::messages::MessageProvider;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The contract every validator node implements.
///
/// `check` is the core evaluation: it receives the value (`None` for an
/// absent property), the field-name context assigned by an enclosing shape,
/// and the message provider to resolve failure messages with. The convenience
/// methods forward to it.
///
/// Evaluation is synchronous, pure in (node, value, provider), and never
/// mutates the node or the input, so validators may be shared across threads
/// freely.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let validator = string().min(3);
/// assert!(validator.test(&json!("hello")));
/// assert!(!validator.test(&json!("ab")));
/// ```
pub trait Validate: Send + Sync {
    /// Evaluates the node against a possibly absent value.
    ///
    /// `field` is the name assigned by an enclosing shape; a node's own
    /// `field(...)` setting takes precedence over it.
    fn check(
        &self,
        value: Option<&Value>,
        field: Option<&str>,
        messages: &MessageProvider,
    ) -> Report;

    /// Validates a present value using the process-wide active
    /// [`MessageProvider`](crate::messages::MessageProvider).
    fn validate(&self, value: &Value) -> Report {
        self.check(Some(value), None, &crate::messages::active())
    }

    /// Validates a present value against an explicit provider.
    ///
    /// This is the test-isolated path: no global state is read.
    fn validate_with(&self, value: &Value, messages: &MessageProvider) -> Report {
        self.check(Some(value), None, messages)
    }

    /// Convenience wrapper: `validate(value).is_valid()`.
    fn test(&self, value: &Value) -> bool {
        // Message resolution cannot change validity, so the boolean path
        // skips the active provider entirely.
        self.check(Some(value), None, crate::messages::plain()).is_valid()
    }

    /// Boolean check for a possibly absent value.
    fn test_value(&self, value: Option<&Value>) -> bool {
        self.check(value, None, crate::messages::plain()).is_valid()
    }

    /// Boxes the validator for use inside an object shape.
    fn boxed(self) -> Box<dyn Validate>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn check(
        &self,
        value: Option<&Value>,
        field: Option<&str>,
        messages: &MessageProvider,
    ) -> Report {
        (**self).check(value, field, messages)
    }
}

// ============================================================================
// TESTS
// ============================================================================
