//! Macros shared by the validator catalogue.

/// Generates the shared builder surface for a validator type that carries a
/// `chain: RuleChain` field: `required`, `optional`, `field`, `rule`, and
/// `custom`.
macro_rules! impl_chain_builder {
    ($ty:ty) => {
        impl $ty {
            /// Marks the node as required (the default): absent or null input
            /// fails with a single `required` error and runs no other rules.
            #[must_use = "builder methods must be chained or built"]
            pub fn required(mut self) -> Self {
                self.chain.set_required(true);
                self
            }

            /// Marks the node as optional: absent or null input passes and
            /// runs no rules. Present values are unaffected.
            #[must_use = "builder methods must be chained or built"]
            pub fn optional(mut self) -> Self {
                self.chain.set_required(false);
                self
            }

            /// Attaches the field name used as the first key in message
            /// lookup (`"{field}.{rule}"`) and carried on errors.
            #[must_use = "builder methods must be chained or built"]
            pub fn field(mut self, name: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.chain.set_field(name);
                self
            }

            /// Appends a rule to the chain.
            #[must_use = "builder methods must be chained or built"]
            pub fn rule(mut self, rule: $crate::foundation::Rule) -> Self {
                self.chain.push(rule);
                self
            }

            /// Appends a user-supplied predicate as a named rule.
            ///
            /// The predicate may panic; panics propagate to the caller of
            /// `validate`/`test` unmodified.
            #[must_use = "builder methods must be chained or built"]
            pub fn custom<F>(self, name: &'static str, predicate: F) -> Self
            where
                F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
            {
                self.rule($crate::foundation::Rule::new(name, predicate))
            }
        }
    };
}

/// Generates the standard leaf `Validate` impl: evaluate the chain, return a
/// flat report. Object validators implement `Validate` by hand instead.
macro_rules! impl_leaf_validate {
    ($ty:ty) => {
        impl $crate::foundation::Validate for $ty {
            fn check(
                &self,
                value: Option<&serde_json::Value>,
                field: Option<&str>,
                messages: &$crate::messages::MessageProvider,
            ) -> $crate::foundation::Report {
                $crate::foundation::Report::flat(self.chain.evaluate(value, field, messages))
            }
        }
    };
}

pub(crate) use impl_chain_builder;
pub(crate) use impl_leaf_validate;

/// Builds an ordered shape literal for [`object().shape(...)`](crate::validators::object).
///
/// Field names may be identifiers or string literals; values are any
/// validator, boxed automatically.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let schema = object().shape(shape! {
///     name: string().min(1),
///     age: number().optional(),
/// });
/// assert!(schema.test(&json!({"name": "alice"})));
/// ```
#[macro_export]
macro_rules! shape {
    ( $( $field:tt : $validator:expr ),* $(,)? ) => {
        vec![
            $(
                (
                    $crate::shape!(@key $field).to_string(),
                    $crate::foundation::Validate::boxed($validator),
                )
            ),*
        ]
    };
    (@key $field:ident) => { stringify!($field) };
    (@key $field:literal) => { $field };
}
