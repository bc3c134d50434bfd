//! # verdict
//!
//! Composable validation for dynamic JSON values.
//!
//! Schemas are trees of validator nodes built with free-function
//! constructors and chained rules. Evaluation never short-circuits: every
//! rule in a chain runs and every failure is collected, so one call reports
//! everything wrong with a value at once.
//!
//! ## Quick start
//!
//! ```
//! use verdict::prelude::*;
//! use serde_json::json;
//!
//! let schema = object().shape(shape! {
//!     username: string().min(3).max(20).alphanumeric(),
//!     email: string().email(),
//!     age: number().integer().min(13.0).optional(),
//! });
//!
//! let report = schema.validate(&json!({
//!     "username": "al",
//!     "email": "not-an-email",
//! }));
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.field_errors("username")[0].rule, "min_length");
//! assert_eq!(report.field_errors("email")[0].rule, "email");
//! ```
//!
//! ## Concepts
//!
//! - Every node is **required by default**; chain [`optional()`] to accept
//!   absent input. JSON `null` is treated as absent.
//! - A wrong-typed value fails its node's **type rule** exactly once;
//!   content rules pass vacuously instead of piling on.
//! - Leaf and array failures come back **flat**; object shapes come back
//!   **keyed by field name**, with nested paths dotted on each error
//!   (`"address.zip"`).
//! - Failure messages resolve through a [`MessageProvider`]: field-specific
//!   overrides, then rule overrides, then the rule's own template, then a
//!   built-in default table. `{placeholder}` parameters are substituted into
//!   whichever template wins.
//!
//! Misconfigured schemas (a bad regex, an unparseable date bound) fail at
//! build time with a [`SchemaError`], never at validate time.
//!
//! [`optional()`]: validators::StringValidator::optional
//! [`MessageProvider`]: messages::MessageProvider
//! [`SchemaError`]: foundation::SchemaError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod formats;
pub mod foundation;
pub mod messages;
pub mod prelude;
pub mod validators;

mod macros;

pub use foundation::{ErrorMap, Report, Rule, RuleChain, SchemaError, Validate, ValidationError};
pub use messages::MessageProvider;
