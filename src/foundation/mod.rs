//! Core validation types and traits
//!
//! The fundamental building blocks of the engine:
//!
//! - **Traits**: [`Validate`] — the object-safe contract every node implements
//! - **Rules**: [`Rule`], [`RuleChain`] — named predicates and the shared
//!   node core (ordered rules, required flag, field name)
//! - **Results**: [`Report`], [`ErrorMap`] — the structured verdict
//! - **Errors**: [`ValidationError`] (data failures), [`SchemaError`]
//!   (build-time configuration failures)
//!
//! # Architecture
//!
//! A schema is assembled once via chained builder calls; no evaluation
//! happens during assembly. `validate` then walks the tree depth-first: at a
//! leaf every rule runs (no short-circuiting, all failures collected); at an
//! object node the node's own rules run first, then each shape field's child
//! is evaluated against the corresponding property and failures are merged
//! into a field-keyed map; at an array node the node's own rules run,
//! including the single aggregate element check.

pub mod error;
pub mod report;
pub mod rule;
pub mod traits;

pub use error::{SchemaError, ValidationError};
pub use report::{ErrorMap, Report};
pub use rule::{Rule, RuleChain};
pub use traits::Validate;
