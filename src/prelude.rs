//! Convenience re-exports for building and running schemas.
//!
//! ```
//! use verdict::prelude::*;
//! use serde_json::json;
//!
//! let schema = object().shape(shape! {
//!     email: string().email(),
//! });
//! assert!(schema.test(&json!({"email": "a@b.co"})));
//! ```

pub use crate::foundation::{ErrorMap, Report, Rule, SchemaError, Validate, ValidationError};
pub use crate::formats::PasswordOptions;
pub use crate::messages::MessageProvider;
pub use crate::shape;
pub use crate::validators::{
    any, array, bigint, binary, blob, boolean, custom, date, datetime, decimal, float, integer,
    json, number, object, one_of, password, string, text, time, timestamp, timestamp_millis,
};
