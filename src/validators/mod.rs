//! The validator catalogue
//!
//! Each submodule provides free-function constructors returning a builder
//! over a shared rule chain. All nodes are required by default; chain
//! `.optional()` to accept absent or null input.

pub mod any;
pub mod array;
pub mod boolean;
pub mod enumeration;
pub mod number;
pub mod object;
pub mod string;
pub mod temporal;

pub use any::{any, bigint, binary, blob, custom, decimal, json, AnyValidator};
pub use array::{array, ArrayValidator};
pub use boolean::{boolean, BooleanValidator};
pub use enumeration::{one_of, EnumValidator};
pub use number::{float, integer, number, NumberValidator};
pub use object::{object, ObjectValidator, ShapeEntry};
pub use string::{password, string, text, StringValidator};
pub use temporal::{
    date, datetime, time, timestamp, timestamp_millis, TemporalValidator,
};
