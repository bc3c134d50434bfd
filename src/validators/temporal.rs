//! Date and time validators
//!
//! Each constructor seeds a type rule for its textual or numeric format:
//!
//! - [`date()`] — `YYYY-MM-DD` strings
//! - [`datetime()`] — RFC 3339, or `YYYY-MM-DD HH:MM:SS` with `T` or space
//! - [`time()`] — `HH:MM:SS` or `HH:MM` strings
//! - [`timestamp()`] / [`timestamp_millis()`] — integer unix epochs within
//!   chrono's representable range
//!
//! [`after`](TemporalValidator::after) and
//! [`before`](TemporalValidator::before) compare values on a per-kind
//! ordinal (seconds for calendar kinds, seconds-from-midnight for times),
//! with the bound parsed at build time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::Value;

use crate::foundation::{Rule, RuleChain, SchemaError};
use crate::macros::{impl_chain_builder, impl_leaf_validate};

/// Which temporal format a [`TemporalValidator`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemporalKind {
    Date,
    DateTime,
    Time,
    Timestamp,
    TimestampMillis,
}

impl TemporalKind {
    fn rule_name(self) -> &'static str {
        match self {
            TemporalKind::Date => "date",
            TemporalKind::DateTime => "datetime",
            TemporalKind::Time => "time",
            TemporalKind::Timestamp => "timestamp",
            TemporalKind::TimestampMillis => "timestamp_millis",
        }
    }

    fn template(self) -> &'static str {
        match self {
            TemporalKind::Date => "Must be a valid date",
            TemporalKind::DateTime => "Must be a valid date and time",
            TemporalKind::Time => "Must be a valid time",
            TemporalKind::Timestamp => "Must be a valid unix timestamp",
            TemporalKind::TimestampMillis => "Must be a valid millisecond timestamp",
        }
    }

    /// Maps a value of this kind onto a comparable ordinal, `None` when the
    /// value does not parse. Calendar kinds map to epoch seconds, times to
    /// seconds from midnight.
    fn ordinal(self, value: &Value) -> Option<i64> {
        match self {
            TemporalKind::Date => {
                let date = NaiveDate::parse_from_str(value.as_str()?, "%Y-%m-%d").ok()?;
                Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp())
            }
            TemporalKind::DateTime => {
                Some(parse_datetime(value.as_str()?)?.and_utc().timestamp())
            }
            TemporalKind::Time => {
                let time = parse_time(value.as_str()?)?;
                Some(i64::from(time.num_seconds_from_midnight()))
            }
            TemporalKind::Timestamp => {
                let secs = value.as_i64()?;
                DateTime::from_timestamp(secs, 0).map(|_| secs)
            }
            TemporalKind::TimestampMillis => {
                let millis = value.as_i64()?;
                DateTime::from_timestamp_millis(millis).map(|_| millis)
            }
        }
    }

    /// Parses a textual bound onto the same ordinal scale as [`ordinal`].
    fn bound_ordinal(self, bound: &str) -> Option<i64> {
        match self {
            TemporalKind::Timestamp | TemporalKind::TimestampMillis => {
                self.ordinal(&Value::from(bound.parse::<i64>().ok()?))
            }
            _ => self.ordinal(&Value::from(bound)),
        }
    }
}

fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S").ok())
}

fn parse_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(input, "%H:%M").ok())
}

/// Validator for date, time, and timestamp values.
#[derive(Debug)]
pub struct TemporalValidator {
    chain: RuleChain,
    kind: TemporalKind,
}

fn temporal(kind: TemporalKind) -> TemporalValidator {
    let mut chain = RuleChain::new();
    chain.push(
        Rule::new(kind.rule_name(), move |v: &Value| kind.ordinal(v).is_some())
            .with_template(kind.template()),
    );
    TemporalValidator { chain, kind }
}

/// Creates a validator for `YYYY-MM-DD` date strings.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// assert!(date().test(&json!("2024-02-29")));
/// assert!(!date().test(&json!("2023-02-29")));
/// ```
#[must_use]
pub fn date() -> TemporalValidator {
    temporal(TemporalKind::Date)
}

/// Creates a validator for RFC 3339 / `YYYY-MM-DD HH:MM:SS` datetimes.
#[must_use]
pub fn datetime() -> TemporalValidator {
    temporal(TemporalKind::DateTime)
}

/// Creates a validator for `HH:MM:SS` / `HH:MM` time strings.
#[must_use]
pub fn time() -> TemporalValidator {
    temporal(TemporalKind::Time)
}

/// Creates a validator for integer unix timestamps in seconds.
#[must_use]
pub fn timestamp() -> TemporalValidator {
    temporal(TemporalKind::Timestamp)
}

/// Creates a validator for integer unix timestamps in milliseconds.
#[must_use]
pub fn timestamp_millis() -> TemporalValidator {
    temporal(TemporalKind::TimestampMillis)
}

impl TemporalValidator {
    /// Requires the value to be strictly after `bound`.
    ///
    /// The bound uses the node's own format and is parsed at build time; an
    /// unparseable bound is a [`SchemaError`], not a validation failure.
    pub fn after(self, bound: &str) -> Result<Self, SchemaError> {
        let kind = self.kind;
        let threshold = kind.bound_ordinal(bound).ok_or_else(|| SchemaError::Bound {
            kind: kind.rule_name(),
            value: bound.to_string(),
        })?;
        let shown = bound.to_string();
        Ok(self.rule(
            Rule::new("after", move |v: &Value| {
                kind.ordinal(v).map_or(true, |n| n > threshold)
            })
            .with_template("Must be after {bound}")
            .with_param("bound", shown),
        ))
    }

    /// Requires the value to be strictly before `bound`.
    ///
    /// Same bound semantics as [`after`](Self::after).
    pub fn before(self, bound: &str) -> Result<Self, SchemaError> {
        let kind = self.kind;
        let threshold = kind.bound_ordinal(bound).ok_or_else(|| SchemaError::Bound {
            kind: kind.rule_name(),
            value: bound.to_string(),
        })?;
        let shown = bound.to_string();
        Ok(self.rule(
            Rule::new("before", move |v: &Value| {
                kind.ordinal(v).map_or(true, |n| n < threshold)
            })
            .with_template("Must be before {bound}")
            .with_param("bound", shown),
        ))
    }
}

impl_chain_builder!(TemporalValidator);
impl_leaf_validate!(TemporalValidator);

// ============================================================================
// TESTS
// ============================================================================
