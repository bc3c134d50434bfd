//! Validation reports
//!
//! A [`Report`] is the structured verdict returned by every validator:
//! a `valid` flag plus an [`ErrorMap`]. Leaf and array nodes produce
//! [`ErrorMap::Flat`] (an ordered error list); object nodes with a populated
//! shape produce [`ErrorMap::Keyed`] (field name → error list) when fields
//! fail. The two shapes are never mixed within one call.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::foundation::ValidationError;

// ============================================================================
// ERROR MAP
// ============================================================================

/// The error payload of a [`Report`].
///
/// `Keyed` map keys are exactly the shape field names that failed; fields
/// that passed are absent, never present with an empty list. Key order
/// follows shape declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMap {
    /// Errors of a leaf or array node, in rule declaration order.
    Flat(Vec<ValidationError>),
    /// Errors of an object node, keyed by failing field name.
    Keyed(IndexMap<String, Vec<ValidationError>>),
}

impl ErrorMap {
    /// Returns true when no errors are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ErrorMap::Flat(errors) => errors.is_empty(),
            ErrorMap::Keyed(fields) => fields.is_empty(),
        }
    }

    /// Total number of errors, across all fields for the keyed shape.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ErrorMap::Flat(errors) => errors.len(),
            ErrorMap::Keyed(fields) => fields.values().map(Vec::len).sum(),
        }
    }

    /// Iterates every error depth-first, regardless of shape.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &ValidationError> + '_> {
        match self {
            ErrorMap::Flat(errors) => Box::new(errors.iter()),
            ErrorMap::Keyed(fields) => Box::new(fields.values().flatten()),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// The structured pass/fail verdict of one `validate` call.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let report = string().min(3).validate(&json!("ab"));
/// assert!(!report.is_valid());
/// assert_eq!(report.error_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    valid: bool,
    errors: ErrorMap,
}

impl Report {
    /// A passing report with no errors.
    #[must_use]
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: ErrorMap::Flat(Vec::new()),
        }
    }

    /// Builds a flat report; valid exactly when `errors` is empty.
    #[must_use]
    pub fn flat(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors: ErrorMap::Flat(errors),
        }
    }

    /// Builds a field-keyed report; valid exactly when `fields` is empty.
    ///
    /// Callers only construct this with at least one failing field; an empty
    /// map is reported as a flat success by the object validator instead.
    #[must_use]
    pub fn keyed(fields: IndexMap<String, Vec<ValidationError>>) -> Self {
        Self {
            valid: fields.is_empty(),
            errors: ErrorMap::Keyed(fields),
        }
    }

    /// Whether every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The error payload.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Consumes the report, returning the error payload.
    #[must_use]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// Total number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Iterates every error regardless of report shape.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// All resolved messages, in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.iter().map(|e| e.message.as_str()).collect()
    }

    /// Errors recorded under a field key of a keyed report.
    ///
    /// Returns an empty slice for flat reports and for fields that passed.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[ValidationError] {
        match &self.errors {
            ErrorMap::Keyed(fields) => fields.get(field).map_or(&[], Vec::as_slice),
            ErrorMap::Flat(_) => &[],
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "valid");
        }
        writeln!(f, "Validation failed with {} error(s):", self.error_count())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
