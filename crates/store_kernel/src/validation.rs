//! Field-level validation reporting
//!
//! Mutating store operations validate the whole candidate record before any
//! state changes. Violations are accumulated rather than short-circuited so a
//! form can surface every problem at once.

use crate::error::StoreError;
use std::fmt;

/// A single failed validation rule, tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name in the record's serialized (camelCase) shape.
    pub field: String,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulated outcome of validating a record.
///
/// An empty report means the record is acceptable. Reports from several
/// validators can be merged before being surfaced to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// Creates an empty (passing) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a report containing a single violation.
    pub fn violation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.add(field, message);
        report
    }

    /// Records a violation against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Absorbs all violations from another report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    /// True when no rule failed.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations, in the order they were added.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// True when some violation names the given field.
    pub fn has_violation_for(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Converts the report into an operation result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] carrying this report when any
    /// violation was recorded.
    pub fn into_result(self) -> Result<(), StoreError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(StoreError::Validation { report: self })
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_ok() {
        let report = ValidationReport::new();
        assert!(report.is_ok());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_violation_constructor() {
        let report = ValidationReport::violation("name", "Client name is required");
        assert!(!report.is_ok());
        assert!(report.has_violation_for("name"));
        assert!(!report.has_violation_for("email"));
    }

    #[test]
    fn test_merge_combines_violations_in_order() {
        let mut report = ValidationReport::violation("name", "Client name is required");
        report.merge(ValidationReport::violation("email", "Email address is required"));

        let fields: Vec<&str> = report.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email"]);
    }

    #[test]
    fn test_display_joins_violations() {
        let mut report = ValidationReport::violation("name", "Client name is required");
        report.add("phone", "Phone number is required");

        assert_eq!(
            report.to_string(),
            "name: Client name is required; phone: Phone number is required"
        );
    }

    #[test]
    fn test_into_result_surfaces_validation_error() {
        let report = ValidationReport::violation("premium", "Monthly premium must be greater than zero");
        let err = report.clone().into_result().unwrap_err();
        match err {
            StoreError::Validation { report: carried } => assert_eq!(carried, report),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
