//! Store error types
//!
//! Every mutating operation surfaces one of these recoverable errors. A
//! failed operation never leaves a partial mutation behind; callers display
//! the message and the store keeps its previous state.

use crate::identifiers::SequentialId;
use crate::validation::ValidationReport;
use thiserror::Error;

/// Errors surfaced by entity store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The operation referenced an id that is not in the collection.
    #[error("Record not found: {entity} {id}")]
    NotFound { entity: &'static str, id: u32 },

    /// The candidate record violated one or more field rules. The collection
    /// is unchanged.
    #[error("Validation failed: {report}")]
    Validation { report: ValidationReport },

    /// The operation conflicts with records elsewhere, e.g. removing a client
    /// that policies still reference.
    #[error("Conflict: {message}")]
    Conflict { message: String },
}

impl StoreError {
    /// Creates a not-found error for an entity kind and id.
    pub fn not_found(entity: &'static str, id: impl SequentialId) -> Self {
        Self::NotFound {
            entity,
            id: id.raw(),
        }
    }

    /// Creates a validation error from an accumulated report.
    pub fn validation(report: ValidationReport) -> Self {
        Self::Validation { report }
    }

    /// Creates a validation error with a single field violation.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            report: ValidationReport::violation(field, message),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// True for the not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for the validation variant.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True for the conflict variant.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// The validation report, when this is a validation error.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Validation { report } => Some(report),
            _ => None,
        }
    }
}
