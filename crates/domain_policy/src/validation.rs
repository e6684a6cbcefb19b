//! Policy validation rules
//!
//! # Validation Rules
//!
//! - Name is required
//! - Premium must be strictly positive
//! - The coverage period must be well formed: the end date is never
//!   before the start date

use rust_decimal::Decimal;
use store_kernel::ValidationReport;

use crate::policy::Policy;

/// Validator for policy records
pub struct PolicyValidator;

impl PolicyValidator {
    /// Validates a policy record
    ///
    /// # Returns
    ///
    /// A [`ValidationReport`] listing every violated rule
    pub fn validate(policy: &Policy) -> ValidationReport {
        let mut report = ValidationReport::new();

        if policy.name.trim().is_empty() {
            report.add("name", "Policy name is required");
        }

        if policy.premium <= Decimal::ZERO {
            report.add("premium", "Premium must be greater than zero");
        }

        if policy.end_date < policy.start_date {
            report.add("endDate", "End date cannot be before start date");
        }

        if let Some(coverage) = policy.coverage_amount {
            if coverage < Decimal::ZERO {
                report.add("coverageAmount", "Coverage amount cannot be negative");
            }
        }

        report
    }
}
