//! Payment validation rules
//!
//! # Validation Rules
//!
//! - Amount must be strictly positive

use rust_decimal::Decimal;
use store_kernel::ValidationReport;

use crate::payment::Payment;

/// Validator for payment records
pub struct PaymentValidator;

impl PaymentValidator {
    /// Validates a payment record
    pub fn validate(payment: &Payment) -> ValidationReport {
        let mut report = ValidationReport::new();

        if payment.amount <= Decimal::ZERO {
            report.add("amount", "Amount must be greater than zero");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{PaymentDraft, PaymentStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use store_kernel::{ClientId, PaymentId, PolicyId, Record};

    fn payment_with_amount(amount: Decimal) -> Payment {
        Payment::from_draft(
            PaymentId::new(8),
            PaymentDraft {
                client_id: ClientId::new(2),
                client_name: "Jane Smith".to_string(),
                policy_id: PolicyId::new(103),
                policy_name: "Health Insurance".to_string(),
                due_date: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
                amount,
                status: Some(PaymentStatus::Paid),
            },
        )
    }

    #[test]
    fn test_positive_amount_passes() {
        assert!(PaymentValidator::validate(&payment_with_amount(dec!(350))).is_ok());
    }

    #[test]
    fn test_zero_amount_is_reported() {
        let report = PaymentValidator::validate(&payment_with_amount(Decimal::ZERO));
        assert!(report.has_violation_for("amount"));
        assert_eq!(
            report.violations()[0].message,
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn test_negative_amount_is_reported() {
        let report = PaymentValidator::validate(&payment_with_amount(dec!(-1)));
        assert!(report.has_violation_for("amount"));
    }
}
