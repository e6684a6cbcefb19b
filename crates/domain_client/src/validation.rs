//! Client validation rules
//!
//! # Validation Rules
//!
//! - Name, email, and phone are required
//! - Email must contain an `@` sign
//! - Date of birth, when present alongside a join date, cannot be after it

use store_kernel::ValidationReport;

use crate::client::Client;

/// Validator for client records
///
/// # Examples
///
/// ```rust
/// use domain_client::{Client, ClientValidator};
/// use store_kernel::{ClientId, Record};
///
/// let mut client = Client::placeholder(ClientId::new(1));
/// client.email = "not-an-email".to_string();
///
/// let report = ClientValidator::validate(&client);
/// assert!(report.has_violation_for("email"));
/// ```
pub struct ClientValidator;

impl ClientValidator {
    /// Validates a client record
    ///
    /// # Returns
    ///
    /// A [`ValidationReport`] listing every violated rule
    pub fn validate(client: &Client) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::validate_identity(client, &mut report);
        Self::validate_contact(client, &mut report);
        report
    }

    fn validate_identity(client: &Client, report: &mut ValidationReport) {
        if client.name.trim().is_empty() {
            report.add("name", "Client name is required");
        }

        if let (Some(dob), Some(join_date)) = (client.dob, client.join_date) {
            if dob > join_date {
                report.add("dob", "Date of birth cannot be after the join date");
            }
        }
    }

    fn validate_contact(client: &Client, report: &mut ValidationReport) {
        if client.email.trim().is_empty() {
            report.add("email", "Email is required");
        } else if !client.email.contains('@') {
            report.add("email", format!("Invalid email format: {}", client.email));
        }

        if client.phone.trim().is_empty() {
            report.add("phone", "Phone number is required");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientDraft, ClientStatus};
    use chrono::NaiveDate;
    use store_kernel::{ClientId, Record};

    fn valid_client() -> Client {
        Client::from_draft(
            ClientId::new(1),
            ClientDraft {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "123-456-7890".to_string(),
                status: Some(ClientStatus::Active),
                dob: NaiveDate::from_ymd_opt(1985, 5, 15),
                join_date: NaiveDate::from_ymd_opt(2022, 3, 10),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_valid_client_passes() {
        let report = ClientValidator::validate(&valid_client());
        assert!(report.is_ok(), "violations: {report}");
    }

    #[test]
    fn test_missing_name_is_reported() {
        let mut client = valid_client();
        client.name = "   ".to_string();

        let report = ClientValidator::validate(&client);
        assert!(report.has_violation_for("name"));
    }

    #[test]
    fn test_missing_email_and_phone_accumulate() {
        let mut client = valid_client();
        client.email.clear();
        client.phone.clear();

        let report = ClientValidator::validate(&client);
        assert_eq!(report.violations().len(), 2);
        assert!(report.has_violation_for("email"));
        assert!(report.has_violation_for("phone"));
    }

    #[test]
    fn test_email_must_contain_at_sign() {
        let mut client = valid_client();
        client.email = "john.example.com".to_string();

        let report = ClientValidator::validate(&client);
        assert!(report.has_violation_for("email"));
        assert_eq!(
            report.violations()[0].message,
            "Invalid email format: john.example.com"
        );
    }

    #[test]
    fn test_dob_after_join_date_is_reported() {
        let mut client = valid_client();
        client.dob = NaiveDate::from_ymd_opt(2023, 1, 1);

        let report = ClientValidator::validate(&client);
        assert!(report.has_violation_for("dob"));
    }
}
