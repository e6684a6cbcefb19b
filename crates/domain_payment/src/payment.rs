//! Payment record and its lifecycle types
//!
//! # Invariants
//!
//! - The amount is strictly positive
//! - `reminder_sent` only ever moves from false to true
//! - A payment whose status becomes Paid counts as reminded

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use store_kernel::{ClientId, PaymentId, PolicyId, Record, ValidationReport};

use crate::validation::PaymentValidator;

/// Settlement state of a premium payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Due,
    Overdue,
}

impl PaymentStatus {
    /// Derives the settlement state as seen on a given date
    ///
    /// A settled payment stays Paid regardless of the calendar. An
    /// unsettled one is Due up to and including its due date and Overdue
    /// afterwards.
    pub fn as_of(due_date: NaiveDate, on: NaiveDate, settled: bool) -> Self {
        if settled {
            PaymentStatus::Paid
        } else if on > due_date {
            PaymentStatus::Overdue
        } else {
            PaymentStatus::Due
        }
    }

    /// Returns the status label shown on the payment list
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Due => "Due",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

/// A premium payment owed or settled against a policy
///
/// Both `client_name` and `policy_name` are denormalized copies kept in
/// sync by the application layer so the payment list renders without
/// joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub client_id: ClientId,
    pub client_name: String,
    pub policy_id: PolicyId,
    pub policy_name: String,
    pub due_date: NaiveDate,
    /// Amount owed, strictly positive
    pub amount: Decimal,
    pub status: PaymentStatus,
    /// Whether a reminder has gone out; never reset once true
    pub reminder_sent: bool,
}

impl Payment {
    /// Settles this payment
    ///
    /// The status becomes Paid and the payment counts as reminded.
    pub fn mark_paid(&mut self) {
        self.status = PaymentStatus::Paid;
        self.reminder_sent = true;
    }

    /// Records that a reminder has gone out
    pub fn send_reminder(&mut self) {
        self.reminder_sent = true;
    }

    /// Returns true when this payment has been settled
    pub fn is_settled(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    /// Derives this payment's settlement state on the given date
    pub fn status_as_of(&self, on: NaiveDate) -> PaymentStatus {
        PaymentStatus::as_of(self.due_date, on, self.is_settled())
    }
}

/// Input for creating a payment
///
/// A draft carries no id, the store assigns one on insertion. The name
/// fields are overwritten by the application layer with the names of the
/// referenced records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub client_id: ClientId,
    #[serde(default)]
    pub client_name: String,
    pub policy_id: PolicyId,
    #[serde(default)]
    pub policy_name: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    /// Defaults to [`PaymentStatus::Due`] when omitted
    #[serde(default)]
    pub status: Option<PaymentStatus>,
}

/// Partial update for a payment
///
/// Every field is optional; `None` leaves the stored value unchanged. The
/// patch has no reminder field at all, so the one-way reminder flag can
/// never be reset through an update. Patching the status to Paid settles
/// the payment, which also marks it reminded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentPatch {
    pub due_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub status: Option<PaymentStatus>,
}

impl Record for Payment {
    type Id = PaymentId;
    type Draft = PaymentDraft;
    type Patch = PaymentPatch;

    const ENTITY: &'static str = "payment";

    fn id(&self) -> PaymentId {
        self.id
    }

    fn from_draft(id: PaymentId, draft: PaymentDraft) -> Self {
        let status = draft.status.unwrap_or(PaymentStatus::Due);
        Self {
            id,
            client_id: draft.client_id,
            client_name: draft.client_name,
            policy_id: draft.policy_id,
            policy_name: draft.policy_name,
            due_date: draft.due_date,
            amount: draft.amount,
            status,
            reminder_sent: status == PaymentStatus::Paid,
        }
    }

    fn apply_patch(&mut self, patch: PaymentPatch) {
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(status) = patch.status {
            self.status = status;
            if status == PaymentStatus::Paid {
                self.reminder_sent = true;
            }
        }
    }

    fn validate(&self) -> ValidationReport {
        PaymentValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn due_payment() -> Payment {
        Payment::from_draft(
            PaymentId::new(4),
            PaymentDraft {
                client_id: ClientId::new(1),
                client_name: "John Doe".to_string(),
                policy_id: PolicyId::new(101),
                policy_name: "Life Insurance Premium".to_string(),
                due_date: date(2022, 8, 1),
                amount: dec!(500),
                status: None,
            },
        )
    }

    #[test]
    fn test_draft_defaults_to_due_without_reminder() {
        let payment = due_payment();
        assert_eq!(payment.status, PaymentStatus::Due);
        assert!(!payment.reminder_sent);
        assert!(!payment.is_settled());
    }

    #[test]
    fn test_draft_born_paid_counts_as_reminded() {
        let draft = PaymentDraft {
            client_id: ClientId::new(1),
            client_name: "John Doe".to_string(),
            policy_id: PolicyId::new(101),
            policy_name: "Life Insurance Premium".to_string(),
            due_date: date(2022, 5, 1),
            amount: dec!(500),
            status: Some(PaymentStatus::Paid),
        };

        let payment = Payment::from_draft(PaymentId::new(1), draft);
        assert!(payment.reminder_sent);
    }

    #[test]
    fn test_mark_paid_settles_and_reminds() {
        let mut payment = due_payment();
        payment.mark_paid();

        assert_eq!(payment.status, PaymentStatus::Paid);
        assert!(payment.reminder_sent);
    }

    #[test]
    fn test_send_reminder_is_one_way() {
        let mut payment = due_payment();
        payment.send_reminder();
        assert!(payment.reminder_sent);

        // A later amount patch does not touch the flag.
        payment.apply_patch(PaymentPatch {
            amount: Some(dec!(520)),
            ..Default::default()
        });
        assert!(payment.reminder_sent);
    }

    #[test]
    fn test_patching_status_to_paid_sets_reminder() {
        let mut payment = due_payment();
        payment.apply_patch(PaymentPatch {
            status: Some(PaymentStatus::Paid),
            ..Default::default()
        });

        assert!(payment.is_settled());
        assert!(payment.reminder_sent);
    }

    #[test]
    fn test_patching_status_away_from_paid_keeps_reminder() {
        let mut payment = due_payment();
        payment.mark_paid();

        payment.apply_patch(PaymentPatch {
            status: Some(PaymentStatus::Overdue),
            ..Default::default()
        });

        assert_eq!(payment.status, PaymentStatus::Overdue);
        assert!(payment.reminder_sent);
    }

    #[test]
    fn test_status_as_of_follows_the_due_date() {
        let payment = due_payment();
        assert_eq!(payment.status_as_of(date(2022, 7, 31)), PaymentStatus::Due);
        assert_eq!(payment.status_as_of(date(2022, 8, 1)), PaymentStatus::Due);
        assert_eq!(payment.status_as_of(date(2022, 8, 2)), PaymentStatus::Overdue);

        let mut settled = due_payment();
        settled.mark_paid();
        assert_eq!(settled.status_as_of(date(2023, 1, 1)), PaymentStatus::Paid);
    }
}
