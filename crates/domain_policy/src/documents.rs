//! Policy documents and payment history entries

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of document filed against a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyDocumentKind {
    #[serde(rename = "Terms Document")]
    Terms,
    #[serde(rename = "Coverage Document")]
    Coverage,
}

impl PolicyDocumentKind {
    /// Returns the label used on the policy detail screen
    pub fn label(&self) -> &'static str {
        match self {
            PolicyDocumentKind::Terms => "Terms Document",
            PolicyDocumentKind::Coverage => "Coverage Document",
        }
    }
}

/// A document filed against a policy
///
/// Document ids are sequential within the owning policy, not global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PolicyDocumentKind,
    pub upload_date: NaiveDate,
}

/// Settlement state of a payment history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentRecordStatus {
    Paid,
    Pending,
    Due,
    Overdue,
}

/// One row of the payment history shown on the policy detail screen
///
/// Entry ids are sequential within the owning policy, not global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: u32,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: PaymentRecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_document_kind_serializes_with_spaced_labels() {
        let doc = PolicyDocument {
            id: 1,
            name: "Policy Terms.pdf".to_string(),
            kind: PolicyDocumentKind::Terms,
            upload_date: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "Terms Document");
        assert_eq!(json["uploadDate"], "2022-04-01");
    }

    #[test]
    fn test_payment_record_roundtrips() {
        let record = PaymentRecord {
            id: 4,
            amount: dec!(500),
            date: NaiveDate::from_ymd_opt(2022, 8, 1).unwrap(),
            status: PaymentRecordStatus::Pending,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PaymentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
