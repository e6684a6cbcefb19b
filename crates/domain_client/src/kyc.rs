//! KYC (Know Your Customer) document records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of verification document accepted during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycDocumentKind {
    #[serde(rename = "Identity Proof")]
    IdentityProof,
    #[serde(rename = "Address Proof")]
    AddressProof,
}

impl KycDocumentKind {
    /// Returns the label used on the client detail screen
    pub fn label(&self) -> &'static str {
        match self {
            KycDocumentKind::IdentityProof => "Identity Proof",
            KycDocumentKind::AddressProof => "Address Proof",
        }
    }
}

/// A verification document uploaded for a client
///
/// Document ids are sequential within the owning client, not global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDocument {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: KycDocumentKind,
    pub upload_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_with_spaced_labels() {
        let doc = KycDocument {
            id: 1,
            name: "ID Proof.pdf".to_string(),
            kind: KycDocumentKind::IdentityProof,
            upload_date: NaiveDate::from_ymd_opt(2022, 3, 10).unwrap(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "Identity Proof");
        assert_eq!(json["uploadDate"], "2022-03-10");
        assert_eq!(doc.kind.label(), "Identity Proof");
    }
}
