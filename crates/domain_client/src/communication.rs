//! Communication log entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Channel-specific details of a communication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CommunicationDetail {
    Email {
        content: String,
    },
    #[serde(rename_all = "camelCase")]
    Call {
        duration_minutes: u32,
        notes: String,
    },
}

/// One call or email exchanged with a client
///
/// Entry ids are sequential within the owning client, not global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub subject: String,
    #[serde(flatten)]
    pub detail: CommunicationDetail,
}

impl CommunicationEntry {
    /// Returns the channel label shown in the communication log
    pub fn channel(&self) -> &'static str {
        match self.detail {
            CommunicationDetail::Email { .. } => "email",
            CommunicationDetail::Call { .. } => "call",
        }
    }
}
