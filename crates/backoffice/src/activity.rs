//! Recent activity feed entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which part of the business an activity entry concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Client,
    Policy,
    Payment,
}

/// One row of the dashboard's recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Short subject line, usually the record's name
    pub name: String,
    /// Human-readable description of what happened
    pub action: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_like_the_feed() {
        let entry = ActivityEntry {
            id: 3,
            kind: ActivityKind::Payment,
            name: "Premium Payment".to_string(),
            action: "Jane Smith paid $350".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 7, 28).unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "payment");
        assert_eq!(json["name"], "Premium Payment");
        assert_eq!(json["date"], "2022-07-28");
    }
}
