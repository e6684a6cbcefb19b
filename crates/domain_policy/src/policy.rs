//! Policy aggregate and its lifecycle types
//!
//! # Invariants
//!
//! - The coverage period is well formed: `end_date` is never before
//!   `start_date`
//! - The premium is strictly positive
//! - `client_name` mirrors the referenced client and is maintained by the
//!   application layer, not by callers

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use store_kernel::{next_raw_id, ClientId, PolicyId, Record, ValidationReport};

use crate::documents::{PaymentRecord, PaymentRecordStatus, PolicyDocument, PolicyDocumentKind};
use crate::validation::PolicyValidator;

/// Line of business a policy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Life,
    Health,
    Vehicle,
    Building,
}

impl PolicyType {
    /// All lines of business, in the order the screens present them
    pub const ALL: [PolicyType; 4] = [
        PolicyType::Life,
        PolicyType::Health,
        PolicyType::Vehicle,
        PolicyType::Building,
    ];

    /// Returns the label shown in type filters and report rows
    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::Life => "Life",
            PolicyType::Health => "Health",
            PolicyType::Vehicle => "Vehicle",
            PolicyType::Building => "Building",
        }
    }
}

/// Lifecycle status of a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Expired,
    Pending,
}

impl PolicyStatus {
    /// Derives the status of a coverage period as seen on a given date
    ///
    /// This is a pure function of the calendar: before the period the
    /// policy is Pending, after it Expired, otherwise Active. Stored
    /// statuses remain whatever staff set them to; reports that need the
    /// calendar view use this instead.
    pub fn as_of(start_date: NaiveDate, end_date: NaiveDate, on: NaiveDate) -> Self {
        if on < start_date {
            PolicyStatus::Pending
        } else if on > end_date {
            PolicyStatus::Expired
        } else {
            PolicyStatus::Active
        }
    }

    /// Returns the status label shown on the policy list
    pub fn label(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Expired => "Expired",
            PolicyStatus::Pending => "Pending",
        }
    }
}

/// Insured vehicle details carried by vehicle policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub license_plate: String,
}

/// An insurance policy
///
/// The policy record carries the coverage terms, the denormalized name of
/// the holding client, the documents filed against the policy, and the
/// payment history shown on the detail screen. Payments themselves are
/// separate records; the history here is the detail-screen summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: PolicyId,
    pub name: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    /// Id of the holding client
    pub client_id: ClientId,
    /// Display name of the holding client, kept in sync by the
    /// application layer
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Periodic premium amount, strictly positive
    pub premium: Decimal,
    pub status: PolicyStatus,
    pub description: Option<String>,
    pub coverage_amount: Option<Decimal>,
    /// Present on vehicle policies only
    pub vehicle_details: Option<VehicleDetails>,
    /// Documents filed against this policy
    #[serde(default)]
    pub documents: Vec<PolicyDocument>,
    /// Payment summary shown on the detail screen, oldest first
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
}

impl Policy {
    /// Returns the fallback record shown when a policy id resolves to nothing
    ///
    /// The source data labels the missing policy "Unknown Policy" with
    /// blank terms. Enum-typed fields need concrete values, so the
    /// placeholder reads as a pending life policy held by no client.
    pub fn placeholder(id: PolicyId) -> Self {
        Self {
            id,
            name: "Unknown Policy".to_string(),
            policy_type: PolicyType::Life,
            client_id: ClientId::new(0),
            client_name: "Unknown".to_string(),
            start_date: NaiveDate::default(),
            end_date: NaiveDate::default(),
            premium: Decimal::ZERO,
            status: PolicyStatus::Pending,
            description: Some("Policy details not available".to_string()),
            coverage_amount: Some(Decimal::ZERO),
            vehicle_details: None,
            documents: Vec::new(),
            payment_history: Vec::new(),
        }
    }

    /// Derives this policy's status from its coverage period on the given date
    pub fn status_as_of(&self, on: NaiveDate) -> PolicyStatus {
        PolicyStatus::as_of(self.start_date, self.end_date, on)
    }

    /// Checks whether the coverage period contains the given date
    pub fn covers(&self, on: NaiveDate) -> bool {
        self.status_as_of(on) == PolicyStatus::Active
    }

    /// Files a document against this policy, assigning the next id within
    /// this policy
    pub fn attach_document(
        &mut self,
        name: impl Into<String>,
        kind: PolicyDocumentKind,
        upload_date: NaiveDate,
    ) -> &PolicyDocument {
        let id = next_raw_id(self.documents.iter().map(|doc| doc.id));
        let idx = self.documents.len();
        self.documents.push(PolicyDocument {
            id,
            name: name.into(),
            kind,
            upload_date,
        });
        &self.documents[idx]
    }

    /// Appends an entry to the payment history, assigning the next id
    /// within this policy
    pub fn record_payment(
        &mut self,
        amount: Decimal,
        date: NaiveDate,
        status: PaymentRecordStatus,
    ) -> &PaymentRecord {
        let id = next_raw_id(self.payment_history.iter().map(|entry| entry.id));
        let idx = self.payment_history.len();
        self.payment_history.push(PaymentRecord {
            id,
            amount,
            date,
            status,
        });
        &self.payment_history[idx]
    }
}

/// Input for creating a policy
///
/// A draft carries no id, the store assigns one on insertion. The
/// `client_name` field is overwritten by the application layer with the
/// name of the referenced client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub client_id: ClientId,
    #[serde(default)]
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: Decimal,
    /// Defaults to [`PolicyStatus::Active`] when omitted
    #[serde(default)]
    pub status: Option<PolicyStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub coverage_amount: Option<Decimal>,
    #[serde(default)]
    pub vehicle_details: Option<VehicleDetails>,
}

/// Partial update for a policy
///
/// Every field is optional; `None` leaves the stored value unchanged. The
/// patch carries no id field, which keeps record identity immutable, and
/// no document or history fields, which are edited through the dedicated
/// methods on [`Policy`]. Re-pointing `client_id` is honored only through
/// the application layer, which re-checks the reference and refreshes
/// `client_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub policy_type: Option<PolicyType>,
    pub client_id: Option<ClientId>,
    pub client_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub premium: Option<Decimal>,
    pub status: Option<PolicyStatus>,
    pub description: Option<String>,
    pub coverage_amount: Option<Decimal>,
    pub vehicle_details: Option<VehicleDetails>,
}

impl Record for Policy {
    type Id = PolicyId;
    type Draft = PolicyDraft;
    type Patch = PolicyPatch;

    const ENTITY: &'static str = "policy";

    fn id(&self) -> PolicyId {
        self.id
    }

    fn from_draft(id: PolicyId, draft: PolicyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            policy_type: draft.policy_type,
            client_id: draft.client_id,
            client_name: draft.client_name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            premium: draft.premium,
            status: draft.status.unwrap_or(PolicyStatus::Active),
            description: draft.description,
            coverage_amount: draft.coverage_amount,
            vehicle_details: draft.vehicle_details,
            documents: Vec::new(),
            payment_history: Vec::new(),
        }
    }

    fn apply_patch(&mut self, patch: PolicyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(policy_type) = patch.policy_type {
            self.policy_type = policy_type;
        }
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(client_name) = patch.client_name {
            self.client_name = client_name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(premium) = patch.premium {
            self.premium = premium;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(coverage_amount) = patch.coverage_amount {
            self.coverage_amount = Some(coverage_amount);
        }
        if let Some(vehicle_details) = patch.vehicle_details {
            self.vehicle_details = Some(vehicle_details);
        }
    }

    fn validate(&self) -> ValidationReport {
        PolicyValidator::validate(self)
    }
}
