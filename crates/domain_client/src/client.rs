//! Client aggregate and its lifecycle types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use store_kernel::{next_raw_id, ClientId, PolicyId, Record, ValidationReport};

use crate::communication::{CommunicationDetail, CommunicationEntry};
use crate::kyc::{KycDocument, KycDocumentKind};
use crate::validation::ClientValidator;

/// Lifecycle status of a client relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
}

impl ClientStatus {
    /// Returns the status label shown on the client list
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

/// A client of the insurance business
///
/// The client record is the aggregate root for everything known about a
/// person: contact details, optional profile fields, the KYC documents
/// collected during onboarding, and the communication log. Policies are
/// stored separately; `policy_ids` carries the references.
///
/// # Examples
///
/// ```rust
/// use domain_client::{Client, ClientDraft};
/// use store_kernel::{ClientId, Record};
///
/// let mut client = Client::from_draft(
///     ClientId::new(1),
///     ClientDraft {
///         name: "Jane Smith".to_string(),
///         email: "jane@example.com".to_string(),
///         phone: "234-567-8901".to_string(),
///         ..Default::default()
///     },
/// );
///
/// client.link_policy(store_kernel::PolicyId::new(103));
/// assert!(client.has_policy(store_kernel::PolicyId::new(103)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub join_date: Option<NaiveDate>,
    /// Verification documents collected for this client
    #[serde(default)]
    pub kyc_documents: Vec<KycDocument>,
    /// Calls and emails exchanged with this client, oldest first
    #[serde(default)]
    pub communications: Vec<CommunicationEntry>,
    /// Ids of the policies held by this client
    #[serde(default)]
    pub policy_ids: Vec<PolicyId>,
}

impl Client {
    /// Returns the fallback profile shown when a client id resolves to nothing
    ///
    /// The detail screens never render an empty page; a missing client is
    /// presented as this placeholder instead.
    pub fn placeholder(id: ClientId) -> Self {
        Self {
            id,
            name: "Client Name".to_string(),
            email: "client@example.com".to_string(),
            phone: "000-000-0000".to_string(),
            status: ClientStatus::Active,
            address: Some("Client Address".to_string()),
            dob: NaiveDate::from_ymd_opt(1990, 1, 1),
            occupation: Some("Occupation".to_string()),
            join_date: NaiveDate::from_ymd_opt(2022, 1, 1),
            kyc_documents: Vec::new(),
            communications: Vec::new(),
            policy_ids: Vec::new(),
        }
    }

    /// Computes the client's age in whole years on the given date
    ///
    /// Returns `None` when no date of birth is on file.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        let dob = self.dob?;
        if on < dob {
            return Some(0);
        }

        let mut years = on.year() - dob.year();
        if (on.month(), on.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        Some(years.max(0) as u32)
    }

    /// Attaches a KYC document, assigning the next id within this client
    pub fn attach_kyc_document(
        &mut self,
        name: impl Into<String>,
        kind: KycDocumentKind,
        upload_date: NaiveDate,
    ) -> &KycDocument {
        let id = next_raw_id(self.kyc_documents.iter().map(|doc| doc.id));
        let idx = self.kyc_documents.len();
        self.kyc_documents.push(KycDocument {
            id,
            name: name.into(),
            kind,
            upload_date,
        });
        &self.kyc_documents[idx]
    }

    /// Appends an entry to the communication log, assigning the next id
    /// within this client
    pub fn log_communication(
        &mut self,
        date: NaiveDate,
        subject: impl Into<String>,
        detail: CommunicationDetail,
    ) -> &CommunicationEntry {
        let id = next_raw_id(self.communications.iter().map(|entry| entry.id));
        let idx = self.communications.len();
        self.communications.push(CommunicationEntry {
            id,
            date,
            subject: subject.into(),
            detail,
        });
        &self.communications[idx]
    }

    /// Records that this client holds the given policy
    ///
    /// Linking is idempotent; a policy id is never listed twice.
    pub fn link_policy(&mut self, policy_id: PolicyId) {
        if !self.policy_ids.contains(&policy_id) {
            self.policy_ids.push(policy_id);
        }
    }

    /// Removes the given policy from this client's holdings
    pub fn unlink_policy(&mut self, policy_id: PolicyId) {
        self.policy_ids.retain(|&id| id != policy_id);
    }

    /// Checks whether this client holds the given policy
    pub fn has_policy(&self, policy_id: PolicyId) -> bool {
        self.policy_ids.contains(&policy_id)
    }

    /// Returns true when the client relationship is active
    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

/// Input for creating a client
///
/// Only name, email, and phone are required; everything else defaults.
/// A draft carries no id, the store assigns one on insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Defaults to [`ClientStatus::Active`] when omitted
    pub status: Option<ClientStatus>,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub join_date: Option<NaiveDate>,
}

/// Partial update for a client
///
/// Every field is optional; `None` leaves the stored value unchanged, so
/// optional profile fields cannot be cleared through a patch. The patch
/// carries no id field, which keeps record identity immutable, and no
/// sub-collection fields, which are edited through the dedicated methods
/// on [`Client`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ClientStatus>,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub join_date: Option<NaiveDate>,
}

impl Record for Client {
    type Id = ClientId;
    type Draft = ClientDraft;
    type Patch = ClientPatch;

    const ENTITY: &'static str = "client";

    fn id(&self) -> ClientId {
        self.id
    }

    fn from_draft(id: ClientId, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            status: draft.status.unwrap_or(ClientStatus::Active),
            address: draft.address,
            dob: draft.dob,
            occupation: draft.occupation,
            join_date: draft.join_date,
            kyc_documents: Vec::new(),
            communications: Vec::new(),
            policy_ids: Vec::new(),
        }
    }

    fn apply_patch(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(dob) = patch.dob {
            self.dob = Some(dob);
        }
        if let Some(occupation) = patch.occupation {
            self.occupation = Some(occupation);
        }
        if let Some(join_date) = patch.join_date {
            self.join_date = Some(join_date);
        }
    }

    fn validate(&self) -> ValidationReport {
        ClientValidator::validate(self)
    }
}
