//! The back-office application root
//!
//! `BackOffice` owns the three entity stores plus the session state the
//! screens share: the active role, workspace preferences, the activity
//! feed, and the business date that derived statuses and new activity
//! entries are stamped with.
//!
//! Cross-store rules live here rather than in the stores themselves:
//! reference checks and denormalized-name resolution on add, policy
//! link maintenance, and delete restriction. Each operation either
//! completes fully or leaves every store untouched.

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use store_kernel::{next_raw_id, ClientId, EntityStore, PaymentId, PolicyId, Record, StoreError};

use domain_client::{Client, ClientDraft, ClientPatch};
use domain_payment::{Payment, PaymentDraft, PaymentPatch};
use domain_policy::{Policy, PolicyDraft, PolicyPatch};

use crate::access::{Permission, Role};
use crate::activity::{ActivityEntry, ActivityKind};
use crate::reports::{self, DashboardSnapshot};
use crate::seed;
use crate::settings::{Preference, PreferenceSet};

/// In-memory application state for one back-office session
///
/// All mutation goes through the methods here so that cross-store
/// bookkeeping (policy links, denormalized names, the activity feed)
/// cannot be skipped. Reads hand out shared references into the stores;
/// mutating operations return owned snapshots of the affected record.
#[derive(Debug, Clone)]
pub struct BackOffice {
    clients: EntityStore<Client>,
    policies: EntityStore<Policy>,
    payments: EntityStore<Payment>,
    active_role: Role,
    preferences: PreferenceSet,
    /// Newest entry first
    activity: Vec<ActivityEntry>,
    business_date: NaiveDate,
}

impl BackOffice {
    /// Creates an empty back office pinned to the given business date
    pub fn new(business_date: NaiveDate) -> Self {
        Self {
            clients: EntityStore::new(),
            policies: EntityStore::new(),
            payments: EntityStore::new(),
            active_role: Role::Agent,
            preferences: PreferenceSet::default(),
            activity: Vec::new(),
            business_date,
        }
    }

    /// Creates a back office loaded with the sample book
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the seed dataset carries a
    /// duplicate id, which would mean the dataset itself is broken.
    pub fn with_sample_data() -> Result<Self, StoreError> {
        Ok(Self {
            clients: EntityStore::with_records(seed::sample_clients())?,
            policies: EntityStore::with_records(seed::sample_policies())?,
            payments: EntityStore::with_records(seed::sample_payments())?,
            active_role: Role::Agent,
            preferences: PreferenceSet::default(),
            activity: seed::sample_activity(),
            business_date: seed::sample_business_date(),
        })
    }

    /// The date used for derived statuses and new activity entries
    pub fn business_date(&self) -> NaiveDate {
        self.business_date
    }

    pub fn set_business_date(&mut self, date: NaiveDate) {
        self.business_date = date;
    }

    pub fn clients(&self) -> &EntityStore<Client> {
        &self.clients
    }

    pub fn policies(&self) -> &EntityStore<Policy> {
        &self.policies
    }

    pub fn payments(&self) -> &EntityStore<Payment> {
        &self.payments
    }

    // === Clients ===

    /// Registers a new client
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when the draft fails the client
    /// validation rules.
    #[instrument(skip(self, draft))]
    pub fn add_client(&mut self, draft: ClientDraft) -> Result<Client, StoreError> {
        let created = self.clients.add(draft)?.clone();
        info!(client_id = %created.id, "Client registered");
        self.log_activity(
            ActivityKind::Client,
            created.name.clone(),
            "New client registered",
        );
        Ok(created)
    }

    /// Applies a partial edit to a client
    ///
    /// A renamed client keeps the old name on existing policies and
    /// payments; the denormalized copies are resolved only when a record
    /// is created or re-pointed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the client does not exist, or
    /// `StoreError::Validation` if the merged record fails validation.
    #[instrument(skip(self, patch), fields(client_id = %id))]
    pub fn update_client(&mut self, id: ClientId, patch: ClientPatch) -> Result<Client, StoreError> {
        let updated = self.clients.update(id, patch)?.clone();
        debug!("Client updated");
        Ok(updated)
    }

    /// Removes a client and returns the removed record
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the client does not exist, or
    /// `StoreError::Conflict` while any policy or payment still
    /// references it. Remove those records first.
    #[instrument(skip(self), fields(client_id = %id))]
    pub fn remove_client(&mut self, id: ClientId) -> Result<Client, StoreError> {
        if self.clients.find(id).is_none() {
            return Err(StoreError::not_found(Client::ENTITY, id));
        }

        let policies = self.policies.list(|p| p.client_id == id).count();
        let payments = self.payments.list(|p| p.client_id == id).count();
        if policies > 0 || payments > 0 {
            warn!(policies, payments, "Client removal blocked by linked records");
            return Err(StoreError::conflict(format!(
                "Client {id} is still referenced by {policies} policies and {payments} payments"
            )));
        }

        let removed = self.clients.remove(id)?;
        info!("Client removed");
        Ok(removed)
    }

    /// Returns the client detail view, falling back to the placeholder
    /// profile when the id is unknown
    pub fn client_profile(&self, id: ClientId) -> Client {
        self.clients
            .find(id)
            .cloned()
            .unwrap_or_else(|| Client::placeholder(id))
    }

    // === Policies ===

    /// Issues a new policy for an existing client
    ///
    /// The draft's client name is overwritten with the holder's current
    /// name, and the new policy id is appended to the holder's policy
    /// list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when the referenced client does
    /// not exist or the draft fails the policy validation rules.
    #[instrument(skip(self, draft))]
    pub fn add_policy(&mut self, mut draft: PolicyDraft) -> Result<Policy, StoreError> {
        let holder = self.clients.find(draft.client_id).ok_or_else(|| {
            StoreError::invalid(
                "clientId",
                format!("Client {} does not exist", draft.client_id),
            )
        })?;
        draft.client_name = holder.name.clone();

        let created = self.policies.add(draft)?.clone();
        self.clients.modify(created.client_id, |client| {
            client.link_policy(created.id);
        })?;

        info!(policy_id = %created.id, client_id = %created.client_id, "Policy issued");
        self.log_activity(
            ActivityKind::Policy,
            created.name.clone(),
            format!("New policy created for {}", created.client_name),
        );
        Ok(created)
    }

    /// Applies a partial edit to a policy
    ///
    /// Re-pointing `client_id` moves the policy reference from the old
    /// holder to the new one and refreshes the denormalized client name.
    /// Any client name carried by the patch itself is discarded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the policy does not exist,
    /// `StoreError::Validation` if the new client reference is unknown
    /// or the merged record fails validation.
    #[instrument(skip(self, patch), fields(policy_id = %id))]
    pub fn update_policy(
        &mut self,
        id: PolicyId,
        mut patch: PolicyPatch,
    ) -> Result<Policy, StoreError> {
        let previous_holder = self
            .policies
            .find(id)
            .map(|p| p.client_id)
            .ok_or_else(|| StoreError::not_found(Policy::ENTITY, id))?;

        match patch.client_id {
            Some(new_holder) => {
                let holder = self.clients.find(new_holder).ok_or_else(|| {
                    StoreError::invalid(
                        "clientId",
                        format!("Client {new_holder} does not exist"),
                    )
                })?;
                patch.client_name = Some(holder.name.clone());
            }
            None => patch.client_name = None,
        }

        let updated = self.policies.update(id, patch)?.clone();

        if updated.client_id != previous_holder {
            self.clients.modify(previous_holder, |client| {
                client.unlink_policy(id);
            })?;
            self.clients.modify(updated.client_id, |client| {
                client.link_policy(id);
            })?;
            debug!(from = %previous_holder, to = %updated.client_id, "Policy re-pointed");
        }

        debug!("Policy updated");
        Ok(updated)
    }

    /// Removes a policy, detaches it from its holder, and returns the
    /// removed record
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the policy does not exist, or
    /// `StoreError::Conflict` while any payment still references it.
    #[instrument(skip(self), fields(policy_id = %id))]
    pub fn remove_policy(&mut self, id: PolicyId) -> Result<Policy, StoreError> {
        let holder = self
            .policies
            .find(id)
            .map(|p| p.client_id)
            .ok_or_else(|| StoreError::not_found(Policy::ENTITY, id))?;

        let payments = self.payments.list(|p| p.policy_id == id).count();
        if payments > 0 {
            warn!(payments, "Policy removal blocked by linked payments");
            return Err(StoreError::conflict(format!(
                "Policy {id} is still referenced by {payments} payments"
            )));
        }

        self.clients.modify(holder, |client| {
            client.unlink_policy(id);
        })?;
        let removed = self.policies.remove(id)?;
        info!(client_id = %holder, "Policy removed");
        Ok(removed)
    }

    /// Returns the policy detail view, falling back to the placeholder
    /// profile when the id is unknown
    pub fn policy_profile(&self, id: PolicyId) -> Policy {
        self.policies
            .find(id)
            .cloned()
            .unwrap_or_else(|| Policy::placeholder(id))
    }

    // === Payments ===

    /// Records a premium payment against an existing policy
    ///
    /// Both denormalized names are overwritten with the current client
    /// and policy names.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when either reference does not
    /// exist or the draft fails the payment validation rules.
    #[instrument(skip(self, draft))]
    pub fn add_payment(&mut self, mut draft: PaymentDraft) -> Result<Payment, StoreError> {
        let client = self.clients.find(draft.client_id).ok_or_else(|| {
            StoreError::invalid(
                "clientId",
                format!("Client {} does not exist", draft.client_id),
            )
        })?;
        draft.client_name = client.name.clone();

        let policy = self.policies.find(draft.policy_id).ok_or_else(|| {
            StoreError::invalid(
                "policyId",
                format!("Policy {} does not exist", draft.policy_id),
            )
        })?;
        draft.policy_name = policy.name.clone();

        let created = self.payments.add(draft)?.clone();
        info!(payment_id = %created.id, client_id = %created.client_id, "Payment recorded");
        self.log_activity(
            ActivityKind::Payment,
            "Premium Payment",
            format!(
                "Payment of ${} recorded for {}",
                created.amount, created.client_name
            ),
        );
        Ok(created)
    }

    /// Applies a partial edit to a payment
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the payment does not exist, or
    /// `StoreError::Validation` if the merged record fails validation.
    #[instrument(skip(self, patch), fields(payment_id = %id))]
    pub fn update_payment(
        &mut self,
        id: PaymentId,
        patch: PaymentPatch,
    ) -> Result<Payment, StoreError> {
        let updated = self.payments.update(id, patch)?.clone();
        debug!("Payment updated");
        Ok(updated)
    }

    /// Removes a payment and returns the removed record
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the payment does not exist.
    #[instrument(skip(self), fields(payment_id = %id))]
    pub fn remove_payment(&mut self, id: PaymentId) -> Result<Payment, StoreError> {
        let removed = self.payments.remove(id)?;
        info!("Payment removed");
        Ok(removed)
    }

    /// Flags a payment as reminded
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the payment does not exist.
    #[instrument(skip(self), fields(payment_id = %id))]
    pub fn send_reminder(&mut self, id: PaymentId) -> Result<Payment, StoreError> {
        let payment = self.payments.modify(id, Payment::send_reminder)?.clone();
        info!(client_id = %payment.client_id, "Payment reminder sent");
        Ok(payment)
    }

    /// Settles a payment, forcing its status to Paid and its reminder
    /// flag on
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the payment does not exist.
    #[instrument(skip(self), fields(payment_id = %id))]
    pub fn mark_paid(&mut self, id: PaymentId) -> Result<Payment, StoreError> {
        let settled = self.payments.modify(id, Payment::mark_paid)?.clone();
        info!(client_id = %settled.client_id, "Payment settled");
        self.log_activity(
            ActivityKind::Payment,
            "Premium Payment",
            format!("{} paid ${}", settled.client_name, settled.amount),
        );
        Ok(settled)
    }

    // === Session state ===

    pub fn active_role(&self) -> Role {
        self.active_role
    }

    pub fn set_role(&mut self, role: Role) {
        info!(role = %role, "Active role switched");
        self.active_role = role;
    }

    /// Checks the permission table for the active role
    ///
    /// Lookup only. Operations on this type are not gated by it; the
    /// screens use the answer to hide or show controls.
    pub fn can(&self, permission: Permission) -> bool {
        self.active_role.allows(permission)
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    /// Flips a workspace preference and returns its new value
    pub fn toggle_preference(&mut self, preference: Preference) -> bool {
        self.preferences.toggle(preference)
    }

    /// The most recent activity entries, newest first
    pub fn recent_activity(&self, limit: usize) -> impl Iterator<Item = &ActivityEntry> {
        self.activity.iter().take(limit)
    }

    /// The headline dashboard figures derived from the live stores
    pub fn dashboard(&self) -> DashboardSnapshot {
        reports::dashboard_snapshot(&self.clients, &self.policies, &self.payments)
    }

    fn log_activity(
        &mut self,
        kind: ActivityKind,
        name: impl Into<String>,
        action: impl Into<String>,
    ) {
        let id = next_raw_id(self.activity.iter().map(|entry| entry.id));
        self.activity.insert(
            0,
            ActivityEntry {
                id,
                kind,
                name: name.into(),
                action: action.into(),
                date: self.business_date,
            },
        );
    }
}
