//! Test Data Builders
//!
//! Provides builder patterns for constructing test drafts with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else; `build` hands back
//! the draft the stores consume.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use store_kernel::{ClientId, PolicyId};

use domain_client::{ClientDraft, ClientStatus};
use domain_payment::{PaymentDraft, PaymentStatus};
use domain_policy::{PolicyDraft, PolicyStatus, PolicyType, VehicleDetails};

use crate::fixtures::{AmountFixtures, IdFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing client drafts
pub struct TestClientDataBuilder {
    name: String,
    email: String,
    phone: String,
    status: Option<ClientStatus>,
    address: Option<String>,
    dob: Option<NaiveDate>,
    occupation: Option<String>,
    join_date: Option<NaiveDate>,
}

impl Default for TestClientDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClientDataBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: StringFixtures::client_name().to_string(),
            email: StringFixtures::email().to_string(),
            phone: StringFixtures::phone().to_string(),
            status: None,
            address: Some(StringFixtures::address().to_string()),
            dob: Some(TemporalFixtures::date_of_birth_35()),
            occupation: Some(StringFixtures::occupation().to_string()),
            join_date: Some(TemporalFixtures::join_date()),
        }
    }

    /// Builds an inactive client draft
    pub fn inactive() -> Self {
        Self::new().with_status(ClientStatus::Inactive)
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the date of birth
    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    /// Sets the join date
    pub fn with_join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = Some(join_date);
        self
    }

    /// Clears every optional profile field
    pub fn bare(mut self) -> Self {
        self.address = None;
        self.dob = None;
        self.occupation = None;
        self.join_date = None;
        self
    }

    /// Builds the client draft
    pub fn build(self) -> ClientDraft {
        ClientDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            address: self.address,
            dob: self.dob,
            occupation: self.occupation,
            join_date: self.join_date,
        }
    }
}

/// Builder for constructing policy drafts
pub struct TestPolicyDataBuilder {
    name: String,
    policy_type: PolicyType,
    client_id: ClientId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium: Decimal,
    status: Option<PolicyStatus>,
    description: Option<String>,
    coverage_amount: Option<Decimal>,
    vehicle_details: Option<VehicleDetails>,
}

impl Default for TestPolicyDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyDataBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: StringFixtures::policy_name().to_string(),
            policy_type: PolicyType::Life,
            client_id: IdFixtures::client_id(),
            start_date: TemporalFixtures::policy_start(),
            end_date: TemporalFixtures::policy_end(),
            premium: AmountFixtures::monthly_premium(),
            status: None,
            description: None,
            coverage_amount: Some(AmountFixtures::coverage()),
            vehicle_details: None,
        }
    }

    /// Builds a life policy draft
    pub fn life() -> Self {
        Self::new()
    }

    /// Builds a health policy draft
    pub fn health() -> Self {
        Self::new()
            .with_name("Health Cover")
            .with_policy_type(PolicyType::Health)
            .with_premium(dec!(350))
    }

    /// Builds a vehicle policy draft with vehicle details attached
    pub fn vehicle() -> Self {
        Self::new()
            .with_name("Vehicle Cover")
            .with_policy_type(PolicyType::Vehicle)
            .with_premium(AmountFixtures::small_premium())
            .with_term_years(1)
            .with_vehicle_details(VehicleDetails {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2021,
                license_plate: "TST-0001".to_string(),
            })
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the line of business
    pub fn with_policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    /// Sets the holding client
    pub fn with_client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }

    /// Sets the coverage period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the term in years from the start date
    pub fn with_term_years(mut self, years: i64) -> Self {
        self.end_date = self.start_date + chrono::Duration::days(years * 365);
        self
    }

    /// Sets the monthly premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = premium;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the coverage amount
    pub fn with_coverage(mut self, coverage: Decimal) -> Self {
        self.coverage_amount = Some(coverage);
        self
    }

    /// Sets the vehicle details
    pub fn with_vehicle_details(mut self, details: VehicleDetails) -> Self {
        self.vehicle_details = Some(details);
        self
    }

    /// Builds the policy draft
    ///
    /// The client name is left empty, the application layer resolves it
    /// from the holding client on add.
    pub fn build(self) -> PolicyDraft {
        PolicyDraft {
            name: self.name,
            policy_type: self.policy_type,
            client_id: self.client_id,
            client_name: String::new(),
            start_date: self.start_date,
            end_date: self.end_date,
            premium: self.premium,
            status: self.status,
            description: self.description,
            coverage_amount: self.coverage_amount,
            vehicle_details: self.vehicle_details,
        }
    }
}

/// Builder for constructing payment drafts
pub struct TestPaymentDataBuilder {
    client_id: ClientId,
    client_name: String,
    policy_id: PolicyId,
    policy_name: String,
    due_date: NaiveDate,
    amount: Decimal,
    status: Option<PaymentStatus>,
}

impl Default for TestPaymentDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPaymentDataBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            client_id: IdFixtures::client_id(),
            client_name: StringFixtures::client_name().to_string(),
            policy_id: IdFixtures::policy_id(),
            policy_name: StringFixtures::policy_name().to_string(),
            due_date: TemporalFixtures::due_date(),
            amount: AmountFixtures::monthly_premium(),
            status: None,
        }
    }

    /// Builds a settled payment draft
    pub fn settled() -> Self {
        Self::new().with_status(PaymentStatus::Paid)
    }

    /// Sets the paying client
    pub fn with_client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }

    /// Sets the denormalized client name
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Sets the covered policy
    pub fn with_policy_id(mut self, policy_id: PolicyId) -> Self {
        self.policy_id = policy_id;
        self
    }

    /// Sets the denormalized policy name
    pub fn with_policy_name(mut self, name: impl Into<String>) -> Self {
        self.policy_name = name.into();
        self
    }

    /// Sets the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the payment draft
    pub fn build(self) -> PaymentDraft {
        PaymentDraft {
            client_id: self.client_id,
            client_name: self.client_name,
            policy_id: self.policy_id,
            policy_name: self.policy_name,
            due_date: self.due_date,
            amount: self.amount,
            status: self.status,
        }
    }
}
