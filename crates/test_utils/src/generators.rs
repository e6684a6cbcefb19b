//! Property-Based Test Generators
//!
//! Provides proptest strategies and fake-data constructors for generating
//! random test drafts that maintain domain invariants: generated periods
//! are never inverted, premiums and amounts are always positive, and
//! emails always carry an `@`.

use chrono::{Duration, NaiveDate};
use fake::faker::address::en::StreetName;
use fake::faker::company::en::Profession;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;
use store_kernel::{ClientId, PolicyId};

use domain_client::{ClientDraft, ClientStatus};
use domain_payment::{PaymentDraft, PaymentStatus};
use domain_policy::{PolicyDraft, PolicyStatus, PolicyType};

use crate::fixtures::StringFixtures;

/// Strategy for generating client statuses
pub fn client_status_strategy() -> impl Strategy<Value = ClientStatus> {
    prop_oneof![Just(ClientStatus::Active), Just(ClientStatus::Inactive)]
}

/// Strategy for generating lines of business
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::Life),
        Just(PolicyType::Health),
        Just(PolicyType::Vehicle),
        Just(PolicyType::Building),
    ]
}

/// Strategy for generating policy statuses
pub fn policy_status_strategy() -> impl Strategy<Value = PolicyStatus> {
    prop_oneof![
        Just(PolicyStatus::Active),
        Just(PolicyStatus::Expired),
        Just(PolicyStatus::Pending),
    ]
}

/// Strategy for generating payment statuses
pub fn payment_status_strategy() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Paid),
        Just(PaymentStatus::Due),
        Just(PaymentStatus::Overdue),
    ]
}

/// Strategy for generating calendar dates within 2022
pub fn date_2022_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..365i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default() + Duration::days(days)
    })
}

/// Strategy for generating valid coverage periods (start before end)
pub fn period_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_2022_strategy(), 0i64..7300i64)
        .prop_map(|(start, duration_days)| (start, start + Duration::days(duration_days)))
}

/// Strategy for generating positive premium amounts with two decimals
pub fn positive_premium_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}"
}

/// Strategy for generating valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{5,10}", "[a-z]{3,8}").prop_map(|(local, domain)| format!("{}@{}.com", local, domain))
}

/// Strategy for generating phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (100u32..999u32, 1000u32..9999u32).prop_map(|(prefix, line)| format!("555-{}-{}", prefix, line))
}

/// Strategy for generating client drafts that pass validation
pub fn client_draft_strategy() -> impl Strategy<Value = ClientDraft> {
    (
        name_strategy(),
        email_strategy(),
        phone_strategy(),
        proptest::option::of(client_status_strategy()),
    )
        .prop_map(|(name, email, phone, status)| ClientDraft {
            name,
            email,
            phone,
            status,
            ..ClientDraft::default()
        })
}

/// Strategy for generating policy drafts held by the given client
pub fn policy_draft_strategy(client_id: ClientId) -> impl Strategy<Value = PolicyDraft> {
    (
        name_strategy(),
        policy_type_strategy(),
        period_strategy(),
        positive_premium_strategy(),
        proptest::option::of(policy_status_strategy()),
    )
        .prop_map(
            move |(name, policy_type, (start_date, end_date), premium, status)| PolicyDraft {
                name,
                policy_type,
                client_id,
                client_name: String::new(),
                start_date,
                end_date,
                premium,
                status,
                description: None,
                coverage_amount: None,
                vehicle_details: None,
            },
        )
}

/// Strategy for generating payment drafts against the given references
pub fn payment_draft_strategy(
    client_id: ClientId,
    policy_id: PolicyId,
) -> impl Strategy<Value = PaymentDraft> {
    (
        date_2022_strategy(),
        positive_premium_strategy(),
        proptest::option::of(payment_status_strategy()),
    )
        .prop_map(move |(due_date, amount, status)| PaymentDraft {
            client_id,
            client_name: StringFixtures::client_name().to_string(),
            policy_id,
            policy_name: StringFixtures::policy_name().to_string(),
            due_date,
            amount,
            status,
        })
}

/// Generates a client draft with fake but plausible profile data
///
/// Unlike the proptest strategies this is not shrinkable; it is meant for
/// quick smoke tests that want varied, realistic-looking records.
pub fn fake_client_draft() -> ClientDraft {
    ClientDraft {
        name: Name().fake(),
        email: SafeEmail().fake(),
        phone: format!("555-{:04}", (0..10_000u32).fake::<u32>()),
        status: None,
        address: Some(format!("{} {}", (1..999u32).fake::<u32>(), StreetName().fake::<String>())),
        dob: None,
        occupation: Some(Profession().fake()),
        join_date: None,
    }
}
