//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the
//! back-office system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use store_kernel::{ClientId, PaymentId, PolicyId};

/// Fixture for premium and coverage amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// Standard monthly premium
    pub fn monthly_premium() -> Decimal {
        dec!(500)
    }

    /// A smaller premium for secondary policies
    pub fn small_premium() -> Decimal {
        dec!(200)
    }

    /// Standard coverage amount
    pub fn coverage() -> Decimal {
        dec!(500000)
    }

    /// Zero, for rejection tests
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The business date the fixture book is evaluated on (Aug 25, 2022)
    pub fn business_date() -> NaiveDate {
        date(2022, 8, 25)
    }

    /// Standard policy start date (Apr 1, 2022)
    pub fn policy_start() -> NaiveDate {
        date(2022, 4, 1)
    }

    /// Standard policy end date, twenty years out (Apr 1, 2042)
    pub fn policy_end() -> NaiveDate {
        date(2042, 4, 1)
    }

    /// A date inside the standard policy period
    pub fn mid_term() -> NaiveDate {
        date(2032, 6, 15)
    }

    /// Standard payment due date (Aug 1, 2022)
    pub fn due_date() -> NaiveDate {
        date(2022, 8, 1)
    }

    /// Standard client join date (Mar 10, 2022)
    pub fn join_date() -> NaiveDate {
        date(2022, 3, 10)
    }

    /// Date of birth putting a client at age 35 on the business date
    pub fn date_of_birth_35() -> NaiveDate {
        date(1987, 5, 15)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic client id for testing
    pub fn client_id() -> ClientId {
        ClientId::new(1)
    }

    /// Deterministic policy id for testing
    pub fn policy_id() -> PolicyId {
        PolicyId::new(101)
    }

    /// Deterministic payment id for testing
    pub fn payment_id() -> PaymentId {
        PaymentId::new(1)
    }

    /// An id no fixture store contains
    pub fn unknown_client_id() -> ClientId {
        ClientId::new(9999)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Test client name
    pub fn client_name() -> &'static str {
        "Test Client"
    }

    /// Test email address
    pub fn email() -> &'static str {
        "client@test.example"
    }

    /// Test phone number
    pub fn phone() -> &'static str {
        "555-0100"
    }

    /// Test policy name
    pub fn policy_name() -> &'static str {
        "Term Life Cover"
    }

    /// Test street address
    pub fn address() -> &'static str {
        "1 Test Street, Testville"
    }

    /// Test occupation
    pub fn occupation() -> &'static str {
        "Actuary"
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
