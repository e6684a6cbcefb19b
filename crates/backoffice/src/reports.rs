//! Derived reports and the dashboard snapshot
//!
//! Every figure here is computed from the stores on demand. Nothing is
//! cached, so a report can never disagree with the records it was
//! derived from.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use store_kernel::EntityStore;

use domain_client::Client;
use domain_payment::{Payment, PaymentStatus};
use domain_policy::{Policy, PolicyType};

/// Policy count for one line of business
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTypeCount {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub count: usize,
}

/// Payment count and volume for one settlement status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusSummary {
    pub status: PaymentStatus,
    pub count: usize,
    pub total: Decimal,
}

/// Settled premium volume for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// First day of the month
    pub month: NaiveDate,
    pub total: Decimal,
}

/// Number of clients who joined in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyClientCount {
    /// First day of the month
    pub month: NaiveDate,
    pub joined: usize,
}

/// Policy count and premium volume ending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpirations {
    /// First day of the month
    pub month: NaiveDate,
    pub count: usize,
    pub premium_total: Decimal,
}

/// The headline figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_clients: usize,
    /// Policies whose stored status is Active
    pub active_policies: usize,
    /// Payments whose stored status is Due or Overdue
    pub pending_payments: usize,
    /// Sum of all Paid payment amounts
    pub total_revenue: Decimal,
    /// Percentage change between the last two revenue months, `None`
    /// with fewer than two months of settled revenue
    pub growth_rate: Option<Decimal>,
}

fn month_of(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Counts policies per line of business
///
/// Every line of business appears, zero-filled, in the order the screens
/// present them.
pub fn policy_type_distribution(policies: &EntityStore<Policy>) -> Vec<PolicyTypeCount> {
    PolicyType::ALL
        .into_iter()
        .map(|policy_type| PolicyTypeCount {
            policy_type,
            count: policies.list(|p| p.policy_type == policy_type).count(),
        })
        .collect()
}

/// Summarizes payment count and volume per settlement status
///
/// Every status appears, zero-filled, in Paid / Due / Overdue order.
pub fn premium_payment_analysis(payments: &EntityStore<Payment>) -> Vec<PaymentStatusSummary> {
    [PaymentStatus::Paid, PaymentStatus::Due, PaymentStatus::Overdue]
        .into_iter()
        .map(|status| {
            let mut count = 0;
            let mut total = Decimal::ZERO;
            for payment in payments.list(|p| p.status == status) {
                count += 1;
                total += payment.amount;
            }
            PaymentStatusSummary {
                status,
                count,
                total,
            }
        })
        .collect()
}

/// Buckets settled premium volume by due month, ascending
///
/// Only Paid payments count as revenue; months without settled payments
/// do not appear.
pub fn revenue_by_month(payments: &EntityStore<Payment>) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for payment in payments.list(Payment::is_settled) {
        *buckets.entry(month_of(payment.due_date)).or_default() += payment.amount;
    }

    buckets
        .into_iter()
        .map(|(month, total)| MonthlyRevenue { month, total })
        .collect()
}

/// Buckets client sign-ups by join month, ascending
///
/// Clients without a join date on file are not counted.
pub fn client_acquisition(clients: &EntityStore<Client>) -> Vec<MonthlyClientCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for client in clients.iter() {
        if let Some(join_date) = client.join_date {
            *buckets.entry(month_of(join_date)).or_default() += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(month, joined)| MonthlyClientCount { month, joined })
        .collect()
}

/// Buckets policy count and premium volume by end-date month, ascending
pub fn policy_expirations(policies: &EntityStore<Policy>) -> Vec<MonthlyExpirations> {
    let mut buckets: BTreeMap<NaiveDate, (usize, Decimal)> = BTreeMap::new();
    for policy in policies.iter() {
        let bucket = buckets.entry(month_of(policy.end_date)).or_default();
        bucket.0 += 1;
        bucket.1 += policy.premium;
    }

    buckets
        .into_iter()
        .map(|(month, (count, premium_total))| MonthlyExpirations {
            month,
            count,
            premium_total,
        })
        .collect()
}

/// Computes the dashboard's headline figures
pub fn dashboard_snapshot(
    clients: &EntityStore<Client>,
    policies: &EntityStore<Policy>,
    payments: &EntityStore<Payment>,
) -> DashboardSnapshot {
    let total_revenue = payments
        .list(Payment::is_settled)
        .map(|p| p.amount)
        .sum::<Decimal>();

    let pending_payments = payments
        .list(|p| matches!(p.status, PaymentStatus::Due | PaymentStatus::Overdue))
        .count();

    let months = revenue_by_month(payments);
    let growth_rate = match months.as_slice() {
        [.., previous, latest] if !previous.total.is_zero() => {
            Some((latest.total - previous.total) / previous.total * Decimal::ONE_HUNDRED)
        }
        _ => None,
    };

    DashboardSnapshot {
        total_clients: clients.len(),
        active_policies: policies
            .list(|p| p.status == domain_policy::PolicyStatus::Active)
            .count(),
        pending_payments,
        total_revenue,
        growth_rate,
    }
}
