//! Payment search and filtering

use crate::payment::{Payment, PaymentStatus};

/// Filter over the payment collection
///
/// Mirrors the controls on the payment list screen: a free-text search
/// matched against the client and policy names, plus an exact status
/// filter. An empty query matches every payment.
#[derive(Debug, Clone, Default)]
pub struct PaymentQuery {
    search: Option<String>,
    status: Option<PaymentStatus>,
}

impl PaymentQuery {
    /// Creates a query that matches every payment
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to payments whose client or policy name
    /// contains `term`, case-insensitively
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restricts the query to payments with the given status
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Tests a payment against this query
    pub fn matches(&self, payment: &Payment) -> bool {
        if let Some(status) = self.status {
            if payment.status != status {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                payment.client_name.to_lowercase().contains(&term)
                    || payment.policy_name.to_lowercase().contains(&term)
            }
        }
    }
}
