//! Policy search and filtering

use crate::policy::{Policy, PolicyType};

/// Filter over the policy collection
///
/// Mirrors the controls on the policy list screen: a free-text search
/// matched against the policy name and the holding client's name, plus an
/// exact type filter. An empty query matches every policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyQuery {
    search: Option<String>,
    policy_type: Option<PolicyType>,
}

impl PolicyQuery {
    /// Creates a query that matches every policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to policies whose name or client name contains
    /// `term`, case-insensitively
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restricts the query to one line of business
    pub fn with_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = Some(policy_type);
        self
    }

    /// Tests a policy against this query
    pub fn matches(&self, policy: &Policy) -> bool {
        if let Some(policy_type) = self.policy_type {
            if policy.policy_type != policy_type {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                policy.name.to_lowercase().contains(&term)
                    || policy.client_name.to_lowercase().contains(&term)
            }
        }
    }
}
