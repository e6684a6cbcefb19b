//! Client search and filtering

use crate::client::{Client, ClientStatus};

/// Filter over the client collection
///
/// Mirrors the controls on the client list screen: a free-text search
/// matched against name and email, plus an exact status filter. An empty
/// query matches every client.
#[derive(Debug, Clone, Default)]
pub struct ClientQuery {
    search: Option<String>,
    status: Option<ClientStatus>,
}

impl ClientQuery {
    /// Creates a query that matches every client
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to clients whose name or email contains `term`
    ///
    /// Matching is case-insensitive.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restricts the query to clients with the given status
    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Tests a client against this query
    pub fn matches(&self, client: &Client) -> bool {
        if let Some(status) = self.status {
            if client.status != status {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                client.name.to_lowercase().contains(&term)
                    || client.email.to_lowercase().contains(&term)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientDraft;
    use store_kernel::{ClientId, Record};

    fn client(id: u32, name: &str, email: &str, status: ClientStatus) -> Client {
        Client::from_draft(
            ClientId::new(id),
            ClientDraft {
                name: name.to_string(),
                email: email.to_string(),
                phone: "123-456-7890".to_string(),
                status: Some(status),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        let query = ClientQuery::new();
        assert!(query.matches(&client(1, "John Doe", "john@example.com", ClientStatus::Active)));
        assert!(query.matches(&client(2, "Jane Smith", "jane@example.com", ClientStatus::Inactive)));
    }

    #[test]
    fn test_search_covers_name_and_email() {
        let by_name = ClientQuery::new().with_search("doe");
        assert!(by_name.matches(&client(1, "John Doe", "john@example.com", ClientStatus::Active)));

        let by_email = ClientQuery::new().with_search("JANE@");
        assert!(by_email.matches(&client(2, "Jane Smith", "jane@example.com", ClientStatus::Active)));

        let neither = ClientQuery::new().with_search("robert");
        assert!(!neither.matches(&client(1, "John Doe", "john@example.com", ClientStatus::Active)));
    }

    #[test]
    fn test_status_filter_is_exact() {
        let query = ClientQuery::new().with_status(ClientStatus::Inactive);
        assert!(query.matches(&client(3, "Robert Johnson", "robert@example.com", ClientStatus::Inactive)));
        assert!(!query.matches(&client(1, "John Doe", "john@example.com", ClientStatus::Active)));
    }

    #[test]
    fn test_search_and_status_combine() {
        let query = ClientQuery::new()
            .with_search("example.com")
            .with_status(ClientStatus::Active);

        assert!(query.matches(&client(1, "John Doe", "john@example.com", ClientStatus::Active)));
        assert!(!query.matches(&client(3, "Robert Johnson", "robert@example.com", ClientStatus::Inactive)));
    }
}
