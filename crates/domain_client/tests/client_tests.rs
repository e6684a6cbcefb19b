//! Integration tests for the client domain
//!
//! Drives a real `EntityStore<Client>` through the lifecycle the admin
//! screens rely on, and pins down the JSON shape of the client record.

use chrono::NaiveDate;
use domain_client::{
    Client, ClientDraft, ClientPatch, ClientQuery, ClientStatus, CommunicationDetail,
    KycDocumentKind,
};
use store_kernel::{ClientId, EntityStore, PolicyId, Record};

fn draft(name: &str, email: &str, phone: &str) -> ClientDraft {
    ClientDraft {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        ..Default::default()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod store_lifecycle_tests {
    use super::*;

    // === Store Lifecycle ===

    #[test]
    fn test_first_client_gets_id_one() {
        let mut store = EntityStore::<Client>::new();
        let created = store
            .add(draft("John Doe", "john@example.com", "123-456-7890"))
            .unwrap();

        assert_eq!(created.id, ClientId::new(1));
        assert_eq!(created.status, ClientStatus::Active);
    }

    #[test]
    fn test_ids_continue_past_removals() {
        let mut store = EntityStore::<Client>::new();
        store
            .add(draft("John Doe", "john@example.com", "123-456-7890"))
            .unwrap();
        store
            .add(draft("Jane Smith", "jane@example.com", "234-567-8901"))
            .unwrap();

        store.remove(ClientId::new(1)).unwrap();
        let third = store
            .add(draft("Robert Johnson", "robert@example.com", "345-678-9012"))
            .unwrap();
        assert_eq!(third.id, ClientId::new(3));
    }

    #[test]
    fn test_update_merges_partial_profile() {
        let mut store = EntityStore::<Client>::new();
        store
            .add(draft("John Doe", "john@example.com", "123-456-7890"))
            .unwrap();

        let updated = store
            .update(
                ClientId::new(1),
                ClientPatch {
                    address: Some("123 Main St, Anytown, USA".to_string()),
                    occupation: Some("Software Engineer".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "John Doe");
        assert_eq!(updated.phone, "123-456-7890");
        assert_eq!(updated.address.as_deref(), Some("123 Main St, Anytown, USA"));
        assert_eq!(updated.occupation.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn test_invalid_update_leaves_client_untouched() {
        let mut store = EntityStore::<Client>::new();
        store
            .add(draft("John Doe", "john@example.com", "123-456-7890"))
            .unwrap();

        let err = store
            .update(
                ClientId::new(1),
                ClientPatch {
                    email: Some("missing-at-sign".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            store.find(ClientId::new(1)).unwrap().email,
            "john@example.com"
        );
    }

    #[test]
    fn test_remove_hands_back_the_record() {
        let mut store = EntityStore::<Client>::new();
        store
            .add(draft("Emily Davis", "emily@example.com", "456-789-0123"))
            .unwrap();

        let removed = store.remove(ClientId::new(1)).unwrap();
        assert_eq!(removed.name, "Emily Davis");
        assert!(store.find(ClientId::new(1)).is_none());
    }

    #[test]
    fn test_add_validates_the_draft() {
        let mut store = EntityStore::<Client>::new();
        let err = store.add(draft("", "john@example.com", "")).unwrap_err();

        let report = err.report().unwrap();
        assert!(report.has_violation_for("name"));
        assert!(report.has_violation_for("phone"));
        assert!(store.is_empty());
    }
}

mod sub_collection_tests {
    use super::*;

    // === Owned Sub-Collections ===

    #[test]
    fn test_sub_collections_survive_profile_patches() {
        let mut store = EntityStore::<Client>::new();
        store
            .add(draft("John Doe", "john@example.com", "123-456-7890"))
            .unwrap();

        store
            .modify(ClientId::new(1), |client| {
                client.attach_kyc_document(
                    "ID Proof.pdf",
                    KycDocumentKind::IdentityProof,
                    date(2022, 3, 10),
                );
                client.log_communication(
                    date(2022, 3, 10),
                    "Welcome to Insurance Co",
                    CommunicationDetail::Email {
                        content: "Welcome to our insurance company!".to_string(),
                    },
                );
            })
            .unwrap();

        store
            .update(
                ClientId::new(1),
                ClientPatch {
                    name: Some("John A. Doe".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let client = store.find(ClientId::new(1)).unwrap();
        assert_eq!(client.name, "John A. Doe");
        assert_eq!(client.kyc_documents.len(), 1);
        assert_eq!(client.communications.len(), 1);
    }

    #[test]
    fn test_policy_links_are_ordered_and_unique() {
        let mut client = Client::placeholder(ClientId::new(1));
        client.link_policy(PolicyId::new(101));
        client.link_policy(PolicyId::new(102));
        client.link_policy(PolicyId::new(101));

        assert_eq!(client.policy_ids, vec![PolicyId::new(101), PolicyId::new(102)]);
    }
}

mod query_tests {
    use super::*;

    // === Search and Filtering ===

    fn seeded_store() -> EntityStore<Client> {
        let mut store = EntityStore::new();
        store
            .add(draft("John Doe", "john@example.com", "123-456-7890"))
            .unwrap();
        store
            .add(draft("Jane Smith", "jane@example.com", "234-567-8901"))
            .unwrap();
        store
            .add(ClientDraft {
                status: Some(ClientStatus::Inactive),
                ..draft("Robert Johnson", "robert@example.com", "345-678-9012")
            })
            .unwrap();
        store
    }

    #[test]
    fn test_list_with_query_keeps_insertion_order() {
        let store = seeded_store();
        let query = ClientQuery::new().with_search("j");

        let names: Vec<&str> = store
            .list(|client| query.matches(client))
            .map(|client| client.name.as_str())
            .collect();

        assert_eq!(names, vec!["John Doe", "Jane Smith", "Robert Johnson"]);
    }

    #[test]
    fn test_status_filter_narrows_results() {
        let store = seeded_store();
        let query = ClientQuery::new().with_status(ClientStatus::Inactive);

        let matches: Vec<&Client> = store.list(|client| query.matches(client)).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Robert Johnson");
    }

    #[test]
    fn test_combined_query_is_restartable() {
        let store = seeded_store();
        let query = ClientQuery::new()
            .with_search("smith")
            .with_status(ClientStatus::Active);

        let first: Vec<ClientId> = store
            .list(|client| query.matches(client))
            .map(|client| client.id)
            .collect();
        let second: Vec<ClientId> = store
            .list(|client| query.matches(client))
            .map(|client| client.id)
            .collect();

        assert_eq!(first, vec![ClientId::new(2)]);
        assert_eq!(first, second);
    }
}

mod serde_tests {
    use super::*;

    // === Wire Shape ===

    #[test]
    fn test_client_serializes_in_camel_case() {
        let mut client = Client::from_draft(
            ClientId::new(1),
            ClientDraft {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "123-456-7890".to_string(),
                address: Some("123 Main St, Anytown, USA".to_string()),
                dob: Some(date(1985, 5, 15)),
                occupation: Some("Software Engineer".to_string()),
                join_date: Some(date(2022, 3, 10)),
                ..Default::default()
            },
        );
        client.link_policy(PolicyId::new(101));

        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "Active");
        assert_eq!(json["joinDate"], "2022-03-10");
        assert_eq!(json["policyIds"][0], 101);
    }

    #[test]
    fn test_list_row_without_collections_deserializes() {
        // List screens carry only the profile fields.
        let json = r#"{
            "id": 2,
            "name": "Jane Smith",
            "email": "jane@example.com",
            "phone": "234-567-8901",
            "status": "Active",
            "address": null,
            "dob": null,
            "occupation": null,
            "joinDate": null
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, ClientId::new(2));
        assert!(client.kyc_documents.is_empty());
        assert!(client.policy_ids.is_empty());
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: ClientPatch = serde_json::from_str(r#"{"phone": "999-999-9999"}"#).unwrap();
        assert_eq!(patch.phone.as_deref(), Some("999-999-9999"));
        assert!(patch.name.is_none());
        assert!(patch.status.is_none());
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1950i32..2030, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #[test]
        fn prop_age_is_monotone_in_the_observation_date(dob in any_date(), a in any_date(), b in any_date()) {
            let mut client = Client::placeholder(ClientId::new(1));
            client.dob = Some(dob);

            let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(client.age_on(earlier).unwrap() <= client.age_on(later).unwrap());
        }

        #[test]
        fn prop_linking_then_unlinking_restores_holdings(ids in prop::collection::vec(1u32..50, 0..10), extra in 50u32..100) {
            let mut client = Client::placeholder(ClientId::new(1));
            for &raw in &ids {
                client.link_policy(PolicyId::new(raw));
            }
            let before = client.policy_ids.clone();

            client.link_policy(PolicyId::new(extra));
            client.unlink_policy(PolicyId::new(extra));

            prop_assert_eq!(client.policy_ids, before);
        }

        #[test]
        fn prop_search_matching_is_case_insensitive(name in "[A-Za-z]{2,12}") {
            let mut client = Client::placeholder(ClientId::new(1));
            client.name = name.clone();

            let upper = ClientQuery::new().with_search(name.to_uppercase());
            let lower = ClientQuery::new().with_search(name.to_lowercase());
            prop_assert!(upper.matches(&client));
            prop_assert!(lower.matches(&client));
        }
    }
}
