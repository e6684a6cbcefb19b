//! Sample dataset for demos and tests
//!
//! Five clients, five policies, and ten premium payments, referentially
//! consistent with each other. The records are built as literals rather
//! than through drafts because the dataset predates the stores: its
//! attachment ids are numbered across the whole book, not per owner.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use store_kernel::{ClientId, PaymentId, PolicyId};

use domain_client::{
    Client, ClientStatus, CommunicationDetail, CommunicationEntry, KycDocument, KycDocumentKind,
};
use domain_payment::{Payment, PaymentStatus};
use domain_policy::{
    PaymentRecord, PaymentRecordStatus, Policy, PolicyDocument, PolicyDocumentKind, PolicyStatus,
    PolicyType, VehicleDetails,
};

use crate::activity::{ActivityEntry, ActivityKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The business date the sample book is pinned to
///
/// Derived statuses and expiry windows are evaluated as of this date in
/// the demo console. Stored statuses stay authoritative either way; a
/// few seeded records deliberately disagree with the derivation.
pub fn sample_business_date() -> NaiveDate {
    date(2022, 8, 25)
}

/// The five sample clients
pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: ClientId::new(1),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            status: ClientStatus::Active,
            address: Some("123 Main St, Anytown, USA".to_string()),
            dob: Some(date(1985, 5, 15)),
            occupation: Some("Software Engineer".to_string()),
            join_date: Some(date(2022, 3, 10)),
            kyc_documents: vec![
                KycDocument {
                    id: 1,
                    name: "ID Proof.pdf".to_string(),
                    kind: KycDocumentKind::IdentityProof,
                    upload_date: date(2022, 3, 10),
                },
                KycDocument {
                    id: 2,
                    name: "Address Proof.pdf".to_string(),
                    kind: KycDocumentKind::AddressProof,
                    upload_date: date(2022, 3, 10),
                },
            ],
            communications: vec![
                CommunicationEntry {
                    id: 1,
                    date: date(2022, 3, 10),
                    subject: "Welcome to Insurance Co".to_string(),
                    detail: CommunicationDetail::Email {
                        content: "Welcome to our insurance company! We are glad to have you \
                                  as our client."
                            .to_string(),
                    },
                },
                CommunicationEntry {
                    id: 2,
                    date: date(2022, 9, 15),
                    subject: "Policy Renewal".to_string(),
                    detail: CommunicationDetail::Call {
                        duration_minutes: 10,
                        notes: "Discussed policy renewal options".to_string(),
                    },
                },
                CommunicationEntry {
                    id: 3,
                    date: date(2022, 10, 5),
                    subject: "Payment Confirmation".to_string(),
                    detail: CommunicationDetail::Email {
                        content: "This email confirms we received your payment for policy \
                                  #LIC001."
                            .to_string(),
                    },
                },
            ],
            policy_ids: vec![PolicyId::new(101), PolicyId::new(102)],
        },
        Client {
            id: ClientId::new(2),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "234-567-8901".to_string(),
            status: ClientStatus::Active,
            address: Some("456 Oak St, Somewhere, USA".to_string()),
            dob: Some(date(1990, 8, 22)),
            occupation: Some("Marketing Manager".to_string()),
            join_date: Some(date(2022, 5, 20)),
            kyc_documents: vec![
                KycDocument {
                    id: 3,
                    name: "Passport.pdf".to_string(),
                    kind: KycDocumentKind::IdentityProof,
                    upload_date: date(2022, 5, 20),
                },
                KycDocument {
                    id: 4,
                    name: "Utility Bill.pdf".to_string(),
                    kind: KycDocumentKind::AddressProof,
                    upload_date: date(2022, 5, 20),
                },
            ],
            communications: vec![
                CommunicationEntry {
                    id: 4,
                    date: date(2022, 5, 20),
                    subject: "Welcome Aboard".to_string(),
                    detail: CommunicationDetail::Email {
                        content: "Thank you for choosing our insurance services!".to_string(),
                    },
                },
                CommunicationEntry {
                    id: 5,
                    date: date(2022, 7, 10),
                    subject: "Claims Inquiry".to_string(),
                    detail: CommunicationDetail::Call {
                        duration_minutes: 15,
                        notes: "Assisted with questions about the claims process".to_string(),
                    },
                },
            ],
            policy_ids: vec![PolicyId::new(103)],
        },
        Client {
            id: ClientId::new(3),
            name: "Robert Johnson".to_string(),
            email: "robert@example.com".to_string(),
            phone: "345-678-9012".to_string(),
            status: ClientStatus::Inactive,
            address: None,
            dob: None,
            occupation: None,
            join_date: None,
            kyc_documents: Vec::new(),
            communications: Vec::new(),
            policy_ids: vec![PolicyId::new(104)],
        },
        Client {
            id: ClientId::new(4),
            name: "Emily Davis".to_string(),
            email: "emily@example.com".to_string(),
            phone: "456-789-0123".to_string(),
            status: ClientStatus::Active,
            address: None,
            dob: None,
            occupation: None,
            join_date: None,
            kyc_documents: Vec::new(),
            communications: Vec::new(),
            policy_ids: vec![PolicyId::new(105)],
        },
        Client {
            id: ClientId::new(5),
            name: "Michael Wilson".to_string(),
            email: "michael@example.com".to_string(),
            phone: "567-890-1234".to_string(),
            status: ClientStatus::Active,
            address: None,
            dob: None,
            occupation: None,
            join_date: None,
            kyc_documents: Vec::new(),
            communications: Vec::new(),
            policy_ids: Vec::new(),
        },
    ]
}

/// The five sample policies
pub fn sample_policies() -> Vec<Policy> {
    vec![
        Policy {
            id: PolicyId::new(101),
            name: "Life Insurance Premium".to_string(),
            policy_type: PolicyType::Life,
            client_id: ClientId::new(1),
            client_name: "John Doe".to_string(),
            start_date: date(2022, 4, 1),
            end_date: date(2042, 4, 1),
            premium: dec!(500),
            status: PolicyStatus::Active,
            description: Some(
                "Comprehensive life insurance policy with additional benefits for critical \
                 illness."
                    .to_string(),
            ),
            coverage_amount: Some(dec!(500000)),
            vehicle_details: None,
            documents: vec![
                PolicyDocument {
                    id: 1,
                    name: "Policy Terms.pdf".to_string(),
                    kind: PolicyDocumentKind::Terms,
                    upload_date: date(2022, 4, 1),
                },
                PolicyDocument {
                    id: 2,
                    name: "Coverage Details.pdf".to_string(),
                    kind: PolicyDocumentKind::Coverage,
                    upload_date: date(2022, 4, 1),
                },
            ],
            payment_history: vec![
                PaymentRecord {
                    id: 1,
                    amount: dec!(500),
                    date: date(2022, 5, 1),
                    status: PaymentRecordStatus::Paid,
                },
                PaymentRecord {
                    id: 2,
                    amount: dec!(500),
                    date: date(2022, 6, 1),
                    status: PaymentRecordStatus::Paid,
                },
                PaymentRecord {
                    id: 3,
                    amount: dec!(500),
                    date: date(2022, 7, 1),
                    status: PaymentRecordStatus::Paid,
                },
                PaymentRecord {
                    id: 4,
                    amount: dec!(500),
                    date: date(2022, 8, 1),
                    status: PaymentRecordStatus::Pending,
                },
            ],
        },
        Policy {
            id: PolicyId::new(102),
            name: "Vehicle Insurance".to_string(),
            policy_type: PolicyType::Vehicle,
            client_id: ClientId::new(1),
            client_name: "John Doe".to_string(),
            start_date: date(2022, 5, 15),
            end_date: date(2023, 5, 15),
            premium: dec!(200),
            status: PolicyStatus::Active,
            description: Some(
                "Comprehensive vehicle insurance covering theft, damage, and third-party \
                 liability."
                    .to_string(),
            ),
            coverage_amount: Some(dec!(25000)),
            vehicle_details: Some(VehicleDetails {
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                year: 2020,
                license_plate: "ABC-1234".to_string(),
            }),
            documents: vec![PolicyDocument {
                id: 3,
                name: "Vehicle Policy Terms.pdf".to_string(),
                kind: PolicyDocumentKind::Terms,
                upload_date: date(2022, 5, 15),
            }],
            payment_history: vec![
                PaymentRecord {
                    id: 5,
                    amount: dec!(200),
                    date: date(2022, 6, 15),
                    status: PaymentRecordStatus::Paid,
                },
                PaymentRecord {
                    id: 6,
                    amount: dec!(200),
                    date: date(2022, 7, 15),
                    status: PaymentRecordStatus::Paid,
                },
            ],
        },
        Policy {
            id: PolicyId::new(103),
            name: "Health Insurance".to_string(),
            policy_type: PolicyType::Health,
            client_id: ClientId::new(2),
            client_name: "Jane Smith".to_string(),
            start_date: date(2022, 6, 1),
            end_date: date(2023, 6, 1),
            premium: dec!(350),
            status: PolicyStatus::Active,
            description: Some(
                "Comprehensive health insurance covering hospitalization, medical procedures, \
                 and prescriptions."
                    .to_string(),
            ),
            coverage_amount: Some(dec!(100000)),
            vehicle_details: None,
            documents: vec![PolicyDocument {
                id: 4,
                name: "Health Policy Terms.pdf".to_string(),
                kind: PolicyDocumentKind::Terms,
                upload_date: date(2022, 6, 1),
            }],
            payment_history: vec![
                PaymentRecord {
                    id: 7,
                    amount: dec!(350),
                    date: date(2022, 7, 1),
                    status: PaymentRecordStatus::Paid,
                },
                PaymentRecord {
                    id: 8,
                    amount: dec!(350),
                    date: date(2022, 8, 1),
                    status: PaymentRecordStatus::Due,
                },
            ],
        },
        Policy {
            id: PolicyId::new(104),
            name: "Building Insurance".to_string(),
            policy_type: PolicyType::Building,
            client_id: ClientId::new(3),
            client_name: "Robert Johnson".to_string(),
            start_date: date(2022, 2, 10),
            end_date: date(2023, 2, 10),
            premium: dec!(600),
            status: PolicyStatus::Expired,
            description: None,
            coverage_amount: None,
            vehicle_details: None,
            documents: Vec::new(),
            payment_history: Vec::new(),
        },
        Policy {
            id: PolicyId::new(105),
            name: "Life Insurance Basic".to_string(),
            policy_type: PolicyType::Life,
            client_id: ClientId::new(4),
            client_name: "Emily Davis".to_string(),
            start_date: date(2022, 8, 22),
            end_date: date(2042, 8, 22),
            premium: dec!(300),
            status: PolicyStatus::Active,
            description: None,
            coverage_amount: None,
            vehicle_details: None,
            documents: Vec::new(),
            payment_history: Vec::new(),
        },
    ]
}

/// The ten sample premium payments
pub fn sample_payments() -> Vec<Payment> {
    let life = |id: u32, due: NaiveDate, status: PaymentStatus, reminder_sent: bool| Payment {
        id: PaymentId::new(id),
        client_id: ClientId::new(1),
        client_name: "John Doe".to_string(),
        policy_id: PolicyId::new(101),
        policy_name: "Life Insurance Premium".to_string(),
        due_date: due,
        amount: dec!(500),
        status,
        reminder_sent,
    };
    let vehicle = |id: u32, due: NaiveDate, status: PaymentStatus, reminder_sent: bool| Payment {
        id: PaymentId::new(id),
        client_id: ClientId::new(1),
        client_name: "John Doe".to_string(),
        policy_id: PolicyId::new(102),
        policy_name: "Vehicle Insurance".to_string(),
        due_date: due,
        amount: dec!(200),
        status,
        reminder_sent,
    };
    let health = |id: u32, due: NaiveDate, status: PaymentStatus, reminder_sent: bool| Payment {
        id: PaymentId::new(id),
        client_id: ClientId::new(2),
        client_name: "Jane Smith".to_string(),
        policy_id: PolicyId::new(103),
        policy_name: "Health Insurance".to_string(),
        due_date: due,
        amount: dec!(350),
        status,
        reminder_sent,
    };

    vec![
        life(1, date(2022, 5, 1), PaymentStatus::Paid, true),
        life(2, date(2022, 6, 1), PaymentStatus::Paid, true),
        life(3, date(2022, 7, 1), PaymentStatus::Paid, true),
        life(4, date(2022, 8, 1), PaymentStatus::Due, false),
        vehicle(5, date(2022, 6, 15), PaymentStatus::Paid, true),
        vehicle(6, date(2022, 7, 15), PaymentStatus::Paid, true),
        vehicle(7, date(2022, 8, 15), PaymentStatus::Due, false),
        health(8, date(2022, 7, 1), PaymentStatus::Paid, true),
        health(9, date(2022, 8, 1), PaymentStatus::Overdue, true),
        Payment {
            id: PaymentId::new(10),
            client_id: ClientId::new(3),
            client_name: "Robert Johnson".to_string(),
            policy_id: PolicyId::new(104),
            policy_name: "Building Insurance".to_string(),
            due_date: date(2022, 8, 10),
            amount: dec!(600),
            status: PaymentStatus::Due,
            reminder_sent: false,
        },
    ]
}

/// The activity feed as of the sample business date, newest first
pub fn sample_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: 1,
            kind: ActivityKind::Client,
            name: "Jane Smith".to_string(),
            action: "New client registered".to_string(),
            date: date(2022, 8, 1),
        },
        ActivityEntry {
            id: 2,
            kind: ActivityKind::Policy,
            name: "Health Insurance".to_string(),
            action: "New policy created for Mike Wilson".to_string(),
            date: date(2022, 7, 30),
        },
        ActivityEntry {
            id: 3,
            kind: ActivityKind::Payment,
            name: "Premium Payment".to_string(),
            action: "Jane Smith paid $350".to_string(),
            date: date(2022, 7, 28),
        },
        ActivityEntry {
            id: 4,
            kind: ActivityKind::Policy,
            name: "Vehicle Insurance".to_string(),
            action: "Policy renewed for John Doe".to_string(),
            date: date(2022, 7, 25),
        },
        ActivityEntry {
            id: 5,
            kind: ActivityKind::Policy,
            name: "Building Insurance".to_string(),
            action: "New policy created for Robert Johnson".to_string(),
            date: date(2022, 7, 20),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_counts() {
        assert_eq!(sample_clients().len(), 5);
        assert_eq!(sample_policies().len(), 5);
        assert_eq!(sample_payments().len(), 10);
        assert_eq!(sample_activity().len(), 5);
    }

    #[test]
    fn test_policy_links_are_consistent_both_ways() {
        let clients = sample_clients();
        let policies = sample_policies();

        for policy in &policies {
            let holder = clients
                .iter()
                .find(|c| c.id == policy.client_id)
                .unwrap_or_else(|| panic!("no holder for policy {}", policy.id));
            assert!(holder.policy_ids.contains(&policy.id));
            assert_eq!(holder.name, policy.client_name);
        }

        let linked: usize = clients.iter().map(|c| c.policy_ids.len()).sum();
        assert_eq!(linked, policies.len());
    }

    #[test]
    fn test_payments_reference_seeded_records() {
        let client_ids: HashSet<_> = sample_clients().iter().map(|c| c.id).collect();
        let policy_ids: HashSet<_> = sample_policies().iter().map(|p| p.id).collect();

        for payment in sample_payments() {
            assert!(client_ids.contains(&payment.client_id));
            assert!(policy_ids.contains(&payment.policy_id));
        }
    }

    #[test]
    fn test_settled_payments_carry_reminders() {
        for payment in sample_payments() {
            if payment.is_settled() {
                assert!(payment.reminder_sent, "payment {} settled without reminder", payment.id);
            }
        }
    }

    #[test]
    fn test_record_ids_run_without_gaps() {
        let client_ids: Vec<u32> = sample_clients().iter().map(|c| c.id.value()).collect();
        assert_eq!(client_ids, vec![1, 2, 3, 4, 5]);

        let policy_ids: Vec<u32> = sample_policies().iter().map(|p| p.id.value()).collect();
        assert_eq!(policy_ids, vec![101, 102, 103, 104, 105]);

        let payment_ids: Vec<u32> = sample_payments().iter().map(|p| p.id.value()).collect();
        assert_eq!(payment_ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_exactly_one_payment_is_overdue() {
        let overdue: Vec<u32> = sample_payments()
            .iter()
            .filter(|p| p.status == PaymentStatus::Overdue)
            .map(|p| p.id.value())
            .collect();
        assert_eq!(overdue, vec![9]);
    }
}
