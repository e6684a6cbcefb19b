//! Client Management Domain
//!
//! This crate models the people the back office serves: client profiles,
//! the KYC (Know Your Customer) documents collected during onboarding, and
//! the running log of calls and emails exchanged with each client.
//!
//! # Aggregate Shape
//!
//! A [`Client`] is a self-contained record. Contact details and profile
//! fields live directly on it, while KYC documents and communication
//! entries are owned sub-collections that travel with the client. Policies
//! are separate records; a client only carries their ids.
//!
//! # Examples
//!
//! ```rust
//! use domain_client::{Client, ClientDraft, ClientStatus};
//! use store_kernel::{ClientId, Record};
//!
//! let draft = ClientDraft {
//!     name: "John Doe".to_string(),
//!     email: "john@example.com".to_string(),
//!     phone: "123-456-7890".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = Client::from_draft(ClientId::new(1), draft);
//! assert_eq!(client.status, ClientStatus::Active);
//! assert!(client.validate().is_ok());
//! ```

pub mod client;
pub mod communication;
pub mod kyc;
pub mod query;
pub mod validation;

pub use client::{Client, ClientDraft, ClientPatch, ClientStatus};
pub use communication::{CommunicationDetail, CommunicationEntry};
pub use kyc::{KycDocument, KycDocumentKind};
pub use query::ClientQuery;
pub use validation::ClientValidator;
