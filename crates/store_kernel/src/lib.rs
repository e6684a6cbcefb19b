//! Store Kernel - Foundational types for the insurance back-office
//!
//! This crate provides the building blocks shared by all entity domains:
//! - Sequential record identifiers assigned by the max+1 rule
//! - A generic, insertion-ordered entity store with deterministic CRUD
//! - Field-level validation reporting
//! - The common error type surfaced by every mutating operation

pub mod error;
pub mod identifiers;
pub mod store;
pub mod validation;

pub use error::StoreError;
pub use identifiers::{next_raw_id, ClientId, PaymentId, PolicyId, SequentialId, FIRST_RECORD_ID};
pub use store::{EntityStore, Record};
pub use validation::{FieldViolation, ValidationReport};
