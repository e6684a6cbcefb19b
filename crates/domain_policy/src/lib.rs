//! Policy Administration Domain
//!
//! This crate models insurance policies as the back office manages them:
//! the coverage record itself, its lifecycle status, the documents filed
//! against it, and the payment history shown on the policy detail screen.
//!
//! # Lifecycle
//!
//! A policy's stored status is what staff have set it to. The calendar
//! view of the same policy is available through [`PolicyStatus::as_of`],
//! which derives Pending / Active / Expired purely from the coverage
//! period, so reports never depend on stale stored state.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_policy::PolicyStatus;
//!
//! let start = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2042, 4, 1).unwrap();
//!
//! let before = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
//! assert_eq!(PolicyStatus::as_of(start, end, before), PolicyStatus::Pending);
//!
//! let during = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! assert_eq!(PolicyStatus::as_of(start, end, during), PolicyStatus::Active);
//! ```

pub mod documents;
pub mod policy;
pub mod query;
pub mod validation;

pub use documents::{PaymentRecord, PaymentRecordStatus, PolicyDocument, PolicyDocumentKind};
pub use policy::{Policy, PolicyDraft, PolicyPatch, PolicyStatus, PolicyType, VehicleDetails};
pub use query::PolicyQuery;
pub use validation::PolicyValidator;
