//! Premium Payment Domain
//!
//! This crate models the premium payments tracked by the back office:
//! what is owed, by whom, against which policy, whether it has been
//! settled, and whether a reminder has gone out.
//!
//! Payments reference their client and policy by id and carry both names
//! denormalized for the list screens. The reminder flag is one-way; once
//! a reminder has been sent it stays sent.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_payment::PaymentStatus;
//!
//! let due = NaiveDate::from_ymd_opt(2022, 8, 1).unwrap();
//! let later = NaiveDate::from_ymd_opt(2022, 8, 15).unwrap();
//!
//! assert_eq!(PaymentStatus::as_of(due, due, false), PaymentStatus::Due);
//! assert_eq!(PaymentStatus::as_of(due, later, false), PaymentStatus::Overdue);
//! assert_eq!(PaymentStatus::as_of(due, later, true), PaymentStatus::Paid);
//! ```

pub mod payment;
pub mod query;
pub mod validation;

pub use payment::{Payment, PaymentDraft, PaymentPatch, PaymentStatus};
pub use query::PaymentQuery;
pub use validation::PaymentValidator;
