//! Back-Office Application Layer
//!
//! This crate wires the entity stores into one application root and adds
//! everything the back-office screens share on top of them.
//!
//! # Architecture
//!
//! - **App**: `BackOffice`, the composition root owning the client,
//!   policy, and payment stores plus session state
//! - **Reports**: pure aggregations derived from the live stores
//! - **Access**: the role-permission table behind the settings screen
//! - **Settings**: workspace preference toggles
//! - **Activity**: the recent-activity feed entries
//! - **Seed**: the sample book used by demos and tests
//! - **Config**: environment-driven configuration for the console binary
//!
//! # Example
//!
//! ```rust
//! use backoffice::BackOffice;
//!
//! let app = BackOffice::with_sample_data()?;
//!
//! let snapshot = app.dashboard();
//! assert_eq!(snapshot.total_clients, 5);
//! assert_eq!(snapshot.active_policies, 4);
//! # Ok::<(), store_kernel::StoreError>(())
//! ```

pub mod access;
pub mod activity;
pub mod app;
pub mod config;
pub mod reports;
pub mod seed;
pub mod settings;

pub use access::{Permission, Role};
pub use activity::{ActivityEntry, ActivityKind};
pub use app::BackOffice;
pub use config::BackOfficeConfig;
pub use reports::DashboardSnapshot;
pub use settings::{Preference, PreferenceSet};
