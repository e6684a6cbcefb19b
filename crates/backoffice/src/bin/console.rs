//! Insurance Back-Office - Console Binary
//!
//! This binary loads the back-office application state and walks the
//! dashboard, reports, activity feed, and permission table, logging each
//! figure. It is the smoke tour a presentation layer would render.
//!
//! # Usage
//!
//! ```bash
//! # Run with the bundled sample book
//! cargo run --bin backoffice-console
//!
//! # Start from an empty book as an administrator
//! BACKOFFICE_SEED_SAMPLE_DATA=false BACKOFFICE_DEFAULT_ROLE=admin cargo run --bin backoffice-console
//! ```
//!
//! # Environment Variables
//!
//! * `BACKOFFICE_SEED_SAMPLE_DATA` - Load the sample book on start (default: true)
//! * `BACKOFFICE_DEFAULT_ROLE` - Active role: agent, support, admin (default: agent)
//! * `BACKOFFICE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use backoffice::config::BackOfficeConfig;
use backoffice::{reports, BackOffice, Permission, Role};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the back-office console.
///
/// Initializes logging, loads configuration, builds the application
/// state, and logs the derived views.
///
/// # Errors
///
/// Returns an error if the sample book fails to load, which would mean
/// the bundled dataset carries a duplicate id.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config()?;

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        seed = config.seed_sample_data,
        role = %config.default_role,
        "Starting Insurance Back-Office Console"
    );

    let mut app = build_app(&config)?;
    app.set_role(config.default_role);

    print_dashboard(&app);
    print_reports(&app);
    print_activity(&app);
    print_permissions(&app);

    tracing::info!("Console session complete");
    Ok(())
}

/// Loads configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> Result<BackOfficeConfig, Box<dyn std::error::Error>> {
    // Try to load from environment with BACKOFFICE_ prefix
    let config = BackOfficeConfig::from_env().unwrap_or_else(|_| {
        // Fall back to individual env vars or defaults
        BackOfficeConfig {
            seed_sample_data: std::env::var("BACKOFFICE_SEED_SAMPLE_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            default_role: std::env::var("BACKOFFICE_DEFAULT_ROLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Role::Agent),
            log_level: std::env::var("BACKOFFICE_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
        }
    });

    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the application state, seeded or empty per configuration.
fn build_app(config: &BackOfficeConfig) -> Result<BackOffice, store_kernel::StoreError> {
    if config.seed_sample_data {
        tracing::info!("Loading sample book");
        BackOffice::with_sample_data()
    } else {
        Ok(BackOffice::new(chrono::Utc::now().date_naive()))
    }
}

fn print_dashboard(app: &BackOffice) {
    let snapshot = app.dashboard();
    tracing::info!(
        clients = snapshot.total_clients,
        active_policies = snapshot.active_policies,
        pending_payments = snapshot.pending_payments,
        revenue = %snapshot.total_revenue,
        "Dashboard"
    );
    if let Some(growth) = snapshot.growth_rate {
        tracing::info!(percent = %growth, "Month-over-month revenue growth");
    }
}

fn print_reports(app: &BackOffice) {
    for row in reports::policy_type_distribution(app.policies()) {
        tracing::info!(
            policy_type = row.policy_type.label(),
            count = row.count,
            "Policy distribution"
        );
    }
    for row in reports::premium_payment_analysis(app.payments()) {
        tracing::info!(
            status = row.status.label(),
            count = row.count,
            total = %row.total,
            "Premium payment analysis"
        );
    }
    for row in reports::revenue_by_month(app.payments()) {
        tracing::info!(month = %row.month.format("%Y-%m"), total = %row.total, "Revenue");
    }
    for row in reports::client_acquisition(app.clients()) {
        tracing::info!(
            month = %row.month.format("%Y-%m"),
            joined = row.joined,
            "Client acquisition"
        );
    }
    for row in reports::policy_expirations(app.policies()) {
        tracing::info!(
            month = %row.month.format("%Y-%m"),
            count = row.count,
            premiums = %row.premium_total,
            "Policy expirations"
        );
    }
}

fn print_activity(app: &BackOffice) {
    for entry in app.recent_activity(5) {
        tracing::info!(date = %entry.date, name = %entry.name, "{}", entry.action);
    }
}

fn print_permissions(app: &BackOffice) {
    for permission in Permission::ALL {
        tracing::info!(
            permission = permission.label(),
            granted = app.can(permission),
            "Permission check"
        );
    }
}
