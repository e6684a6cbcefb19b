//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for store errors that give
//! more meaningful failure messages than standard assertions.

use store_kernel::StoreError;

/// Asserts that an error is a validation failure naming the given field
///
/// # Arguments
///
/// * `error` - The error returned by a store operation
/// * `field` - The camelCase field name a violation must be recorded for
///
/// # Panics
///
/// Panics if the error is not `StoreError::Validation` or no violation
/// names the field.
pub fn assert_validation_error(error: &StoreError, field: &str) {
    let report = error
        .report()
        .unwrap_or_else(|| panic!("Expected validation error, got: {error}"));

    assert!(
        report.has_violation_for(field),
        "No violation recorded for field '{}': {}",
        field,
        report
    );
}

/// Asserts that an error is a not-found failure
pub fn assert_not_found(error: &StoreError) {
    assert!(
        error.is_not_found(),
        "Expected not-found error, got: {error}"
    );
}

/// Asserts that an error is a delete-restriction conflict
pub fn assert_conflict(error: &StoreError) {
    assert!(error.is_conflict(), "Expected conflict error, got: {error}");
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}
