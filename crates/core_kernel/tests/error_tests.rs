//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::period::{PeriodError, PeriodKey};
use core_kernel::Timezone;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing config");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "Missing config"),
    }
}

#[test]
fn test_invalid_timezone_is_configuration_error() {
    let error = Timezone::parse("Mars/Olympus").unwrap_err();
    let display = format!("{}", error);

    assert!(display.contains("Configuration error"));
    assert!(display.contains("Mars/Olympus"));
}

#[test]
fn test_period_error_display() {
    let error = "2024-00".parse::<PeriodKey>().unwrap_err();
    assert_eq!(error, PeriodError::InvalidMonth(0));
    assert!(error.to_string().contains("expected 1-12"));
}
