//! Unit tests for domain error types

use switchboard_domain::Error;

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Redis config required");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Redis config required");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(error.is_configuration());
    assert!(!error.is_retryable());
}

#[test]
fn test_unsupported_type_error() {
    let error = Error::unsupported_type("currency");
    assert_eq!(error.to_string(), "Unsupported field type: currency");
    assert!(error.is_configuration());
}

#[test]
fn test_backend_construction_error_is_retryable() {
    let error = Error::backend_construction("redis", "connection refused");
    match &error {
        Error::BackendConstruction {
            backend, message, ..
        } => {
            assert_eq!(backend, "redis");
            assert_eq!(message, "connection refused");
        }
        _ => panic!("Expected BackendConstruction error"),
    }
    assert!(error.is_retryable());
    assert!(!error.is_configuration());
}

#[test]
fn test_backend_construction_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::backend_construction_with_source("twilio", "client build failed", io);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
