//! Error Extension Tests

use std::io;
use switchboard_domain::error::{Error, Result};
use switchboard_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context_is_configuration_error() {
    let parse_error = "not a number".parse::<u16>().unwrap_err();

    let result: Result<u16> = Err(parse_error).config_context("Invalid port");

    let error = result.unwrap_err();
    assert!(error.is_configuration());
    assert!(error.to_string().contains("Invalid port"));
}

#[test]
fn test_backend_context_names_backend() {
    let io_error = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");

    let result: Result<()> = Err(io_error).backend_context("redis", "Cannot reach cache");

    match result {
        Err(Error::BackendConstruction {
            backend, source, ..
        }) => {
            assert_eq!(backend, "redis");
            assert!(source.is_some());
        }
        other => panic!("Expected BackendConstruction error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);
}
