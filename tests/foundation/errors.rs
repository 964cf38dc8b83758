//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use parley_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_document() {
    let err = Error::invalid_document("expected an object");
    assert!(matches!(err.kind, ErrorKind::InvalidDocument(_)));
    assert!(format!("{err}").contains("expected an object"));
}

#[test]
fn error_rewrite_limit() {
    let err = Error::rewrite_limit("reduce", 512);
    assert!(err.is_rewrite_limit());
    let msg = format!("{err}");
    assert!(msg.contains("512"));
    assert!(msg.contains("reduce"));
}

#[test]
fn error_input_too_long() {
    let err = Error::input_too_long(60, 48);
    assert!(matches!(
        err.kind,
        ErrorKind::InputTooLong {
            words: 60,
            limit: 48
        }
    ));
    assert!(!err.is_rewrite_limit());
}

#[test]
fn error_unknown_entity() {
    let err = Error::unknown_entity("player", "nobody");
    let msg = format!("{err}");
    assert!(msg.contains("player"));
    assert!(msg.contains("nobody"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::rewrite_limit("refactor", 2).with_context(
        ErrorContext::new()
            .with_source("sentence")
            .with_input("1 2 3"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.to_string(), "at sentence while parsing \"1 2 3\"");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::invalid_document("x"));
}
