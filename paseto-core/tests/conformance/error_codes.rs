//! Conformance: error codes and display text are stable.

use paseto_core::errors::{is_valid_error_code, ERROR_CODES};
use paseto_core::PasetoError;

#[test]
fn conformance_error_code_registry_exact_list() {
    assert_eq!(
        ERROR_CODES,
        [
            "EMPTY_COLLECTION",
            "INVALID_VERSION",
            "INVALID_PURPOSE",
            "MALFORMED_HEADER",
        ]
    );
    for code in &ERROR_CODES {
        assert!(is_valid_error_code(code));
    }
}

#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(PasetoError, &str)> = vec![
        (
            PasetoError::EmptyCollection,
            "Empty collection: a protocol collection needs at least one protocol",
        ),
        (
            PasetoError::InvalidVersion {
                header: "v0".into(),
            },
            "Invalid version: unsupported protocol header \"v0\"",
        ),
        (
            PasetoError::InvalidPurpose {
                purpose: "x".into(),
            },
            "Invalid purpose: \"x\"",
        ),
        (
            PasetoError::MalformedHeader("expected `version.purpose.` prefix".into()),
            "Malformed header: expected `version.purpose.` prefix",
        ),
    ];
    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "display drift");
    }
}

#[test]
fn conformance_error_is_std_error() {
    let err = PasetoError::EmptyCollection;
    let _: &dyn std::error::Error = &err;
}
