//! Conformance: allow-list membership is an exact type check.

use paseto_core::protocol::{Version1, Version2, Version3, Version4};
use paseto_core::{is_valid, throw_if_unsupported, PasetoError, Protocol, ProtocolVersion};

/// Caller-defined protocol that copies an allow-listed header.
#[derive(Debug, Default)]
struct Impersonator;

impl Protocol for Impersonator {
    fn header(&self) -> &'static str {
        "v4"
    }
}

/// Caller-defined protocol with a header of its own.
#[derive(Debug, Default)]
struct Homebrew;

impl Protocol for Homebrew {
    fn header(&self) -> &'static str {
        "v5"
    }
}

#[test]
fn conformance_every_allow_listed_variant_is_valid() {
    assert!(is_valid(&Version1::default()));
    assert!(is_valid(&Version2::default()));
    assert!(is_valid(&Version3::default()));
    assert!(is_valid(&Version4::default()));
    for version in ProtocolVersion::ALL {
        assert!(is_valid(&*version.instantiate()), "{version} rejected");
    }
}

#[test]
fn conformance_foreign_types_are_invalid() {
    crate::init_tracing();
    assert!(!is_valid(&Impersonator));
    assert!(!is_valid(&Homebrew));
}

#[test]
fn conformance_throw_if_unsupported_reports_header() {
    assert_eq!(
        throw_if_unsupported(&Impersonator),
        Err(PasetoError::InvalidVersion {
            header: "v4".into()
        })
    );
    assert_eq!(
        throw_if_unsupported(&Homebrew),
        Err(PasetoError::InvalidVersion {
            header: "v5".into()
        })
    );
    assert_eq!(throw_if_unsupported(&Version4), Ok(()));
}

#[test]
fn conformance_headers_pairwise_distinct() {
    let mut seen = std::collections::HashSet::new();
    for version in ProtocolVersion::ALL {
        let header = version.instantiate().header();
        assert!(seen.insert(header), "duplicate header: {header}");
    }
    assert_eq!(seen.len(), paseto_core::constants::ALLOWED_PROTOCOL_COUNT);
}
