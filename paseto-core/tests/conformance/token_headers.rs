//! Conformance: token headers are checked against scoped collections.

use paseto_core::{PasetoError, ProtocolCollection, ProtocolVersion, Purpose, TokenHeader};

#[test]
fn conformance_scoped_collection_accepts_own_version() {
    let header = ProtocolCollection::v4()
        .parse_header("v4.local.payload")
        .unwrap();
    assert_eq!(header.version(), ProtocolVersion::V4);
    assert_eq!(header.purpose(), Purpose::Local);
}

#[test]
fn conformance_scoped_collection_rejects_downgrade() {
    let err = ProtocolCollection::v2()
        .parse_header("v1.local.payload")
        .unwrap_err();
    assert_eq!(
        err,
        PasetoError::InvalidVersion {
            header: "v1".into()
        }
    );
}

#[test]
fn conformance_default_collection_accepts_every_prefix() {
    let collection = ProtocolCollection::default();
    for version in ProtocolVersion::ALL {
        for purpose in [Purpose::Local, Purpose::Public] {
            let prefix = TokenHeader::new(version, purpose).unwrap().to_prefix();
            let token = format!("{prefix}body");
            assert!(collection.parse_header(&token).is_ok(), "{token}");
        }
    }
}

#[test]
fn conformance_malformed_and_unknown_fail_closed() {
    let collection = ProtocolCollection::default();
    assert_eq!(
        collection.parse_header("v2.public").unwrap_err().code(),
        "MALFORMED_HEADER"
    );
    assert_eq!(
        collection.parse_header("v7.public.x").unwrap_err().code(),
        "INVALID_VERSION"
    );
    assert_eq!(
        collection.parse_header("v2.private.x").unwrap_err().code(),
        "INVALID_PURPOSE"
    );
}
