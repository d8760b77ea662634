//! Allow-list membership checks.
//!
//! Membership is decided by concrete type, never by `header()`. A
//! caller-defined type that reports `"v2"` is still a foreign type and
//! is rejected.

use std::any::Any;

use tracing::warn;

use super::{Protocol, ProtocolVersion};
use crate::errors::PasetoError;

/// Allow-list tag of `protocol`, or `None` if its type is not allow-listed.
pub fn version_of(protocol: &dyn Protocol) -> Option<ProtocolVersion> {
    let any: &dyn Any = protocol;
    ProtocolVersion::ALL
        .into_iter()
        .find(|version| version.is_type_of(any))
}

/// Returns `true` iff `protocol` is one of the allow-listed versions.
pub fn is_valid(protocol: &dyn Protocol) -> bool {
    version_of(protocol).is_some()
}

/// Fail with [`PasetoError::InvalidVersion`] unless `protocol` is allow-listed.
///
/// # Errors
/// The error carries `protocol.header()` for diagnostics.
pub fn throw_if_unsupported(protocol: &dyn Protocol) -> Result<(), PasetoError> {
    if is_valid(protocol) {
        return Ok(());
    }
    warn!(header = protocol.header(), "rejected protocol outside allow-list");
    Err(PasetoError::invalid_version(protocol.header()))
}
