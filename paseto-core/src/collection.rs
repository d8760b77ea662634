//! Scoped protocol collections.
//!
//! A [`ProtocolCollection`] states which versions a call-site accepts.
//! It is validated once at construction and never changes afterwards,
//! so it can be shared freely between threads.
//!
//! Membership is local to the collection: `ProtocolCollection::v1()`
//! does not accept version 2 even though version 2 is allow-listed.

use tracing::warn;

use crate::errors::PasetoError;
use crate::protocol::{throw_if_unsupported, version_of, Protocol, ProtocolVersion};
use crate::token_header::TokenHeader;

/// Immutable, non-empty, ordered set of allow-listed protocols.
#[derive(Debug)]
pub struct ProtocolCollection {
    protocols: Vec<Box<dyn Protocol>>,
    // Tags of `protocols`, same order.
    versions: Vec<ProtocolVersion>,
}

impl ProtocolCollection {
    /// Build a collection from caller-supplied protocols.
    ///
    /// Construction is all-or-nothing: either every protocol is
    /// allow-listed and the collection is returned, or nothing is.
    ///
    /// # Errors
    /// - [`PasetoError::EmptyCollection`] if `protocols` is empty.
    /// - [`PasetoError::InvalidVersion`] for the first protocol that is
    ///   not allow-listed.
    pub fn new<I>(protocols: I) -> Result<Self, PasetoError>
    where
        I: IntoIterator<Item = Box<dyn Protocol>>,
    {
        let protocols: Vec<Box<dyn Protocol>> = protocols.into_iter().collect();
        if protocols.is_empty() {
            warn!("rejected empty protocol collection");
            return Err(PasetoError::EmptyCollection);
        }
        for protocol in &protocols {
            throw_if_unsupported(&**protocol)?;
        }
        let versions = protocols
            .iter()
            .filter_map(|protocol| version_of(&**protocol))
            .collect();
        Ok(Self {
            protocols,
            versions,
        })
    }

    /// Build a collection from allow-list tags. Infallible because every
    /// tag names an allow-listed version.
    fn from_versions(versions: &[ProtocolVersion]) -> Self {
        Self {
            protocols: versions.iter().map(|v| v.instantiate()).collect(),
            versions: versions.to_vec(),
        }
    }

    /// Every allow-listed version, in allow-list order.
    pub fn default_set() -> Self {
        Self::from_versions(&ProtocolVersion::ALL)
    }

    /// Only version 1.
    pub fn v1() -> Self {
        Self::from_versions(&[ProtocolVersion::V1])
    }

    /// Only version 2.
    pub fn v2() -> Self {
        Self::from_versions(&[ProtocolVersion::V2])
    }

    /// Only version 3.
    pub fn v3() -> Self {
        Self::from_versions(&[ProtocolVersion::V3])
    }

    /// Only version 4.
    pub fn v4() -> Self {
        Self::from_versions(&[ProtocolVersion::V4])
    }

    /// Returns `true` iff a protocol of the same version is in this
    /// collection. Foreign protocol types are never members.
    pub fn has(&self, protocol: &dyn Protocol) -> bool {
        version_of(protocol).is_some_and(|version| self.versions.contains(&version))
    }

    /// Fail with [`PasetoError::InvalidVersion`] unless [`has`](Self::has).
    pub fn require(&self, protocol: &dyn Protocol) -> Result<(), PasetoError> {
        if self.has(protocol) {
            return Ok(());
        }
        warn!(
            header = protocol.header(),
            accepted = ?self.versions,
            "protocol not accepted by this collection"
        );
        Err(PasetoError::invalid_version(protocol.header()))
    }

    /// Parse a token's header and check its version is accepted here.
    ///
    /// # Errors
    /// Any error from [`TokenHeader::parse`], or
    /// [`PasetoError::InvalidVersion`] if the version is allow-listed but
    /// outside this collection.
    pub fn parse_header(&self, token: &str) -> Result<TokenHeader, PasetoError> {
        let header = TokenHeader::parse(token)?;
        self.require(header.protocol())?;
        Ok(header)
    }

    /// Version tags, in collection order.
    pub fn versions(&self) -> &[ProtocolVersion] {
        &self.versions
    }

    /// Protocols in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Protocol> + '_ {
        self.protocols.iter().map(|protocol| &**protocol)
    }

    /// Number of protocols in the collection.
    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    /// Always `false`; empty collections cannot be built.
    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}

impl Default for ProtocolCollection {
    fn default() -> Self {
        Self::default_set()
    }
}

impl Clone for ProtocolCollection {
    fn clone(&self) -> Self {
        Self::from_versions(&self.versions)
    }
}

impl PartialEq for ProtocolCollection {
    fn eq(&self, other: &Self) -> bool {
        self.versions == other.versions
    }
}

impl Eq for ProtocolCollection {}
