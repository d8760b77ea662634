//! Protocol capability and the fixed allow-list of versions.
//!
//! A [`Protocol`] is a stateless value identified by its header. The
//! set of trusted protocols is the closed enum [`ProtocolVersion`]; any
//! other type implementing [`Protocol`] can be constructed by callers
//! but is never accepted by [`is_valid`].

use std::any::Any;
use std::fmt;

use crate::constants::{ALLOWED_PROTOCOL_COUNT, V1_HEADER, V2_HEADER, V3_HEADER, V4_HEADER};

pub mod allow_list;
pub mod resolver;
pub mod versions;

pub use allow_list::{is_valid, throw_if_unsupported, version_of};
pub use resolver::{header_cache_builds, is_header_cache_built, protocol_from_header_part};
pub use versions::{Version1, Version2, Version3, Version4};

/// Minimal contract every protocol implementation satisfies.
///
/// `header()` must be the same for every instance of a type and distinct
/// from every other protocol's header. The `Any` bound lets the
/// allow-list identify the concrete type; implementing this trait does
/// not make a type trusted.
pub trait Protocol: Any + Send + Sync + fmt::Debug + 'static {
    /// Version header as it appears at the start of a token.
    ///
    /// This is the version component only (`"v2"`), never the
    /// `version.purpose` pair (`"v2.public"`); see
    /// [`TokenHeader`](crate::token_header::TokenHeader) for the full prefix.
    fn header(&self) -> &'static str;
}

/// Tag of an allow-listed protocol version.
///
/// Extending the allow-list means adding a variant here, a type in
/// [`versions`], and an entry in [`ProtocolVersion::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProtocolVersion {
    V1,
    V2,
    V3,
    V4,
}

impl ProtocolVersion {
    /// Every allow-listed version, in allow-list order.
    pub const ALL: [ProtocolVersion; ALLOWED_PROTOCOL_COUNT] = [
        ProtocolVersion::V1,
        ProtocolVersion::V2,
        ProtocolVersion::V3,
        ProtocolVersion::V4,
    ];

    /// Header string of this version.
    pub fn header(self) -> &'static str {
        match self {
            ProtocolVersion::V1 => V1_HEADER,
            ProtocolVersion::V2 => V2_HEADER,
            ProtocolVersion::V3 => V3_HEADER,
            ProtocolVersion::V4 => V4_HEADER,
        }
    }

    /// Exact, case-sensitive lookup of a version by header.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.header() == header)
    }

    /// Construct a fresh instance of this version's protocol.
    pub fn instantiate(self) -> Box<dyn Protocol> {
        match self {
            ProtocolVersion::V1 => Box::new(Version1),
            ProtocolVersion::V2 => Box::new(Version2),
            ProtocolVersion::V3 => Box::new(Version3),
            ProtocolVersion::V4 => Box::new(Version4),
        }
    }

    /// True iff `value`'s concrete type is this version's protocol type.
    pub(crate) fn is_type_of(self, value: &dyn Any) -> bool {
        match self {
            ProtocolVersion::V1 => value.is::<Version1>(),
            ProtocolVersion::V2 => value.is::<Version2>(),
            ProtocolVersion::V3 => value.is::<Version3>(),
            ProtocolVersion::V4 => value.is::<Version4>(),
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
