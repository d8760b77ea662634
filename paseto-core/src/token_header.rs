//! Token header parsing.
//!
//! A token starts with `version.purpose.`, e.g. `v2.public.`. The
//! version component goes through [`protocol_from_header_part`], so it
//! is held to the same allow-list as every other entry point. The
//! payload after the second separator is not inspected.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::constants::{PURPOSE_LOCAL, PURPOSE_PUBLIC, TOKEN_SEPARATOR};
use crate::errors::PasetoError;
use crate::protocol::{protocol_from_header_part, version_of, Protocol, ProtocolVersion};

/// What a token is for: encrypted (`local`) or signed (`public`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Local,
    Public,
}

impl Purpose {
    /// Wire form of this purpose.
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Local => PURPOSE_LOCAL,
            Purpose::Public => PURPOSE_PUBLIC,
        }
    }
}

impl FromStr for Purpose {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PURPOSE_LOCAL => Ok(Purpose::Local),
            PURPOSE_PUBLIC => Ok(Purpose::Public),
            other => {
                warn!(purpose = other, "unknown token purpose");
                Err(PasetoError::InvalidPurpose {
                    purpose: other.to_owned(),
                })
            }
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed `version.purpose.` prefix of a token.
#[derive(Debug, Clone, Copy)]
pub struct TokenHeader {
    protocol: &'static dyn Protocol,
    version: ProtocolVersion,
    purpose: Purpose,
}

impl TokenHeader {
    /// Header for a known version and purpose.
    pub fn new(version: ProtocolVersion, purpose: Purpose) -> Result<Self, PasetoError> {
        Ok(Self {
            protocol: protocol_from_header_part(version.header())?,
            version,
            purpose,
        })
    }

    /// Parse the header of `token`.
    ///
    /// # Errors
    /// - [`PasetoError::MalformedHeader`] if `token` has fewer than three
    ///   `.`-separated components.
    /// - [`PasetoError::InvalidVersion`] if the version is not allow-listed.
    /// - [`PasetoError::InvalidPurpose`] if the purpose is not recognized.
    pub fn parse(token: &str) -> Result<Self, PasetoError> {
        let mut parts = token.splitn(3, TOKEN_SEPARATOR);
        let (Some(version), Some(purpose), Some(_payload)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(PasetoError::MalformedHeader(
                "expected `version.purpose.` prefix".into(),
            ));
        };

        let protocol = protocol_from_header_part(version)?;
        let tag = version_of(protocol).ok_or_else(|| PasetoError::invalid_version(version))?;
        let purpose = purpose.parse()?;

        Ok(Self {
            protocol,
            version: tag,
            purpose,
        })
    }

    /// Canonical protocol instance for this header's version.
    pub fn protocol(&self) -> &'static dyn Protocol {
        self.protocol
    }

    /// Allow-list tag of the token's version.
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Purpose component of the token.
    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    /// Render as a token prefix, e.g. `v2.public.`.
    pub fn to_prefix(&self) -> String {
        format!(
            "{}{sep}{}{sep}",
            self.version,
            self.purpose,
            sep = TOKEN_SEPARATOR
        )
    }
}

impl PartialEq for TokenHeader {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.purpose == other.purpose
    }
}

impl Eq for TokenHeader {}

impl fmt::Display for TokenHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_prefix())
    }
}
