//! Error types for paseto-core.
//!
//! Every error means "do not proceed with this token". Nothing here is a
//! warning and nothing is retried.

/// Unified error type for all paseto-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasetoError {
    /// A protocol collection was built from zero protocols.
    #[error("Empty collection: a protocol collection needs at least one protocol")]
    EmptyCollection,

    /// A protocol or header string is outside the accepted set.
    #[error("Invalid version: unsupported protocol header {header:?}")]
    InvalidVersion {
        /// Header of the rejected protocol, for diagnostics.
        header: String,
    },

    /// The purpose component of a token header is not recognized.
    #[error("Invalid purpose: {purpose:?}")]
    InvalidPurpose {
        /// The rejected purpose string.
        purpose: String,
    },

    /// The token does not start with a `version.purpose.` prefix.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),
}

impl PasetoError {
    pub(crate) fn invalid_version(header: &str) -> Self {
        PasetoError::InvalidVersion {
            header: header.to_owned(),
        }
    }

    /// Stable identifier for this error kind, one of [`ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            PasetoError::EmptyCollection => "EMPTY_COLLECTION",
            PasetoError::InvalidVersion { .. } => "INVALID_VERSION",
            PasetoError::InvalidPurpose { .. } => "INVALID_PURPOSE",
            PasetoError::MalformedHeader(_) => "MALFORMED_HEADER",
        }
    }
}

// ── Error Code Registry ──────────────────────────────────────────────

/// Canonical error code registry.
///
/// Codes are stable across releases so callers can match on them in
/// logs and metrics without depending on display text.
pub const ERROR_CODES: [&str; 4] = [
    "EMPTY_COLLECTION",
    "INVALID_VERSION",
    "INVALID_PURPOSE",
    "MALFORMED_HEADER",
];

/// Returns `true` if the given string is a canonical error code.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
