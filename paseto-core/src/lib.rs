//! PASETO core — protocol gatekeeping.
//!
//! This crate decides which protocol versions a token processor may
//! trust. Everything funnels through one fixed allow-list: a header
//! string pulled out of an untrusted token, or a protocol value handed
//! in by a caller, is either an exact member of that list or it is
//! rejected. There is no fallback and no runtime registration.
//!
//! The cryptography of each version lives elsewhere. This crate only
//! knows a protocol by its header and its concrete type.
//!
//! # Module Map
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`constants`] | Header and purpose strings |
//! | [`errors`] | `PasetoError` and stable error codes |
//! | [`protocol`] | `Protocol` trait, version tags, allow-list, resolver |
//! | [`collection`] | Scoped, validated version sets |
//! | [`token_header`] | `version.purpose.` prefix parsing |
//!
//! # Example
//!
//! ```
//! use paseto_core::collection::ProtocolCollection;
//! use paseto_core::protocol::protocol_from_header_part;
//!
//! let accepted = ProtocolCollection::v4();
//! let protocol = protocol_from_header_part("v4").unwrap();
//! assert!(accepted.has(protocol));
//! assert!(protocol_from_header_part("v9").is_err());
//! ```

/// Protocol constants — header and purpose strings.
pub mod constants;

/// Error types for paseto-core operations.
pub mod errors;

/// Protocol capability, allow-list and header resolution.
pub mod protocol;

/// Immutable scoped protocol collections.
pub mod collection;

/// Token header (`version.purpose.`) parsing.
pub mod token_header;

pub use collection::ProtocolCollection;
pub use errors::PasetoError;
pub use protocol::{
    is_valid, protocol_from_header_part, throw_if_unsupported, Protocol, ProtocolVersion,
};
pub use token_header::{Purpose, TokenHeader};
