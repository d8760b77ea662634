//! The four allow-listed protocol versions.
//!
//! Each is a zero-sized, stateless marker. The cryptography for a
//! version is implemented by its own crate; here a version is only its
//! header and its type identity.

use super::{Protocol, ProtocolVersion};

macro_rules! protocol_version {
    ($(#[$doc:meta])* $name:ident => $tag:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            /// Allow-list tag of this protocol.
            pub const VERSION: ProtocolVersion = ProtocolVersion::$tag;
        }

        impl Protocol for $name {
            fn header(&self) -> &'static str {
                Self::VERSION.header()
            }
        }
    };
}

protocol_version!(
    /// Version 1: AES-256-CTR + HMAC-SHA384 (local), RSA-PSS (public).
    Version1 => V1
);
protocol_version!(
    /// Version 2: XChaCha20-Poly1305 (local), Ed25519 (public).
    Version2 => V2
);
protocol_version!(
    /// Version 3: AES-256-CTR + HMAC-SHA384 (local), ECDSA P-384 (public).
    Version3 => V3
);
protocol_version!(
    /// Version 4: XChaCha20 + BLAKE2b-MAC (local), Ed25519 (public).
    Version4 => V4
);
