//! Header resolution — untrusted header string to canonical protocol.
//!
//! The cache holds one instance per allow-listed version and is built on
//! first use. `OnceLock` runs the build exactly once; concurrent first
//! callers block until it completes, so no caller sees a partial map.
//! After that, lookups are plain reads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::{Protocol, ProtocolVersion};
use crate::errors::PasetoError;

type HeaderCache = HashMap<&'static str, Box<dyn Protocol>>;

static HEADER_CACHE: OnceLock<HeaderCache> = OnceLock::new();

static HEADER_CACHE_BUILDS: AtomicUsize = AtomicUsize::new(0);

fn header_cache() -> &'static HeaderCache {
    HEADER_CACHE.get_or_init(|| {
        let cache: HeaderCache = ProtocolVersion::ALL
            .into_iter()
            .map(|version| (version.header(), version.instantiate()))
            .collect();
        let builds = HEADER_CACHE_BUILDS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(entries = cache.len(), builds, "built protocol header cache");
        cache
    })
}

/// Whether the header cache has been built in this process.
pub fn is_header_cache_built() -> bool {
    HEADER_CACHE.get().is_some()
}

/// Number of times the header cache has been built. At most 1.
pub fn header_cache_builds() -> usize {
    HEADER_CACHE_BUILDS.load(Ordering::SeqCst)
}

/// Resolve a header string to its canonical protocol instance.
///
/// Matching is exact string equality. The returned reference is the
/// same for the same header for the lifetime of the process.
///
/// # Errors
/// [`PasetoError::InvalidVersion`] if `header_part` names no allow-listed
/// protocol. There is no fallback.
pub fn protocol_from_header_part(header_part: &str) -> Result<&'static dyn Protocol, PasetoError> {
    match header_cache().get(header_part) {
        Some(protocol) => Ok(&**protocol),
        None => {
            warn!(header = header_part, "unknown protocol header");
            Err(PasetoError::invalid_version(header_part))
        }
    }
}
