//! Conformance harness — default-deny protocol gatekeeping.
//!
//! Invariant coverage:
//! - Allow-list acceptance and spoof rejection
//! - Collection construction and per-factory scoping
//! - Header resolution: single cache build, exact match
//! - Token header parsing against scoped collections
//! - Error code registry stability

mod allow_list;
mod error_codes;
mod token_headers;

/// Route rejection events to the test writer; `RUST_LOG=paseto_core=warn`
/// shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
