//! Test utilities for Tessera development.
//!
//! Provides [`init_tracing`] for opting tests into log output and a set of
//! deliberately malformed [`Tiling`](tessera_grid::Tiling) fixtures in
//! [`fixtures`] for exercising grid construction and verification failures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly `tracing` subscriber, once per process.
///
/// Honours `RUST_LOG`; defaults to `warn`. Output goes through the test
/// harness capture, so it only shows for failing tests or `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
