//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

/// Route `tracing` output through the test harness (safe to call repeatedly)
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// vim: ts=4
