//! Shared types for the Web Push subscription crates.
//!
//! Holds the error type and the content-encoding vocabulary, so that
//! consumers of subscriptions (delivery, persistence) can depend on these
//! without pulling in the subscription factory itself.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod prelude;

pub use encoding::{ContentEncoding, DEFAULT_CONTENT_ENCODING, SUPPORTED_CONTENT_ENCODINGS};
pub use error::{Error, WpResult};

// vim: ts=4
