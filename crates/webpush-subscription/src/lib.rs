//! Web Push subscription records
//!
//! A [`Subscription`] is the endpoint a browser registered with its push
//! service, together with the key material and content encoding needed to
//! encrypt messages for it.
//!
//! # Construction
//!
//! - [`Subscription::new`] / [`Subscription::builder`] - typed input
//! - [`Subscription::create`] - loosely-typed JSON input, either flat
//!   (`publicKey`, `authToken`, `contentEncoding`) or in the browser's
//!   `PushSubscription.toJSON()` shape (`keys.p256dh`, `keys.auth`)
//!
//! Records carrying any key material are *keyed*: their content encoding is
//! always one of [`SUPPORTED_CONTENT_ENCODINGS`] and defaults to `aesgcm`.
//! Records without key material keep only the endpoint.
//!
//! Unsupported encodings are rejected at construction, never at send time.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod create;
pub mod subscription;

mod prelude;

pub use builder::SubscriptionBuilder;
pub use subscription::Subscription;
pub use webpush_types::{
	ContentEncoding, Error, WpResult, DEFAULT_CONTENT_ENCODING, SUPPORTED_CONTENT_ENCODINGS,
};

// vim: ts=4
