//! Immutable push subscription record

use serde::{Deserialize, Serialize};

use crate::builder::SubscriptionBuilder;
use crate::prelude::*;

/// A push endpoint registration, optionally carrying key material
///
/// Fields are only readable through accessors; a `Subscription` never
/// changes after construction. Serializes to the flat camelCase shape read by
/// [`Subscription::create`], which deserialization goes through. Ids, the
/// local key and the shared secret are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Subscription {
	pub(crate) endpoint: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) public_key: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) auth_token: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) content_encoding: Option<ContentEncoding>,
	#[serde(skip_serializing)]
	pub(crate) local_key: Option<String>,
	#[serde(skip_serializing)]
	pub(crate) shared_secret: Option<String>,
	#[serde(skip_serializing)]
	pub(crate) id: Option<i64>,
	#[serde(skip_serializing)]
	pub(crate) log_id: Option<i64>,
}

impl Subscription {
	/// Construct a subscription from typed parts
	///
	/// Key material is kept only if at least one of `public_key`, `auth_token`
	/// or `content_encoding` is non-empty. Otherwise the result is an
	/// endpoint-only record and every other argument is discarded.
	///
	/// An empty or missing `content_encoding` on a keyed record becomes
	/// `aesgcm`. Any other value must be a supported encoding.
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		endpoint: impl Into<String>,
		public_key: Option<&str>,
		auth_token: Option<&str>,
		id: i64,
		log_id: i64,
		local_key: Option<&str>,
		shared_secret: Option<&str>,
		content_encoding: Option<&str>,
	) -> WpResult<Subscription> {
		SubscriptionBuilder {
			endpoint: endpoint.into(),
			public_key: public_key.map(str::to_string),
			auth_token: auth_token.map(str::to_string),
			content_encoding: content_encoding.map(str::to_string),
			id: Some(id),
			log_id: Some(log_id),
			local_key: local_key.map(str::to_string),
			shared_secret: shared_secret.map(str::to_string),
		}
		.build()
	}

	/// Create a builder for constructing a Subscription
	pub fn builder(endpoint: impl Into<String>) -> SubscriptionBuilder {
		SubscriptionBuilder::new(endpoint)
	}

	/// Endpoint-only record without key material
	pub fn endpoint_only(endpoint: impl Into<String>) -> Subscription {
		Subscription {
			endpoint: endpoint.into(),
			public_key: None,
			auth_token: None,
			content_encoding: None,
			local_key: None,
			shared_secret: None,
			id: None,
			log_id: None,
		}
	}

	/// Push service URL messages are delivered to
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Subscriber's P-256 ECDH public key (usually base64url)
	pub fn public_key(&self) -> Option<&str> {
		self.public_key.as_deref()
	}

	/// Shared authentication secret
	pub fn auth_token(&self) -> Option<&str> {
		self.auth_token.as_deref()
	}

	pub fn content_encoding(&self) -> Option<ContentEncoding> {
		self.content_encoding
	}

	pub fn id(&self) -> Option<i64> {
		self.id
	}

	/// Log identifier of this subscription
	///
	/// Reports the `id` value. The separately supplied log id is stored but
	/// not exposed.
	pub fn log_id(&self) -> Option<i64> {
		self.id
	}

	pub fn local_key(&self) -> Option<&str> {
		self.local_key.as_deref()
	}

	pub fn shared_secret(&self) -> Option<&str> {
		self.shared_secret.as_deref()
	}

	/// Whether key material was supplied at construction
	pub fn is_keyed(&self) -> bool {
		self.content_encoding.is_some()
	}
}


// vim: ts=4
