//! Fluent construction of subscriptions
//!
//! Every construction path ends in [`SubscriptionBuilder::build`], which is the
//! only place keyed/bare mode is decided and the content encoding validated.

use crate::prelude::*;
use crate::subscription::Subscription;

/// Builder for Subscription with fluent API
///
/// All optional parts start unset, so `Subscription::builder(endpoint).build()`
/// yields an endpoint-only record.
#[derive(Debug, Clone)]
pub struct SubscriptionBuilder {
	pub(crate) endpoint: String,
	pub(crate) public_key: Option<String>,
	pub(crate) auth_token: Option<String>,
	pub(crate) content_encoding: Option<String>,
	pub(crate) id: Option<i64>,
	pub(crate) log_id: Option<i64>,
	pub(crate) local_key: Option<String>,
	pub(crate) shared_secret: Option<String>,
}

impl SubscriptionBuilder {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			public_key: None,
			auth_token: None,
			content_encoding: None,
			id: None,
			log_id: None,
			local_key: None,
			shared_secret: None,
		}
	}

	pub fn public_key(mut self, public_key: impl Into<String>) -> Self {
		self.public_key = Some(public_key.into());
		self
	}

	pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
		self.auth_token = Some(auth_token.into());
		self
	}

	/// Set the content encoding token (validated in `build`)
	pub fn content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
		self.content_encoding = Some(content_encoding.into());
		self
	}

	pub fn id(mut self, id: i64) -> Self {
		self.id = Some(id);
		self
	}

	pub fn log_id(mut self, log_id: i64) -> Self {
		self.log_id = Some(log_id);
		self
	}

	pub fn local_key(mut self, local_key: impl Into<String>) -> Self {
		self.local_key = Some(local_key.into());
		self
	}

	pub fn shared_secret(mut self, shared_secret: impl Into<String>) -> Self {
		self.shared_secret = Some(shared_secret.into());
		self
	}

	/// Build the Subscription
	///
	/// Fails with `Error::ValidationError` if a non-empty content encoding is
	/// not supported.
	pub fn build(self) -> WpResult<Subscription> {
		let keyed = is_truthy(self.public_key.as_deref())
			|| is_truthy(self.auth_token.as_deref())
			|| is_truthy(self.content_encoding.as_deref());

		if !keyed {
			debug!(endpoint = %self.endpoint, "Subscription created without key material");
			return Ok(Subscription::endpoint_only(self.endpoint));
		}

		let content_encoding = match self.content_encoding.as_deref() {
			Some(token) if !token.is_empty() => token.parse::<ContentEncoding>().inspect_err(|_| {
				warn!(
					endpoint = %self.endpoint,
					content_encoding = %token,
					"Rejecting subscription with unsupported content encoding"
				);
			})?,
			_ => DEFAULT_CONTENT_ENCODING,
		};

		debug!(
			endpoint = %self.endpoint,
			content_encoding = %content_encoding,
			"Subscription created with key material"
		);

		Ok(Subscription {
			endpoint: self.endpoint,
			public_key: self.public_key,
			auth_token: self.auth_token,
			content_encoding: Some(content_encoding),
			local_key: self.local_key,
			shared_secret: self.shared_secret,
			id: self.id,
			log_id: self.log_id,
		})
	}
}

fn is_truthy(value: Option<&str>) -> bool {
	value.is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_builder_is_bare() {
		let sub = Subscription::builder("https://push.example/x").build().unwrap();
		assert_eq!(sub, Subscription::endpoint_only("https://push.example/x"));
	}

	#[test]
	fn test_extras_without_key_material_are_dropped() {
		let sub = Subscription::builder("E")
			.id(1)
			.log_id(2)
			.local_key("local")
			.shared_secret("secret")
			.build()
			.unwrap();
		assert!(!sub.is_keyed());
		assert_eq!(sub.id(), None);
		assert_eq!(sub.local_key(), None);
		assert_eq!(sub.shared_secret(), None);
	}

	#[test]
	fn test_keyed_builder() {
		let sub = Subscription::builder("E")
			.public_key("P")
			.auth_token("A")
			.content_encoding("aes128gcm")
			.id(5)
			.log_id(6)
			.build()
			.unwrap();
		assert_eq!(sub.public_key(), Some("P"));
		assert_eq!(sub.auth_token(), Some("A"));
		assert_eq!(sub.content_encoding(), Some(ContentEncoding::Aes128gcm));
		assert_eq!(sub.id(), Some(5));
		assert_eq!(sub.log_id(), Some(5));
	}

	#[test]
	fn test_keyed_without_ids() {
		let sub = Subscription::builder("E").auth_token("A").build().unwrap();
		assert_eq!(sub.content_encoding(), Some(ContentEncoding::Aesgcm));
		assert_eq!(sub.id(), None);
		assert_eq!(sub.log_id(), None);
	}

	#[test]
	fn test_builder_rejects_unsupported_encoding() {
		let result = Subscription::builder("E").public_key("P").content_encoding("br").build();
		assert_eq!(
			result,
			Err(Error::ValidationError("This content encoding (br) is not supported.".to_string()))
		);
	}

	#[test]
	fn test_empty_public_key_kept_verbatim_in_keyed_mode() {
		let sub = Subscription::builder("E").public_key("").auth_token("A").build().unwrap();
		assert_eq!(sub.public_key(), Some(""));
	}
}

// vim: ts=4
