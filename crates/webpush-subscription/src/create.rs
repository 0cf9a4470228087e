//! Subscription factory for loosely-typed JSON input
//!
//! Accepts the shapes clients and stores hand over:
//!
//! - flat: `{ "endpoint", "publicKey"?, "authToken"?, "contentEncoding"? }`
//! - browser `PushSubscription.toJSON()`: `{ "endpoint", "keys": { "p256dh", "auth" } }`
//! - bare: `{ "endpoint" }`
//!
//! A JSON `null` counts as absent for every field.

use serde_json::{Map, Value};

use crate::builder::SubscriptionBuilder;
use crate::prelude::*;
use crate::subscription::Subscription;

/// Keys whose mere presence selects the flat shape
const FLAT_KEYS: [&str; 3] = ["publicKey", "authToken", "contentEncoding"];

impl Subscription {
	/// Normalize a JSON object into a Subscription
	///
	/// Shapes are tried in order:
	/// 1. any of `publicKey`, `authToken`, `contentEncoding` present:
	///    flat fields, `contentEncoding` defaulting to `aesgcm`
	/// 2. `keys` is an object: `keys.p256dh` becomes the public key, while the
	///    auth-token slot receives the top-level content encoding token
	///    (`aesgcm` by default) and `keys.auth` is not read
	/// 3. otherwise: endpoint only
	///
	/// `id`, `log_id`, `local_key` and `shared_secret` are never populated here.
	pub fn create(fields: &Map<String, Value>) -> WpResult<Subscription> {
		let endpoint = required_str(fields, "endpoint")?;

		let builder = if FLAT_KEYS.iter().any(|key| fields.contains_key(*key)) {
			debug!(endpoint = %endpoint, "Creating subscription from flat fields");
			SubscriptionBuilder {
				public_key: optional_str(fields, "publicKey")?,
				auth_token: optional_str(fields, "authToken")?,
				content_encoding: Some(encoding_or_default(fields)?),
				..SubscriptionBuilder::new(endpoint)
			}
		} else if let Some(Value::Object(keys)) = fields.get("keys") {
			debug!(endpoint = %endpoint, "Creating subscription from browser keys");
			// Shape 1 claims every input with a top-level contentEncoding, so the
			// auth-token slot always ends up holding the default token here.
			SubscriptionBuilder {
				public_key: optional_str(keys, "p256dh")?,
				auth_token: Some(encoding_or_default(fields)?),
				content_encoding: None,
				..SubscriptionBuilder::new(endpoint)
			}
		} else {
			SubscriptionBuilder::new(endpoint)
		};

		builder.build()
	}

	/// Parse a JSON document and normalize it with [`Subscription::create`]
	pub fn from_json_str(json: &str) -> WpResult<Subscription> {
		let value: Value = serde_json::from_str(json)?;
		Subscription::try_from(&value)
	}
}

impl TryFrom<&Value> for Subscription {
	type Error = Error;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(fields) => Subscription::create(fields),
			_ => Err(Error::Parse("subscription must be a JSON object".to_string())),
		}
	}
}

impl TryFrom<Value> for Subscription {
	type Error = Error;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		Subscription::try_from(&value)
	}
}

fn required_str(fields: &Map<String, Value>, key: &'static str) -> WpResult<String> {
	optional_str(fields, key)?.ok_or(Error::MissingField(key))
}

fn optional_str(fields: &Map<String, Value>, key: &str) -> WpResult<Option<String>> {
	match fields.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(other) => Err(Error::Parse(format!("{} must be a string, got {}", key, other))),
	}
}

fn encoding_or_default(fields: &Map<String, Value>) -> WpResult<String> {
	Ok(optional_str(fields, "contentEncoding")?
		.unwrap_or_else(|| DEFAULT_CONTENT_ENCODING.as_str().to_string()))
}


// vim: ts=4
