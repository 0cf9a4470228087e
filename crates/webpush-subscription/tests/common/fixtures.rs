//! Reusable subscription payloads

use serde_json::{json, Value};

pub const ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send/dQw4w9WgXcQ:APA91bH";
pub const P256DH: &str =
	"BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u-Ts1XbjhazAkj7I99e8QcYP7DkM";
pub const AUTH: &str = "tBHItJI5svbpez7KI4CCXg";

/// What a browser's `PushSubscription.toJSON()` produces
pub fn browser_subscription() -> Value {
	json!({
		"endpoint": ENDPOINT,
		"expirationTime": null,
		"keys": {
			"p256dh": P256DH,
			"auth": AUTH
		}
	})
}

/// Flat shape as stored by a persistence layer
pub fn flat_subscription(content_encoding: &str) -> Value {
	json!({
		"endpoint": ENDPOINT,
		"publicKey": P256DH,
		"authToken": AUTH,
		"contentEncoding": content_encoding
	})
}

/// Helper to assemble subscription input field by field
pub struct TestDataBuilder {
	data: Value,
}

impl TestDataBuilder {
	pub fn new() -> Self {
		Self { data: json!({}) }
	}

	/// Add a field to the test data
	pub fn with_field(mut self, key: &str, value: Value) -> Self {
		if let Value::Object(ref mut map) = self.data {
			map.insert(key.to_string(), value);
		}
		self
	}

	pub fn with_string(self, key: &str, value: &str) -> Self {
		self.with_field(key, Value::String(value.to_string()))
	}

	pub fn build(self) -> Value {
		self.data
	}
}

impl Default for TestDataBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
