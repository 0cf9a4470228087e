//! Content encodings accepted for Web Push payloads

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::prelude::*;

/// Wire tokens of every supported encoding, in preference-neutral order
pub const SUPPORTED_CONTENT_ENCODINGS: [&str; 2] =
	[ContentEncoding::ALL[0].as_str(), ContentEncoding::ALL[1].as_str()];

/// Encoding assumed when key material is present but no encoding was given
pub const DEFAULT_CONTENT_ENCODING: ContentEncoding = ContentEncoding::Aesgcm;

/// Payload encryption scheme declared by a subscription
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentEncoding {
	/// Legacy draft encoding (draft-ietf-webpush-encryption-04)
	#[default]
	#[serde(rename = "aesgcm")]
	Aesgcm,
	/// RFC 8188 / RFC 8291 encoding
	#[serde(rename = "aes128gcm")]
	Aes128gcm,
}

impl ContentEncoding {
	/// Every supported encoding
	pub const ALL: [ContentEncoding; 2] = [ContentEncoding::Aesgcm, ContentEncoding::Aes128gcm];

	pub const fn as_str(self) -> &'static str {
		match self {
			ContentEncoding::Aesgcm => "aesgcm",
			ContentEncoding::Aes128gcm => "aes128gcm",
		}
	}
}

impl std::fmt::Display for ContentEncoding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ContentEncoding {
	type Err = Error;

	/// Matches the wire token exactly (case-sensitive)
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ContentEncoding::ALL.into_iter().find(|encoding| encoding.as_str() == s).ok_or_else(|| {
			Error::ValidationError(format!("This content encoding ({}) is not supported.", s))
		})
	}
}


// vim: ts=4
