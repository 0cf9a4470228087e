//! Error type shared by the subscription crates

use std::fmt;

pub type WpResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Input was well-formed but not acceptable (e.g. unsupported content encoding)
	ValidationError(String),
	/// A required field was absent from loosely-typed input
	MissingField(&'static str),
	/// Input had the wrong shape or type
	Parse(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::MissingField(field) => write!(f, "missing field: {}", field),
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Parse(err.to_string())
	}
}


// vim: ts=4
