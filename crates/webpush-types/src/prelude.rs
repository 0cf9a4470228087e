pub use crate::encoding::ContentEncoding;
pub use crate::error::{Error, WpResult};

// vim: ts=4
