pub use webpush_types::encoding::{ContentEncoding, DEFAULT_CONTENT_ENCODING};
pub use webpush_types::error::{Error, WpResult};

pub use tracing::{debug, warn};

// vim: ts=4
