//! Load Use Case
//!
//! Cache lookup, then status resolution, then caching of the result.

mod options;
mod resolver;
mod use_case;

pub use options::{LoadOptions, DEBUG_READ_RETRY, DEFAULT_TIMEOUT};
pub use resolver::{BuildStatusResolver, POLL_INTERVAL};
pub use use_case::{load, ManifestLoader};
