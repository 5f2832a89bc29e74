//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `repositories/` - Manifest reader and emitter

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use repositories::{JsonManifestReader, ManifestEmitter};
