//! Repository Implementations
//!
//! Reading and writing manifest documents.

mod emitter;
mod manifest;

pub use emitter::ManifestEmitter;
pub use manifest::JsonManifestReader;
