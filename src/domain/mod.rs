//! Domain Layer
//!
//! The manifest model and its value types, without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Manifest documents, entries and asset groups
//! - `value_objects/` - Immutable value types (AssetKind, BuildStatus, StaticUrl)
//! - `ports/` - Interface definitions for infrastructure
//!
//! File access goes through the [`ports::FileSystem`] port so the model can be
//! exercised against an in-memory file system.

pub mod entities;
pub mod ports;
pub mod value_objects;
