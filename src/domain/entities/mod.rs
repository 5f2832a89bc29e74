//! Domain Entities
//!
//! - `RawManifestData` - the JSON document as written by the build tool
//! - `ManifestModel` - a built manifest with lazily resolved entries
//! - `EntryGroup` - one entry's files split by kind
//! - `TypedAssetGroup` - one entry's files of a single kind

mod asset_group;
mod entry;
mod manifest;
mod raw_manifest;

pub use asset_group::{TypedAssetGroup, MISSING_STATIC_ROOT};
pub use entry::EntryGroup;
pub use manifest::ManifestModel;
pub use raw_manifest::{EntryFiles, RawManifestData};
