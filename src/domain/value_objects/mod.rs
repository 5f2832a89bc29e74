//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_kind;
mod build_status;
mod config_warning;
mod static_url;

pub use asset_kind::AssetKind;
pub use build_status::{BuildStatus, BUILDING_STATUS, BUILT_STATUS, ERRORS_STATUS};
pub use config_warning::ConfigWarning;
pub use static_url::{rel_url_from_path, StaticUrl};
