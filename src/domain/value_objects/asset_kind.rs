//! AssetKind value object - which HTML element a built file is rendered as

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kind of built asset, selected by file extension
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// JavaScript bundles (`.js`)
    Script,
    /// CSS bundles (`.css`)
    Stylesheet,
}

impl AssetKind {
    /// Every supported kind
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Stylesheet];

    /// Look up the kind for a bare extension (no dot), case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" => Some(AssetKind::Script),
            "css" => Some(AssetKind::Stylesheet),
            _ => None,
        }
    }

    /// Look up the kind for a relative file path
    pub fn for_path(rel_path: &str) -> Option<Self> {
        Path::new(rel_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Extension this kind is matched by
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Stylesheet => "css",
        }
    }

    /// Render the element that references a single file at `url`
    pub fn render_tag(&self, url: &str) -> String {
        match self {
            AssetKind::Script => format!("<script src=\"{}\"></script>", url),
            AssetKind::Stylesheet => format!("<link rel=\"stylesheet\" href=\"{}\">", url),
        }
    }

    /// Wrap raw file content in an inline element
    pub fn render_inline(&self, content: &str) -> String {
        match self {
            AssetKind::Script => format!("<script>{}</script>", content),
            AssetKind::Stylesheet => format!("<style>{}</style>", content),
        }
    }

    /// Lowercase name used in output and configuration
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Script => "script",
            AssetKind::Stylesheet => "stylesheet",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
