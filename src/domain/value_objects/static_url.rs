//! StaticUrl value object - the prefix built files are served under

use std::path::MAIN_SEPARATOR;

/// URL prefix for built files, always ending with `/`.
///
/// Frameworks disagree on whether a static URL carries a trailing slash,
/// so it is added when missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticUrl(String);

impl StaticUrl {
    pub fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a relative URL
    pub fn join(&self, rel_url: &str) -> String {
        format!("{}{}", self.0, rel_url)
    }
}

impl std::fmt::Display for StaticUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert an OS-separated relative path into a `/`-separated URL path
pub fn rel_url_from_path(rel_path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        rel_path.to_string()
    } else {
        rel_path.replace(MAIN_SEPARATOR, "/")
    }
}
