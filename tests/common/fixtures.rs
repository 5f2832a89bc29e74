//! Test fixtures - reusable manifest and asset content.

/// Three entries sharing files across kinds
pub const BUILT_MANIFEST: &str = r#"{
  "status": "built",
  "errors": null,
  "files": {
    "main": ["foo/bar.js", "woz/bar.css"],
    "foo": ["foo/bar.js", "woz/bar.js", "bar/woz.js"],
    "bar": ["bar/woz.js", "foo/bar.css", "woz/bar.css"]
  }
}"#;

pub const ERRORS_MANIFEST: &str = r#"{
  "status": "errors",
  "errors": ["error 1", "error 2"],
  "files": null
}"#;

pub const BUILDING_MANIFEST: &str = r#"{
  "status": "building",
  "errors": null,
  "files": null
}"#;

pub const UNKNOWN_STATUS_MANIFEST: &str = r#"{"status": "unknown status"}"#;

/// Built files referenced by `BUILT_MANIFEST`, relative to the static root
pub const STATIC_FILES: &[(&str, &str)] = &[
    ("foo/bar.js", "foo_bar=1\n"),
    ("woz/bar.js", "woz_bar=1\n"),
    ("bar/woz.js", "bar_woz=1\n"),
    ("foo/bar.css", ".foo_bar {}\n"),
    ("woz/bar.css", ".woz_bar {}\n"),
];
