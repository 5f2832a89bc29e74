//! RawManifestData entity - the JSON document the build tool writes
//!
//! Shape on disk (unused keys are written as `null`):
//!
//! ```json
//! {"status": "built", "errors": null, "files": {"main": ["main.js", "main.css"]}}
//! ```
//!
//! Only `status` is interpreted on parse. `errors` and `files` stay as raw
//! JSON until the status that uses them asks for them, so a stray value in
//! an unused key never fails the read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{BuildStatus, BUILDING_STATUS, BUILT_STATUS, ERRORS_STATUS};

/// Entry name to ordered, OS-separated relative file paths
pub type EntryFiles = BTreeMap<String, Vec<String>>;

/// Parsed manifest document, consumed immediately by the resolver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawManifestData {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
    #[serde(default)]
    pub files: Option<Value>,
}

impl RawManifestData {
    /// Manifest written when a compilation starts
    pub fn building() -> Self {
        Self {
            status: Some(Value::from(BUILDING_STATUS)),
            ..Self::default()
        }
    }

    /// Manifest written after a successful compilation
    pub fn built(files: EntryFiles) -> Self {
        let files = files
            .into_iter()
            .map(|(name, paths)| (name, Value::from(paths)))
            .collect();
        Self {
            status: Some(Value::from(BUILT_STATUS)),
            files: Some(Value::Object(files)),
            ..Self::default()
        }
    }

    /// Manifest written after a failed compilation
    pub fn errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        Self {
            status: Some(Value::from(ERRORS_STATUS)),
            errors: Some(Value::from(messages)),
            ..Self::default()
        }
    }

    /// Parse a manifest document
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Render the document the way the build plugin writes it
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Classify `status`. A non-string value is unknown and keeps its JSON text.
    pub fn status(&self) -> BuildStatus {
        match &self.status {
            Some(Value::String(raw)) => BuildStatus::parse(Some(raw.as_str())),
            Some(Value::Null) | None => BuildStatus::Unknown(None),
            Some(other) => BuildStatus::Unknown(Some(other.to_string())),
        }
    }

    /// Reported build errors.
    ///
    /// `null` means none; list items and any other value are taken as
    /// messages, strings verbatim and everything else as JSON text.
    pub fn error_messages(&self) -> Vec<String> {
        let message = |value: &Value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        match &self.errors {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(message).collect(),
            Some(other) => vec![message(other)],
        }
    }

    /// Decode `files` into entry paths; `null` or missing means no entries
    pub fn entry_files(&self) -> serde_json::Result<EntryFiles> {
        match &self.files {
            None | Some(Value::Null) => Ok(EntryFiles::new()),
            Some(files) => EntryFiles::deserialize(files),
        }
    }

    /// Names of the entries in `files`, sorted
    pub fn entry_names(&self) -> Vec<&str> {
        self.files
            .as_ref()
            .and_then(Value::as_object)
            .map(|files| files.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_built_manifest() {
        let data = RawManifestData::from_json(
            r#"{"status": "built", "files": {"main": ["foo/bar.js", "woz/bar.css"]}}"#,
        )
        .unwrap();

        assert_eq!(data.status(), BuildStatus::Built);
        assert_eq!(
            data.entry_files().unwrap()["main"],
            vec!["foo/bar.js".to_string(), "woz/bar.css".to_string()]
        );
    }

    #[test]
    fn parse_accepts_null_keys_written_by_plugin() {
        let data = RawManifestData::from_json(
            r#"{"status": "building", "errors": null, "files": null}"#,
        )
        .unwrap();

        assert_eq!(data.status(), BuildStatus::Building);
        assert!(data.error_messages().is_empty());
        assert!(data.entry_names().is_empty());
        assert!(data.entry_files().unwrap().is_empty());
    }

    #[test]
    fn parse_missing_status() {
        let data = RawManifestData::from_json("{}").unwrap();
        assert_eq!(data.status(), BuildStatus::Unknown(None));

        let data = RawManifestData::from_json(r#"{"status": null}"#).unwrap();
        assert_eq!(data.status(), BuildStatus::Unknown(None));
    }

    #[test]
    fn non_string_status_is_unknown_with_json_text() {
        let data = RawManifestData::from_json(r#"{"status": 5}"#).unwrap();
        assert_eq!(data.status(), BuildStatus::Unknown(Some("5".to_string())));

        let data = RawManifestData::from_json(r#"{"status": ["built"]}"#).unwrap();
        assert_eq!(
            data.status(),
            BuildStatus::Unknown(Some("[\"built\"]".to_string()))
        );
    }

    #[test]
    fn mistyped_unused_keys_still_parse() {
        let data = RawManifestData::from_json(
            r#"{"status": "built", "errors": "", "files": {"main": ["a.js"]}}"#,
        )
        .unwrap();

        assert_eq!(data.status(), BuildStatus::Built);
        assert_eq!(data.entry_names(), ["main"]);
    }

    #[test]
    fn mistyped_files_fail_to_decode() {
        let data = RawManifestData::from_json(r#"{"status": "built", "files": {"main": 3}}"#)
            .unwrap();
        assert!(data.entry_files().is_err());

        let data = RawManifestData::from_json(r#"{"status": "built", "files": []}"#).unwrap();
        assert!(data.entry_files().is_err());
        assert!(data.entry_names().is_empty());
    }

    #[test]
    fn error_messages_accept_loose_shapes() {
        let data =
            RawManifestData::from_json(r#"{"status": "errors", "errors": ["a", 2]}"#).unwrap();
        assert_eq!(data.error_messages(), ["a", "2"]);

        let data =
            RawManifestData::from_json(r#"{"status": "errors", "errors": "single"}"#).unwrap();
        assert_eq!(data.error_messages(), ["single"]);
    }

    #[test]
    fn parse_empty_content_fails() {
        assert!(RawManifestData::from_json("").is_err());
    }

    #[test]
    fn errors_constructor_keeps_order() {
        let data = RawManifestData::errors(["error 1", "error 2"]);
        assert_eq!(data.status(), BuildStatus::Errors);
        assert_eq!(data.error_messages(), ["error 1", "error 2"]);
    }

    #[test]
    fn built_constructor_round_trips_files() {
        let mut files = EntryFiles::new();
        files.insert("main".to_string(), vec!["main.js".to_string()]);

        let data = RawManifestData::built(files.clone());
        assert_eq!(data.entry_files().unwrap(), files);
    }

    #[test]
    fn pretty_json_writes_all_keys() {
        let json = RawManifestData::building().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "building");
        assert!(value["errors"].is_null());
        assert!(value["files"].is_null());
    }
}
