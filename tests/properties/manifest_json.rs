//! Property tests for manifest document parsing.

use proptest::prelude::*;

use webpack_manifest::{BuildStatus, RawManifestData};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = RawManifestData::from_json(&s);
    }

    /// PROPERTY: Any string status parses, and only the three known values are recognized.
    #[test]
    fn property_status_classification(status in "[a-z ]{0,12}") {
        let json = serde_json::json!({ "status": status }).to_string();
        let data = RawManifestData::from_json(&json).unwrap();

        match data.status() {
            BuildStatus::Unknown(raw) => {
                prop_assert_eq!(raw.as_deref(), Some(status.as_str()));
                prop_assert!(!["building", "built", "errors"].contains(&status.as_str()));
            }
            known => prop_assert_eq!(known.as_str(), Some(status.as_str())),
        }
    }
}
