//! Property tests for static URL normalization.

use proptest::prelude::*;

use webpack_manifest::domain::value_objects::StaticUrl;

fn url_prefix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(https?://[a-z]{1,8}\\.com)?(/[A-Za-z0-9_-]{1,8}){0,3}/?")
        .unwrap()
}

fn rel_url() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A static URL always ends with exactly the slash it was given or one added.
    #[test]
    fn property_static_url_ends_with_slash(url in url_prefix()) {
        let normalized = StaticUrl::new(url.clone());
        prop_assert!(normalized.as_str().ends_with('/'));
        prop_assert!(normalized.as_str().starts_with(&url));
        prop_assert!(normalized.as_str().len() <= url.len() + 1);
    }

    /// PROPERTY: Normalizing twice is the same as normalizing once.
    #[test]
    fn property_static_url_idempotent(url in url_prefix()) {
        let once = StaticUrl::new(url);
        let twice = StaticUrl::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Joining a relative URL is plain concatenation after normalization.
    #[test]
    fn property_join_concatenates(url in url_prefix(), rel in rel_url()) {
        let static_url = StaticUrl::new(url);
        let joined = static_url.join(&rel);
        prop_assert_eq!(joined, format!("{}{}", static_url.as_str(), rel));
    }
}
