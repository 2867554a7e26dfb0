use highmaps_rs::core::encoder::encode;
use highmaps_rs::{JsValue, OptionGroup};
use indexmap::IndexMap;
use proptest::prelude::*;

proptest! {
    // Substitution replaces exact quoted tokens only; arbitrary string
    // values must survive encoding unchanged, even next to raw fragments.
    #[test]
    fn string_values_round_trip_next_to_raw_fragments(text in "\\PC*") {
        let mut object = IndexMap::new();
        object.insert("handler".to_owned(), JsValue::raw("function() {}"));
        object.insert("label".to_owned(), JsValue::from(text.as_str()));
        let encoded = encode(&JsValue::Object(object));

        // Strip the known unquoted head, leaving valid JSON to parse back.
        let json_part = encoded
            .strip_prefix("{\"handler\":function() {},")
            .map(|rest| format!("{{{rest}"))
            .expect("raw fragment emitted verbatim at the head");
        let parsed: serde_json::Value =
            serde_json::from_str(&json_part).expect("valid JSON after stripping the raw head");
        prop_assert_eq!(parsed["label"].as_str(), Some(text.as_str()));
    }

    // Merging disjoint key sets is order-independent.
    #[test]
    fn disjoint_merges_commute(
        left in proptest::collection::vec(("[a-z]{1,8}", -1000i64..1000), 0..8),
        right in proptest::collection::vec(("[a-z]{1,8}", -1000i64..1000), 0..8),
    ) {
        let left: Vec<(String, i64)> =
            left.into_iter().map(|(k, v)| (format!("l_{k}"), v)).collect();
        let right: Vec<(String, i64)> =
            right.into_iter().map(|(k, v)| (format!("r_{k}"), v)).collect();

        let mut forward = OptionGroup::new();
        forward.merge(left.clone());
        forward.merge(right.clone());

        let mut backward = OptionGroup::new();
        backward.merge(right.clone());
        backward.merge(left.clone());

        for (key, value) in left.iter().chain(right.iter()) {
            prop_assert_eq!(forward.get(key), Some(&JsValue::from(*value)));
            prop_assert_eq!(backward.get(key), Some(&JsValue::from(*value)));
        }
        prop_assert_eq!(forward.len(), backward.len());
    }

    // Encoding never panics and never leaks quote artifacts around dates.
    #[test]
    fn timestamps_always_lower_to_unquoted_expressions(secs in 0i64..4_102_444_800) {
        let date = chrono::DateTime::from_timestamp(secs, 0).expect("valid timestamp");
        let encoded = encode(&JsValue::Date(date));
        prop_assert!(encoded.starts_with("Date.UTC("));
        prop_assert!(encoded.ends_with(')'));
        prop_assert!(!encoded.contains('"'));
    }
}
