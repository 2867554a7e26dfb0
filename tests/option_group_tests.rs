use highmaps_rs::{JsValue, MapChart, OptionGroup};
use indexmap::IndexMap;

#[test]
fn merge_overlays_only_the_given_keys() {
    let mut group =
        OptionGroup::with_defaults([("enabled", JsValue::from(true)), ("text", JsValue::from("hello"))]);
    group.merge([("text", JsValue::from("replaced"))]);

    assert_eq!(group.get("enabled"), Some(&JsValue::Bool(true)));
    assert_eq!(group.get("text"), Some(&JsValue::from("replaced")));
}

#[test]
fn replace_swaps_the_backing_mapping_but_keeps_the_defaults_snapshot() {
    let mut group = OptionGroup::with_defaults([("enabled", true)]);
    group.replace(IndexMap::from([("fresh".to_owned(), JsValue::from(1))]));

    assert!(group.get("enabled").is_none());
    assert_eq!(group.get("fresh"), Some(&JsValue::from(1)));
    assert_eq!(
        group.defaults().get("enabled"),
        Some(&JsValue::Bool(true)),
        "the construction-time snapshot must stay fixed"
    );
}

#[test]
fn unknown_keys_pass_through_without_validation() {
    let mut group = OptionGroup::new();
    group.set("someOptionInventedNextYear", "kept");
    group.set("nested", JsValue::Object(IndexMap::new()));

    assert_eq!(group.len(), 2);
    assert_eq!(
        group.get("someOptionInventedNextYear"),
        Some(&JsValue::from("kept"))
    );
}

#[test]
fn fresh_chart_carries_the_construction_defaults() {
    let chart = MapChart::default();

    let chart_group = chart.option_group("chart").expect("chart group");
    assert_eq!(
        chart_group.get("renderTo"),
        Some(&JsValue::from("container"))
    );

    let title = chart.option_group("title").expect("title group");
    assert_eq!(title.get("text"), Some(&JsValue::from("A New Highchart")));

    let credits = chart.option_group("credits").expect("credits group");
    assert_eq!(credits.get("enabled"), Some(&JsValue::Bool(false)));

    assert!(!chart.colors().is_empty(), "default palette expected");
}

#[test]
fn to_value_expands_to_an_object_and_omits_nothing_present() {
    let mut group = OptionGroup::new();
    group.set("a", 1);
    group.set("b", "two");

    let value = group.to_value();
    let object = value.as_object().expect("object");
    let keys: Vec<&String> = object.keys().collect();
    assert_eq!(keys, ["a", "b"]);
}
