use chrono::{TimeZone, Utc};
use highmaps_rs::{ChartError, JsValue, MapChart};
use indexmap::IndexMap;

#[test]
fn unnamed_series_are_numbered_in_call_order() {
    let mut chart = MapChart::default();
    for _ in 0..3 {
        chart
            .add_data_set(vec![1, 2, 3], "map", None, IndexMap::new())
            .expect("add series");
    }

    let names: Vec<&str> = chart
        .series()
        .iter()
        .map(|series| series.name().expect("name"))
        .collect();
    assert_eq!(names, ["Series 1", "Series 2", "Series 3"]);
}

#[test]
fn explicit_names_still_advance_the_counter() {
    let mut chart = MapChart::default();
    chart
        .add_data_set(vec![1], "map", Some("Population"), IndexMap::new())
        .expect("add named series");
    chart
        .add_data_set(vec![2], "map", None, IndexMap::new())
        .expect("add unnamed series");

    assert_eq!(chart.series()[0].name(), Some("Population"));
    assert_eq!(chart.series()[1].name(), Some("Series 2"));
}

#[test]
fn unknown_series_type_aborts_the_call() {
    let mut chart = MapChart::default();
    let err = chart
        .add_data_set(vec![1], "spline", None, IndexMap::new())
        .unwrap_err();

    assert!(matches!(err, ChartError::InvalidSeriesType(name) if name == "spline"));
    assert!(chart.series().is_empty());
}

#[test]
fn staged_point_start_and_interval_are_consumed_exactly_once() {
    let mut chart = MapChart::default();
    let start = Utc
        .with_ymd_and_hms(2014, 4, 11, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    chart.set_start_date(start);
    chart.set_interval(3_600_000);

    chart
        .add_data_set(vec![1, 2], "map", None, IndexMap::new())
        .expect("first series");
    chart
        .add_data_set(vec![3, 4], "map", None, IndexMap::new())
        .expect("second series");

    let first = chart.series()[0].options();
    assert_eq!(first.get("pointStart"), Some(&JsValue::Date(start)));
    assert_eq!(first.get("pointInterval"), Some(&JsValue::from(3_600_000i64)));

    let second = chart.series()[1].options();
    assert!(second.get("pointStart").is_none());
    assert!(second.get("pointInterval").is_none());
}

#[test]
fn start_date_alone_stages_the_one_day_default_interval() {
    let mut chart = MapChart::default();
    let start = Utc
        .with_ymd_and_hms(2014, 4, 11, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    chart.set_start_date(start);
    chart
        .add_data_set(vec![1], "map", None, IndexMap::new())
        .expect("add series");

    assert_eq!(
        chart.series()[0].options().get("pointInterval"),
        Some(&JsValue::from(86_400_000i64))
    );
}

#[test]
fn series_type_defaults_merge_under_explicit_options() {
    let mut chart = MapChart::default();
    chart
        .add_data_set(
            vec![1, 2],
            "mapbubble",
            None,
            IndexMap::from([("minSize".to_owned(), JsValue::from(8))]),
        )
        .expect("add bubble series");

    let options = chart.series()[0].options();
    assert_eq!(options.get("minSize"), Some(&JsValue::from(8)));
    assert_eq!(options.get("maxSize"), Some(&JsValue::from("12%")));
}

#[test]
fn drilldown_series_carry_their_id_and_flip_the_flag_once() {
    let mut chart = MapChart::default();
    assert!(!chart.drilldown_enabled());

    chart
        .add_drilldown_data_set(vec![1], "map", "us-tx", IndexMap::new())
        .expect("first drilldown");
    chart
        .add_drilldown_data_set(vec![2], "map", "us-ca", IndexMap::new())
        .expect("second drilldown");

    assert!(chart.drilldown_enabled());
    assert!(chart.series().is_empty(), "drilldown list is separate");
    assert_eq!(chart.drilldown_series().len(), 2);
    assert_eq!(
        chart.drilldown_series()[0].options().get("id"),
        Some(&JsValue::from("us-tx"))
    );
}

#[test]
fn series_record_shape_matches_the_wire_contract() {
    let mut chart = MapChart::default();
    chart
        .add_data_set(vec![1, 2, 3], "map", None, IndexMap::new())
        .expect("add series");

    let record = chart.series()[0].to_value();
    let object = record.as_object().expect("object");
    assert_eq!(object.get("type"), Some(&JsValue::from("map")));
    assert_eq!(object.get("name"), Some(&JsValue::from("Series 1")));
    assert_eq!(object.get("data"), Some(&JsValue::from(vec![1, 2, 3])));
}
