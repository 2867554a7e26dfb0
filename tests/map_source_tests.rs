use highmaps_rs::api::DEFAULT_MAP_COLLECTION;
use highmaps_rs::{JsValue, MapChart, MapSource};
use indexmap::IndexMap;

#[test]
fn script_mode_appends_the_map_asset_and_resolves_map_data() {
    let mut chart = MapChart::default();
    chart
        .set_map_source("http://x/", "world", false)
        .expect("map source");

    assert!(
        chart
            .js_sources()
            .iter()
            .any(|url| url == "http://x/world.js")
    );
    assert_eq!(
        chart.map_source().map(MapSource::reference),
        Some("Highcharts.maps[\"world\"]")
    );

    chart
        .add_data_set(
            vec![1, 2],
            "map",
            None,
            IndexMap::from([("mapData".to_owned(), JsValue::Bool(true))]),
        )
        .expect("add series");

    assert_eq!(
        chart.series()[0].options().get("mapData"),
        Some(&JsValue::raw("Highcharts.maps[\"world\"]"))
    );
}

#[test]
fn the_default_collection_builds_the_usual_map_urls() {
    let mut chart = MapChart::default();
    chart
        .set_map_source(DEFAULT_MAP_COLLECTION, "custom/world", false)
        .expect("map source");

    assert!(
        chart
            .js_sources()
            .iter()
            .any(|url| url == "http://code.highcharts.com/mapdata/custom/world.js")
    );
}

#[test]
fn series_without_a_map_data_key_are_left_alone() {
    let mut chart = MapChart::default();
    chart
        .set_map_source("http://x/", "world", false)
        .expect("map source");
    chart
        .add_data_set(vec![1], "map", None, IndexMap::new())
        .expect("add series");

    assert!(chart.series()[0].options().get("mapData").is_none());
}

#[test]
fn late_map_source_patches_only_the_first_existing_series() {
    let mut chart = MapChart::default();
    chart
        .add_data_set(vec![1], "map", None, IndexMap::new())
        .expect("first series");
    chart
        .add_data_set(vec![2], "map", None, IndexMap::new())
        .expect("second series");

    chart
        .set_map_source("http://x/", "world", false)
        .expect("map source");

    assert_eq!(
        chart.series()[0].options().get("mapData"),
        Some(&JsValue::raw("Highcharts.maps[\"world\"]"))
    );
    assert!(
        chart.series()[1].options().get("mapData").is_none(),
        "only the first series is patched"
    );
}

#[test]
fn jsonp_mode_defers_the_fetch_and_renames_the_data_variable() {
    let mut chart = MapChart::default();
    chart
        .set_map_source("http://srv/maps", "data", true)
        .expect("jsonp map source");

    match chart.map_source().expect("map source") {
        MapSource::Jsonp {
            map_name,
            url_literal,
        } => {
            assert_eq!(map_name, "geojson_data");
            assert_eq!(url_literal, "\"http://srv/maps\"");
        }
        MapSource::Script { .. } => panic!("expected jsonp mode"),
    }

    let fragment = chart.render_fragment();
    assert!(fragment.contains("$.getJSON(\"http://srv/maps\", function(geojson_data) {"));
}

#[test]
fn jsonp_map_reference_is_the_fetched_variable() {
    let mut chart = MapChart::default();
    chart
        .set_map_source("http://srv/maps", "world", true)
        .expect("jsonp map source");
    chart
        .add_data_set(
            vec![1],
            "map",
            None,
            IndexMap::from([("mapData".to_owned(), JsValue::Bool(true))]),
        )
        .expect("add series");

    assert_eq!(
        chart.series()[0].options().get("mapData"),
        Some(&JsValue::raw("world"))
    );

    let fragment = chart.render_fragment();
    assert!(fragment.contains("\"mapData\":world"));
}
