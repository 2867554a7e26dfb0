use criterion::{Criterion, criterion_group, criterion_main};
use highmaps_rs::core::JsEncoder;
use highmaps_rs::{JsValue, MapChart, MapChartConfig};
use indexmap::IndexMap;
use std::hint::black_box;

fn bench_encode_10k_points(c: &mut Criterion) {
    let points: Vec<JsValue> = (0..10_000)
        .map(|i| JsValue::from(f64::from(i) * 0.5))
        .collect();
    let mut record = IndexMap::new();
    record.insert("name".to_owned(), JsValue::from("bench"));
    record.insert(
        "formatter".to_owned(),
        JsValue::raw("function() { return this.value; }"),
    );
    record.insert("data".to_owned(), JsValue::Array(points));
    let graph = JsValue::Object(record);

    c.bench_function("encode_10k_points", |b| {
        b.iter(|| {
            let mut encoder = JsEncoder::new();
            let _ = black_box(encoder.encode(black_box(&graph)));
        })
    });
}

fn bench_render_full_page(c: &mut Criterion) {
    c.bench_function("render_full_page", |b| {
        b.iter(|| {
            let mut chart = MapChart::new(
                MapChartConfig::new().with_width(820).with_height(500),
            );
            chart
                .set_map_source("http://code.highcharts.com/mapdata/", "custom/world", false)
                .expect("map source");
            let data: Vec<JsValue> = (0..500).map(JsValue::from).collect();
            chart
                .add_data_set(data, "map", None, IndexMap::new())
                .expect("series");
            let _ = black_box(chart.render());
        })
    });
}

criterion_group!(benches, bench_encode_10k_points, bench_render_full_page);
criterion_main!(benches);
