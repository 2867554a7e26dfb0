//! The rendering sink: turns a finished chart view into HTML text.
//!
//! This module never inspects chart semantics. It receives pre-serialized
//! JavaScript text blobs plus asset lists and interpolates them into the
//! shared page/content skeletons.

use std::fmt::Write as _;

mod templates;

/// A deferred JSONP fetch: the payload is loaded out-of-band into
/// `variable`, which the serialized configuration references by name.
#[derive(Debug, Clone, Copy)]
pub struct JsonpFetch<'a> {
    pub variable: &'a str,
    pub url_literal: &'a str,
}

/// Read-only view of everything the content fragment needs.
#[derive(Debug, Clone, Copy)]
pub struct ContentView<'a> {
    pub container: &'a str,
    pub options_js: &'a str,
    pub global_options_js: &'a str,
    pub series_js: &'a str,
    pub drilldown_js: Option<&'a str>,
    pub jsonp_map: Option<JsonpFetch<'a>>,
    pub jsonp_data: Option<JsonpFetch<'a>>,
    pub head_script: Option<&'a str>,
    pub end_script: Option<&'a str>,
}

/// Renders the content-only fragment: optional head script block, container
/// markup, and the inline initialization script.
#[must_use]
pub fn content_fragment(view: &ContentView<'_>) -> String {
    let head_block = script_block(view.head_script);
    let end_block = script_block(view.end_script);
    let chart_init = chart_init_script(view);
    templates::content_template().render(&[
        ("head_script_block", &head_block),
        ("container", view.container),
        ("chart_init", &chart_init),
        ("end_script_block", &end_block),
    ])
}

/// Renders the asset header: one `<link>` per stylesheet, then one
/// `<script>` per script source, in insertion order.
#[must_use]
pub fn asset_header(css_sources: &[String], js_sources: &[String]) -> String {
    let mut header = String::new();
    for url in css_sources {
        let _ = writeln!(header, "        <link href=\"{url}\" rel=\"stylesheet\" />");
    }
    for url in js_sources {
        let _ = writeln!(
            header,
            "        <script type=\"text/javascript\" src=\"{url}\"></script>"
        );
    }
    header
}

/// Wraps a content fragment and an asset header into the full page.
#[must_use]
pub fn page(header: &str, content: &str) -> String {
    templates::page_template().render(&[("header", header), ("content", content)])
}

fn script_block(script: Option<&str>) -> String {
    match script {
        Some(code) => format!("<script type=\"text/javascript\">\n{code}\n</script>\n"),
        None => String::new(),
    }
}

fn chart_init_script(view: &ContentView<'_>) -> String {
    let mut js = String::new();
    let _ = writeln!(js, "$(function() {{");
    let _ = writeln!(
        js,
        "    Highcharts.setOptions({});",
        view.global_options_js
    );
    if let Some(map) = &view.jsonp_map {
        let _ = writeln!(
            js,
            "    $.getJSON({}, function({}) {{",
            map.url_literal, map.variable
        );
    }
    if let Some(data) = &view.jsonp_data {
        let _ = writeln!(
            js,
            "    $.getJSON({} + '&callback=?', function({}) {{",
            data.url_literal, data.variable
        );
    }
    let _ = writeln!(js, "    var option = {};", view.options_js);
    let _ = writeln!(js, "    var data = {};", view.series_js);
    let _ = writeln!(js, "    option.series = data;");
    if let Some(drilldown) = view.drilldown_js {
        let _ = writeln!(js, "    var drilldowndata = {drilldown};");
        let _ = writeln!(js, "    option.drilldown = drilldowndata;");
    }
    let _ = writeln!(js, "    var chart = new Highcharts.Map(option);");
    if view.jsonp_data.is_some() {
        let _ = writeln!(js, "    }});");
    }
    if view.jsonp_map.is_some() {
        let _ = writeln!(js, "    }});");
    }
    let _ = writeln!(js, "}});");
    js
}
