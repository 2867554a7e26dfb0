use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::core::encoder::JsEncoder;
use crate::core::options::OptionNode;
use crate::core::series::Series;
use crate::core::value::JsValue;
use crate::error::ChartResult;
use crate::render::{self, ContentView, JsonpFetch};

use super::{MapChart, MapSource};

/// Loaded on demand when drilldown series are present.
const DRILLDOWN_MODULE_URL: &str = "http://code.highcharts.com/modules/drilldown.js";

fn registry_value(registry: &IndexMap<String, OptionNode>) -> JsValue {
    JsValue::Object(
        registry
            .iter()
            .map(|(name, node)| (name.clone(), node.to_value()))
            .collect(),
    )
}

fn series_list_value(series: &[Series]) -> JsValue {
    JsValue::Array(series.iter().map(Series::to_value).collect())
}

fn dimension_css(property: &str, value: &JsValue) -> Option<String> {
    match value {
        JsValue::Number(n) => Some(format!("{property}:{n}px;")),
        JsValue::String(s) if s.ends_with('%') => Some(format!("{property}:{s};")),
        JsValue::String(s) => Some(format!("{property}:{s}px;")),
        _ => None,
    }
}

impl MapChart {
    /// Container stage: derives the inline dimension style from the chart
    /// options (`%` suffix keeps the percentage unit, anything else is
    /// pixels), re-reads `renderTo`, and builds the container markup once.
    /// Subsequent calls return the cached markup.
    pub fn build_container(&mut self) -> &str {
        if self.container.is_empty() {
            let mut style = self.container_style.clone();
            let mut div_name = "container".to_owned();
            if let Some(chart) = self.option_group("chart") {
                for property in ["width", "height"] {
                    if let Some(css) = chart
                        .get(property)
                        .and_then(|value| dimension_css(property, value))
                    {
                        style.push_str(&css);
                    }
                }
                if let Some(render_to) = chart.get("renderTo").and_then(JsValue::as_str) {
                    div_name = render_to.to_owned();
                }
            }
            debug!(div = %div_name, style = %style, "build container");
            self.container = format!(
                "{}<div id=\"{}\" style=\"{}\"></div>\n",
                self.container_header, div_name, style
            );
        }
        &self.container
    }

    /// Content stage: serializes the option tree, the secondary options, the
    /// series list, and the drilldown bundle, then hands the text blobs to
    /// the rendering sink. Returns the content-only fragment.
    pub fn render_fragment(&mut self) -> String {
        self.build_container();

        let mut encoder = JsEncoder::new();
        let options_js = encoder.encode(&registry_value(&self.options));
        let global_options_js = encoder.encode(&registry_value(&self.global_options));
        let series_js = encoder.encode(&series_list_value(&self.series));
        let drilldown_js = self.drilldown_enabled.then(|| {
            let bundle = JsValue::Object(IndexMap::from([(
                "series".to_owned(),
                series_list_value(&self.drilldown_series),
            )]));
            encoder.encode(&bundle)
        });

        let jsonp_map = match &self.map_source {
            Some(MapSource::Jsonp {
                map_name,
                url_literal,
            }) => Some(JsonpFetch {
                variable: map_name,
                url_literal,
            }),
            _ => None,
        };
        let jsonp_data = self.remote_data.as_ref().map(|remote| JsonpFetch {
            variable: &remote.variable,
            url_literal: &remote.url_literal,
        });

        render::content_fragment(&ContentView {
            container: &self.container,
            options_js: &options_js,
            global_options_js: &global_options_js,
            series_js: &series_js,
            drilldown_js: drilldown_js.as_deref(),
            jsonp_map,
            jsonp_data,
            head_script: self.head_script.as_deref(),
            end_script: self.end_script.as_deref(),
        })
    }

    /// Page stage: appends the drilldown module when needed (once), builds
    /// the asset header, and wraps the content fragment into the page
    /// skeleton. Re-rendering recomputes everything from current state.
    pub fn render(&mut self) -> String {
        let content = self.render_fragment();
        if self.drilldown_enabled
            && !self.js_sources.iter().any(|url| url == DRILLDOWN_MODULE_URL)
        {
            self.js_sources.push(DRILLDOWN_MODULE_URL.to_owned());
        }
        let header = render::asset_header(&self.css_sources, &self.js_sources);
        debug!(content_bytes = content.len(), "render full page");
        render::page(&header, &content)
    }

    /// Renders the full page and writes it out. The output handle is scoped
    /// to this call and flushed before it closes.
    pub fn write_to_file(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let html = self.render();
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        info!(path = %path.display(), bytes = html.len(), "wrote chart html");
        Ok(())
    }
}
