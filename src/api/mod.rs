use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::options::{OptionGroup, OptionNode, default_global_registry, default_options_registry};
use crate::core::series::Series;
use crate::core::value::JsValue;
use crate::error::{ChartError, ChartResult};

mod assets;
mod data_sets;
mod map_source;
mod options_api;
mod pipeline;

pub use assets::{AssetSource, ScriptLocation};
pub use map_source::{DEFAULT_MAP_COLLECTION, MapSource};

use data_sets::RemoteData;

/// Script assets loaded by default: jQuery, the Highcharts core, and the
/// map/data/exporting modules. The core must load before its modules, so
/// additions always append.
const DEFAULT_JS_SOURCES: [&str; 5] = [
    "https://ajax.googleapis.com/ajax/libs/jquery/1.7.2/jquery.min.js",
    "http://code.highcharts.com/highcharts.js",
    "http://code.highcharts.com/maps/modules/map.js",
    "https://code.highcharts.com/maps/modules/data.js",
    "https://code.highcharts.com/maps/modules/exporting.js",
];

const DEFAULT_CSS_SOURCES: [&str; 1] = ["https://www.highcharts.com/highslide/highslide.css"];

/// Initial chart setup: the container id and inline style, chart-level
/// dimensions and margins, and optional pre-seeded script blocks.
///
/// Everything here lands in the `chart` option group (or the container
/// markup) at construction; all of it can still be changed later through
/// the options API.
///
/// The type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapChartConfig {
    #[serde(default = "default_render_to")]
    pub render_to: String,
    #[serde(default)]
    pub width: Option<JsValue>,
    #[serde(default)]
    pub height: Option<JsValue>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub margin_top: Option<i64>,
    #[serde(default)]
    pub margin_right: Option<i64>,
    #[serde(default)]
    pub margin_bottom: Option<i64>,
    #[serde(default)]
    pub margin_left: Option<i64>,
    #[serde(default)]
    pub container_style: String,
    #[serde(default)]
    pub head_script: Option<String>,
    #[serde(default)]
    pub end_script: Option<String>,
}

fn default_render_to() -> String {
    "container".to_owned()
}

impl Default for MapChartConfig {
    fn default() -> Self {
        Self {
            render_to: "container".to_owned(),
            width: None,
            height: None,
            background_color: None,
            margin_top: None,
            margin_right: None,
            margin_bottom: None,
            margin_left: None,
            container_style: String::new(),
            head_script: None,
            end_script: None,
        }
    }
}

impl MapChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id of the container element the chart renders into.
    #[must_use]
    pub fn with_render_to(mut self, render_to: impl Into<String>) -> Self {
        self.render_to = render_to.into();
        self
    }

    /// Sets the chart width: a number means pixels, a string ending in `%`
    /// means a percentage unit.
    #[must_use]
    pub fn with_width(mut self, width: impl Into<JsValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the chart height; same unit rules as [`Self::with_width`].
    #[must_use]
    pub fn with_height(mut self, height: impl Into<JsValue>) -> Self {
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_margin_top(mut self, px: i64) -> Self {
        self.margin_top = Some(px);
        self
    }

    #[must_use]
    pub fn with_margin_right(mut self, px: i64) -> Self {
        self.margin_right = Some(px);
        self
    }

    #[must_use]
    pub fn with_margin_bottom(mut self, px: i64) -> Self {
        self.margin_bottom = Some(px);
        self
    }

    #[must_use]
    pub fn with_margin_left(mut self, px: i64) -> Self {
        self.margin_left = Some(px);
        self
    }

    /// Extra inline CSS prepended to the derived container style.
    #[must_use]
    pub fn with_container_style(mut self, style: impl Into<String>) -> Self {
        self.container_style = style.into();
        self
    }

    /// Seeds the script block injected before the container markup.
    #[must_use]
    pub fn with_head_script(mut self, script: impl Into<String>) -> Self {
        self.head_script = Some(script.into());
        self
    }

    /// Seeds the script block injected after the chart initialization.
    #[must_use]
    pub fn with_end_script(mut self, script: impl Into<String>) -> Self {
        self.end_script = Some(script.into());
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to parse config: {e}")))
    }
}

/// The chart aggregate: one option node per top-level group, the series
/// lists, asset references, map-source state, and the render pipeline.
///
/// A `MapChart` is created once per chart, mutated through the builder
/// calls, and consumed by [`MapChart::render`]; re-rendering recomputes all
/// derived text from the current builder state.
#[derive(Debug, Clone)]
pub struct MapChart {
    options: IndexMap<String, OptionNode>,
    global_options: IndexMap<String, OptionNode>,
    series: Vec<Series>,
    drilldown_series: Vec<Series>,
    js_sources: Vec<String>,
    css_sources: Vec<String>,
    map_source: Option<MapSource>,
    remote_data: Option<RemoteData>,
    head_script: Option<String>,
    end_script: Option<String>,
    container_header: String,
    container_style: String,
    container: String,
    drilldown_enabled: bool,
    pending_point_start: Option<JsValue>,
    pending_point_interval: Option<i64>,
    series_count: usize,
    drilldown_series_count: usize,
}

impl Default for MapChart {
    fn default() -> Self {
        Self::new(MapChartConfig::default())
    }
}

impl MapChart {
    #[must_use]
    pub fn new(config: MapChartConfig) -> Self {
        let mut options = default_options_registry();
        if let Some(chart) = options
            .get_mut("chart")
            .and_then(OptionNode::as_group_mut)
        {
            chart.set("renderTo", config.render_to);
            if let Some(width) = config.width {
                chart.set("width", width);
            }
            if let Some(height) = config.height {
                chart.set("height", height);
            }
            if let Some(color) = config.background_color {
                chart.set("backgroundColor", color);
            }
            for (key, margin) in [
                ("marginTop", config.margin_top),
                ("marginRight", config.margin_right),
                ("marginBottom", config.margin_bottom),
                ("marginLeft", config.margin_left),
            ] {
                if let Some(px) = margin {
                    chart.set(key, px);
                }
            }
        }

        Self {
            options,
            global_options: default_global_registry(),
            series: Vec::new(),
            drilldown_series: Vec::new(),
            js_sources: DEFAULT_JS_SOURCES.iter().map(|s| (*s).to_owned()).collect(),
            css_sources: DEFAULT_CSS_SOURCES.iter().map(|s| (*s).to_owned()).collect(),
            map_source: None,
            remote_data: None,
            head_script: config.head_script,
            end_script: config.end_script,
            container_header: String::new(),
            container_style: config.container_style,
            container: String::new(),
            drilldown_enabled: false,
            pending_point_start: None,
            pending_point_interval: None,
            series_count: 0,
            drilldown_series_count: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &IndexMap<String, OptionNode> {
        &self.options
    }

    #[must_use]
    pub fn global_options(&self) -> &IndexMap<String, OptionNode> {
        &self.global_options
    }

    /// Convenience lookup of one option group by name.
    #[must_use]
    pub fn option_group(&self, name: &str) -> Option<&OptionGroup> {
        self.options.get(name).and_then(OptionNode::as_group)
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn drilldown_series(&self) -> &[Series] {
        &self.drilldown_series
    }

    #[must_use]
    pub fn js_sources(&self) -> &[String] {
        &self.js_sources
    }

    #[must_use]
    pub fn css_sources(&self) -> &[String] {
        &self.css_sources
    }

    #[must_use]
    pub fn map_source(&self) -> Option<&MapSource> {
        self.map_source.as_ref()
    }

    #[must_use]
    pub fn drilldown_enabled(&self) -> bool {
        self.drilldown_enabled
    }

    /// Prepends arbitrary markup to the container fragment.
    pub fn set_container_header(&mut self, header: impl Into<String>) {
        self.container_header = header.into();
    }
}
