use tracing::{debug, warn};

use crate::core::value::{JsValue, RawJs};
use crate::error::ChartResult;

use super::MapChart;

/// The Highcharts map collection, the usual source of map scripts.
pub const DEFAULT_MAP_COLLECTION: &str = "http://code.highcharts.com/mapdata/";

/// Active map-data configuration. At most one per chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    /// Map geometry loaded from a script asset; series reference it through
    /// the library's namespaced lookup.
    Script { reference: String },
    /// Map geometry fetched out-of-band as JSONP into a named JS variable.
    Jsonp { map_name: String, url_literal: String },
}

impl MapSource {
    /// The expression a series' `mapData` resolves to: the namespaced lookup
    /// in script mode, the fetched variable name in JSONP mode.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Script { reference } => reference,
            Self::Jsonp { map_name, .. } => map_name,
        }
    }
}

impl MapChart {
    /// Configures where map geometry comes from.
    ///
    /// Script mode appends `map_src + map_name + ".js"` to the script assets
    /// and resolves series map data through `Highcharts.maps[map_name]`.
    /// JSONP mode defers the fetch to render time and references the fetched
    /// variable by name.
    pub fn set_map_source(
        &mut self,
        map_src: &str,
        map_name: &str,
        jsonp: bool,
    ) -> ChartResult<()> {
        if jsonp {
            // "data" would shadow the fragment's own variable.
            let map_name = if map_name == "data" {
                format!("geojson_{map_name}")
            } else {
                map_name.to_owned()
            };
            debug!(map_name = %map_name, "set jsonp map source");
            self.map_source = Some(MapSource::Jsonp {
                map_name,
                url_literal: serde_json::Value::String(map_src.to_owned()).to_string(),
            });
        } else {
            self.add_js_source(format!("{map_src}{map_name}.js"))?;
            debug!(map_name, "set script map source");
            self.map_source = Some(MapSource::Script {
                reference: format!("Highcharts.maps[\"{map_name}\"]"),
            });
        }

        // A map source set after series exist patches the first series only.
        let reference = self
            .map_source
            .as_ref()
            .map(|source| source.reference().to_owned());
        if let (Some(reference), Some(first)) = (reference, self.series.first_mut()) {
            warn!(
                series = first.name().unwrap_or("<unnamed>"),
                "map source set after series were added; patching map data on the first series only"
            );
            first
                .options_mut()
                .set("mapData", JsValue::Raw(RawJs::new(reference)));
        }
        Ok(())
    }
}
