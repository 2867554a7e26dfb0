use std::str::FromStr;

use indexmap::IndexMap;

use crate::core::options::OptionGroup;
use crate::core::value::JsValue;

use crate::error::{ChartError, ChartResult};

/// The map-chart series kinds the builder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesType {
    Map,
    MapLine,
    MapPoint,
    MapBubble,
    Heatmap,
}

impl SeriesType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::MapLine => "mapline",
            Self::MapPoint => "mappoint",
            Self::MapBubble => "mapbubble",
            Self::Heatmap => "heatmap",
        }
    }

    /// Series-type level defaults, merged under explicit per-call options.
    #[must_use]
    pub fn default_options(self) -> IndexMap<String, JsValue> {
        match self {
            Self::MapBubble => IndexMap::from([
                ("minSize".to_owned(), JsValue::from(4)),
                ("maxSize".to_owned(), JsValue::from("12%")),
            ]),
            _ => IndexMap::new(),
        }
    }
}

impl FromStr for SeriesType {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        match name {
            "map" => Ok(Self::Map),
            "mapline" => Ok(Self::MapLine),
            "mappoint" => Ok(Self::MapPoint),
            "mapbubble" => Ok(Self::MapBubble),
            "heatmap" => Ok(Self::Heatmap),
            other => Err(ChartError::InvalidSeriesType(other.to_owned())),
        }
    }
}

/// One data series: the point payload, its series-type tag, and the merged
/// per-series options (name, map reference, point bookkeeping, overrides).
///
/// The payload is usually an array of points, each a scalar, pair, or
/// record; in remote-data mode it is a raw variable reference instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    series_type: SeriesType,
    data: JsValue,
    options: OptionGroup,
}

impl Series {
    /// Builds a series, merging the series-type defaults under the explicit
    /// options (explicit wins on conflict).
    #[must_use]
    pub fn new(
        data: JsValue,
        series_type: SeriesType,
        options: IndexMap<String, JsValue>,
    ) -> Self {
        let mut merged = OptionGroup::with_defaults(series_type.default_options());
        merged.merge(options);
        Self {
            series_type,
            data,
            options: merged,
        }
    }

    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        self.series_type
    }

    #[must_use]
    pub fn data(&self) -> &JsValue {
        &self.data
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.options.get("name").and_then(JsValue::as_str)
    }

    #[must_use]
    pub fn options(&self) -> &OptionGroup {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionGroup {
        &mut self.options
    }

    /// Expands into the serializable series record: the type tag first, then
    /// the merged options in insertion order, then the data payload.
    #[must_use]
    pub fn to_value(&self) -> JsValue {
        let mut record = IndexMap::new();
        record.insert("type".to_owned(), JsValue::from(self.series_type.as_str()));
        for (key, value) in self.options.iter() {
            record.insert(key.clone(), value.clone());
        }
        record.insert("data".to_owned(), self.data.clone());
        JsValue::Object(record)
    }
}
