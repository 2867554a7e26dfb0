use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::debug;

use crate::core::series::{Series, SeriesType};
use crate::core::value::{JsValue, RawJs};
use crate::error::ChartResult;

use super::MapChart;

/// One day in milliseconds; staged as the point interval when a start date
/// is set without an explicit interval.
pub const DEFAULT_POINT_INTERVAL_MS: i64 = 86_400_000;

/// Remote JSONP data source: the fetched payload lands in a JS variable the
/// series references by name instead of inlining its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RemoteData {
    pub(crate) variable: String,
    pub(crate) url_literal: String,
}

impl MapChart {
    /// Appends one data series.
    ///
    /// `name` defaults to `"Series N"` with a 1-based counter scoped to this
    /// chart. A staged start date or point interval is consumed exactly once
    /// and cleared. When a map source is active and the call's options carry
    /// a `mapData` key, the resolved map reference replaces that value.
    pub fn add_data_set(
        &mut self,
        data: impl Into<JsValue>,
        series_type: &str,
        name: Option<&str>,
        options: IndexMap<String, JsValue>,
    ) -> ChartResult<()> {
        let series_type: SeriesType = series_type.parse()?;
        self.series_count += 1;
        let assigned = name
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Series {}", self.series_count));

        let mut options = options;
        options.insert("name".to_owned(), JsValue::from(assigned.as_str()));
        if let Some(start) = self.pending_point_start.take() {
            options.insert("pointStart".to_owned(), start);
        }
        if let Some(interval) = self.pending_point_interval.take() {
            options.insert("pointInterval".to_owned(), JsValue::from(interval));
        }
        if let Some(source) = &self.map_source {
            if options.contains_key("mapData") {
                options.insert(
                    "mapData".to_owned(),
                    JsValue::Raw(RawJs::new(source.reference())),
                );
            }
        }

        debug!(
            name = %assigned,
            series_type = series_type.as_str(),
            "add data series"
        );
        self.series.push(Series::new(data.into(), series_type, options));
        Ok(())
    }

    /// Appends one drilldown series, reachable from a parent point via `id`.
    /// The first call switches the chart into drilldown mode.
    pub fn add_drilldown_data_set(
        &mut self,
        data: impl Into<JsValue>,
        series_type: &str,
        id: &str,
        options: IndexMap<String, JsValue>,
    ) -> ChartResult<()> {
        let series_type: SeriesType = series_type.parse()?;
        self.drilldown_series_count += 1;
        if !self.drilldown_enabled {
            self.drilldown_enabled = true;
        }

        let mut options = options;
        options.insert("id".to_owned(), JsValue::from(id));

        debug!(
            id,
            series_type = series_type.as_str(),
            "add drilldown series"
        );
        self.drilldown_series
            .push(Series::new(data.into(), series_type, options));
        Ok(())
    }

    /// Adds a series whose data is fetched out-of-band via JSONP: the
    /// payload lands in `data_name` and the series references that variable
    /// unquoted instead of inlining an array.
    pub fn add_data_from_remote_source(
        &mut self,
        url: &str,
        data_name: &str,
        series_type: &str,
        name: Option<&str>,
        options: IndexMap<String, JsValue>,
    ) -> ChartResult<()> {
        // "data" would shadow the fragment's own variable.
        let variable = if data_name == "data" {
            format!("json_{data_name}")
        } else {
            data_name.to_owned()
        };
        self.remote_data = Some(RemoteData {
            variable: variable.clone(),
            url_literal: serde_json::Value::String(url.to_owned()).to_string(),
        });
        self.add_data_set(JsValue::raw(variable), series_type, name, options)
    }

    /// Stages `pointStart` for the next added series. When no interval is
    /// pending, the one-day default interval is staged with it.
    pub fn set_start_date(&mut self, start: DateTime<Utc>) {
        self.pending_point_start = Some(JsValue::Date(start));
        if self.pending_point_interval.is_none() {
            self.pending_point_interval = Some(DEFAULT_POINT_INTERVAL_MS);
        }
    }

    /// Stages `pointInterval` (milliseconds) for the next added series.
    pub fn set_interval(&mut self, interval_ms: i64) {
        self.pending_point_interval = Some(interval_ms);
    }
}
