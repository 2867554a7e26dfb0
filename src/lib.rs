//! highmaps-rs: HTML builder for Highmaps interactive map charts.
//!
//! This crate assembles a Highmaps configuration graph in memory through a
//! typed builder API and serializes it into the JavaScript initialization
//! call embedded in a standalone HTML page or fragment. Nothing is drawn
//! here; the emitted document hands the configuration to the Highmaps
//! runtime in the browser.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AssetSource, MapChart, MapChartConfig, MapSource, ScriptLocation};
pub use core::{JsValue, OptionGroup, OptionNode, RawJs, Series, SeriesType};
pub use error::{ChartError, ChartResult};
