use std::str::FromStr;

use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::MapChart;

/// One URL or a batch of URLs for an asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Url(String),
    Urls(Vec<String>),
}

impl AssetSource {
    fn into_urls(self) -> ChartResult<Vec<String>> {
        let urls = match self {
            Self::Url(url) => vec![url],
            Self::Urls(urls) => urls,
        };
        if urls.is_empty() {
            return Err(ChartError::InvalidAssetSource(
                "empty asset source list".to_owned(),
            ));
        }
        if let Some(empty) = urls.iter().find(|url| url.trim().is_empty()) {
            return Err(ChartError::InvalidAssetSource(format!(
                "blank asset url: {empty:?}"
            )));
        }
        Ok(urls)
    }
}

impl From<&str> for AssetSource {
    fn from(url: &str) -> Self {
        Self::Url(url.to_owned())
    }
}

impl From<String> for AssetSource {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Vec<String>> for AssetSource {
    fn from(urls: Vec<String>) -> Self {
        Self::Urls(urls)
    }
}

impl From<Vec<&str>> for AssetSource {
    fn from(urls: Vec<&str>) -> Self {
        Self::Urls(urls.into_iter().map(str::to_owned).collect())
    }
}

/// Where an injected script block lands in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLocation {
    Head,
    End,
}

impl FromStr for ScriptLocation {
    type Err = ChartError;

    fn from_str(location: &str) -> ChartResult<Self> {
        match location {
            "head" => Ok(Self::Head),
            "end" => Ok(Self::End),
            other => Err(ChartError::InvalidScriptLocation(other.to_owned())),
        }
    }
}

impl MapChart {
    /// Appends script asset URLs. Insertion order is preserved in the output
    /// header; callers are responsible for loading the library core before
    /// its modules.
    pub fn add_js_source(&mut self, source: impl Into<AssetSource>) -> ChartResult<()> {
        for url in source.into().into_urls()? {
            debug!(url = %url, "add script asset");
            self.js_sources.push(url);
        }
        Ok(())
    }

    /// Appends stylesheet asset URLs, in insertion order.
    pub fn add_css_source(&mut self, source: impl Into<AssetSource>) -> ChartResult<()> {
        for url in source.into().into_urls()? {
            debug!(url = %url, "add stylesheet asset");
            self.css_sources.push(url);
        }
        Ok(())
    }

    /// Injects a verbatim script block, either before the container
    /// (`"head"`) or after the chart initialization (`"end"`). A second call
    /// for the same location replaces the previous block.
    pub fn add_script(&mut self, code: &str, location: &str) -> ChartResult<()> {
        match location.parse::<ScriptLocation>()? {
            ScriptLocation::Head => self.head_script = Some(code.to_owned()),
            ScriptLocation::End => self.end_script = Some(code.to_owned()),
        }
        Ok(())
    }
}
