use indexmap::IndexMap;
use tracing::debug;

use crate::core::options::{OptionGroup, OptionNode};
use crate::core::series::SeriesType;
use crate::core::value::JsValue;
use crate::error::{ChartError, ChartResult};

use super::MapChart;

fn expect_object(context: &str, value: JsValue) -> ChartResult<IndexMap<String, JsValue>> {
    match value {
        JsValue::Object(entries) => Ok(entries),
        other => Err(ChartError::InvalidOptions(format!(
            "{context} takes an object payload, got {other:?}"
        ))),
    }
}

impl MapChart {
    /// Applies options to one top-level group.
    ///
    /// `force` replaces the group's backing mapping wholesale. Otherwise the
    /// payload is routed: `plotOptions` wraps each entry in merged
    /// series-type options, an array payload for `xAxis`/`yAxis` switches
    /// that slot into multi-axis mode, an array for `colors` replaces the
    /// palette, and anything else merges into the named group, created on
    /// demand when the registry does not know it yet (open schema).
    pub fn set_options(&mut self, group: &str, value: JsValue, force: bool) -> ChartResult<()> {
        debug!(group, force, "set options");
        if force {
            return self.replace_options(group, value);
        }

        match (group, value) {
            ("plotOptions", value) => {
                let mut wrapped = Vec::new();
                for (key, per_type) in expect_object(group, value)? {
                    let series_type: SeriesType = key.parse()?;
                    let mut merged = series_type.default_options();
                    for (k, v) in expect_object(&key, per_type)? {
                        merged.insert(k, v);
                    }
                    wrapped.push((key, JsValue::Object(merged)));
                }
                if let Some(node) = self.options.get_mut("plotOptions") {
                    if let Some(plot_options) = node.as_group_mut() {
                        plot_options.merge(wrapped);
                    }
                }
                Ok(())
            }
            ("xAxis" | "yAxis", JsValue::Array(items)) => {
                let mut axes = Vec::with_capacity(items.len());
                for item in items {
                    axes.push(OptionGroup::from(expect_object(group, item)?));
                }
                self.options.insert(group.to_owned(), OptionNode::Axes(axes));
                Ok(())
            }
            ("colors", JsValue::Array(colors)) => {
                self.options
                    .insert(group.to_owned(), OptionNode::Palette(colors));
                Ok(())
            }
            (name, value) => {
                let node = self
                    .options
                    .entry(name.to_owned())
                    .or_insert_with(OptionNode::group);
                match node {
                    OptionNode::Group(entries) => {
                        entries.merge(expect_object(name, value)?);
                        Ok(())
                    }
                    // A further update on a multi-axis slot appends one axis.
                    OptionNode::Axes(axes) => {
                        axes.push(OptionGroup::from(expect_object(name, value)?));
                        Ok(())
                    }
                    OptionNode::Palette(_) => Err(ChartError::InvalidOptions(format!(
                        "option group {name:?} takes an array payload"
                    ))),
                }
            }
        }
    }

    fn replace_options(&mut self, group: &str, value: JsValue) -> ChartResult<()> {
        match (group, value) {
            ("colors", JsValue::Array(colors)) => {
                self.options
                    .insert(group.to_owned(), OptionNode::Palette(colors));
                Ok(())
            }
            ("xAxis" | "yAxis", JsValue::Array(items)) => {
                let mut axes = Vec::with_capacity(items.len());
                for item in items {
                    axes.push(OptionGroup::from(expect_object(group, item)?));
                }
                self.options.insert(group.to_owned(), OptionNode::Axes(axes));
                Ok(())
            }
            (name, value) => {
                let entries = expect_object(name, value)?;
                match self.options.get_mut(name) {
                    Some(OptionNode::Group(existing)) => existing.replace(entries),
                    _ => {
                        self.options
                            .insert(name.to_owned(), OptionNode::Group(OptionGroup::from(entries)));
                    }
                }
                Ok(())
            }
        }
    }

    /// Applies several option groups in one call.
    pub fn set_dict_options(
        &mut self,
        options: IndexMap<String, JsValue>,
    ) -> ChartResult<()> {
        for (group, value) in options {
            self.set_options(&group, value, false)?;
        }
        Ok(())
    }

    /// Sets the chart title text.
    pub fn set_title(&mut self, text: &str) {
        if let Some(title) = self
            .options
            .get_mut("title")
            .and_then(OptionNode::as_group_mut)
        {
            title.set("text", text);
        }
    }

    /// Current chart title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.option_group("title")
            .and_then(|title| title.get("text"))
            .and_then(JsValue::as_str)
    }

    /// Replaces the color cycle.
    pub fn set_colors<I, C>(&mut self, colors: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<JsValue>,
    {
        self.options.insert(
            "colors".to_owned(),
            OptionNode::Palette(colors.into_iter().map(Into::into).collect()),
        );
    }

    /// Current color cycle; empty when the palette was cleared.
    #[must_use]
    pub fn colors(&self) -> &[JsValue] {
        match self.options.get("colors") {
            Some(OptionNode::Palette(colors)) => colors,
            _ => &[],
        }
    }
}
