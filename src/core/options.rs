use indexmap::IndexMap;

use crate::core::value::JsValue;

/// Default Highcharts color cycle, emitted unless the caller replaces it.
pub const DEFAULT_COLOR_PALETTE: [&str; 10] = [
    "#7cb5ec", "#434348", "#90ed7e", "#f7a35c", "#8085e9", "#f15c80", "#e4d354", "#2b908f",
    "#f45b5b", "#91e8e1",
];

/// A mutable keyed bag of settings for one option group.
///
/// The schema is intentionally open: unknown keys are stored and emitted
/// verbatim so callers can pass through any option the charting library
/// understands without this crate having to enumerate it. Mutation is in
/// place; the defaults snapshot taken at construction stays fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionGroup {
    defaults: IndexMap<String, JsValue>,
    entries: IndexMap<String, JsValue>,
}

impl OptionGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group seeded with the given defaults. The snapshot is kept
    /// for introspection; the live entries start as a copy of it.
    #[must_use]
    pub fn with_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsValue>,
    {
        let defaults: IndexMap<String, JsValue> = defaults
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: defaults.clone(),
            defaults,
        }
    }

    /// Overwrites a single key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlays only the given keys onto the existing entries. Keys not
    /// mentioned are left untouched.
    pub fn merge<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsValue>,
    {
        for (key, value) in overrides {
            self.entries.insert(key.into(), value.into());
        }
    }

    /// Replaces the entire backing mapping.
    pub fn replace(&mut self, entries: IndexMap<String, JsValue>) {
        self.entries = entries;
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsValue)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn defaults(&self) -> &IndexMap<String, JsValue> {
        &self.defaults
    }

    /// Expands the current entries into a serializable value. Never fails;
    /// absent keys are simply omitted.
    #[must_use]
    pub fn to_value(&self) -> JsValue {
        JsValue::Object(self.entries.clone())
    }
}

impl From<IndexMap<String, JsValue>> for OptionGroup {
    fn from(entries: IndexMap<String, JsValue>) -> Self {
        Self {
            defaults: IndexMap::new(),
            entries,
        }
    }
}

/// One slot in the top-level options registry.
///
/// Most groups are plain keyed bags; `xAxis`/`yAxis` may be replaced by an
/// ordered list of axis groups, and `colors` is a bare array.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionNode {
    Group(OptionGroup),
    Axes(Vec<OptionGroup>),
    Palette(Vec<JsValue>),
}

impl OptionNode {
    #[must_use]
    pub fn group() -> Self {
        Self::Group(OptionGroup::new())
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&OptionGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut OptionGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> JsValue {
        match self {
            Self::Group(group) => group.to_value(),
            Self::Axes(axes) => JsValue::Array(axes.iter().map(OptionGroup::to_value).collect()),
            Self::Palette(colors) => JsValue::Array(colors.clone()),
        }
    }
}

/// Builds the primary options registry with its construction-time defaults:
/// the container id, a placeholder title, and disabled credits.
#[must_use]
pub fn default_options_registry() -> IndexMap<String, OptionNode> {
    let mut registry = IndexMap::new();
    registry.insert(
        "chart".to_owned(),
        OptionNode::Group(OptionGroup::with_defaults([("renderTo", "container")])),
    );
    registry.insert(
        "colors".to_owned(),
        OptionNode::Palette(
            DEFAULT_COLOR_PALETTE
                .iter()
                .map(|c| JsValue::from(*c))
                .collect(),
        ),
    );
    registry.insert(
        "credits".to_owned(),
        OptionNode::Group(OptionGroup::with_defaults([("enabled", false)])),
    );
    for name in [
        "drilldown",
        "exporting",
        "labels",
        "legend",
        "loading",
        "mapNavigation",
        "navigation",
        "plotOptions",
        "series",
        "subtitle",
    ] {
        registry.insert(name.to_owned(), OptionNode::group());
    }
    registry.insert(
        "title".to_owned(),
        OptionNode::Group(OptionGroup::with_defaults([("text", "A New Highchart")])),
    );
    for name in ["tooltip", "xAxis", "yAxis"] {
        registry.insert(name.to_owned(), OptionNode::group());
    }
    registry
}

/// Builds the secondary registry applied through `Highcharts.setOptions`.
#[must_use]
pub fn default_global_registry() -> IndexMap<String, OptionNode> {
    let mut registry = IndexMap::new();
    registry.insert("global".to_owned(), OptionNode::group());
    registry.insert("lang".to_owned(), OptionNode::group());
    registry
}
