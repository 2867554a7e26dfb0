use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Number;

/// A fragment of JavaScript emitted verbatim into the serialized output.
///
/// The wrapped text is never parsed or escaped; it is substituted unquoted
/// at the structurally correct position. This is the escape hatch for event
/// handlers, formatter functions, and library-namespaced lookups that must
/// appear as executable code rather than data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJs(String);

impl RawJs {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawJs {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for RawJs {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// One value in the chart option graph.
///
/// A single closed variant set covers everything the encoder has to emit:
/// plain JSON data, nested ordered objects, raw code fragments, and UTC
/// timestamps that lower to `Date.UTC(...)` expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsValue>),
    Object(IndexMap<String, JsValue>),
    Raw(RawJs),
    Date(DateTime<Utc>),
}

impl JsValue {
    /// Raw-code constructor shorthand.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(RawJs::new(text))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, JsValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for JsValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i64> for JsValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for JsValue {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<RawJs> for JsValue {
    fn from(value: RawJs) -> Self {
        Self::Raw(value)
    }
}

impl From<DateTime<Utc>> for JsValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<JsValue>> From<Vec<T>> for JsValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, JsValue>> for JsValue {
    fn from(map: IndexMap<String, JsValue>) -> Self {
        Self::Object(map)
    }
}

/// Plain-data JSON view. Raw fragments and dates flatten to strings here;
/// unquoted code emission only happens through the encoder.
impl serde::Serialize for JsValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Self::Raw(raw) => serializer.serialize_str(raw.as_str()),
            Self::Date(date) => serializer.serialize_str(&date.to_rfc3339()),
        }
    }
}

impl<'de> serde::Deserialize<'de> for JsValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(serde_json::Value::deserialize(deserializer)?.into())
    }
}

impl From<serde_json::Value> for JsValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
