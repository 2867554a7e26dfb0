use chrono::{DateTime, Datelike, Timelike, Utc};
use uuid::Uuid;

use crate::core::value::JsValue;

/// Serializes option graphs into JavaScript object-literal text.
///
/// A standard JSON serializer cannot emit unquoted code, so encoding runs in
/// two passes. The structural pass lowers the value graph into
/// `serde_json::Value`, replacing every raw-code fragment and every date by
/// a fresh uuid-hex placeholder token and staging the literal text it stands
/// for. The textual pass serializes the lowered graph and then substitutes
/// each staged literal for its exact quoted token. Only quoted whole-token
/// matches are replaced, so ordinary string values sharing a substring with
/// a token survive untouched; a full-token collision with real document text
/// would corrupt output, which is accepted given 32 random hex digits per
/// token.
#[derive(Debug, Default)]
pub struct JsEncoder {
    staged: Vec<(String, String)>,
}

impl JsEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes one value graph. Total over every `JsValue`; never fails.
    pub fn encode(&mut self, value: &JsValue) -> String {
        let lowered = self.lower(value);
        let mut text = lowered.to_string();
        for (token, literal) in self.staged.drain(..) {
            let quoted = format!("\"{token}\"");
            text = text.replace(&quoted, &literal);
        }
        text
    }

    fn lower(&mut self, value: &JsValue) -> serde_json::Value {
        match value {
            JsValue::Null => serde_json::Value::Null,
            JsValue::Bool(b) => serde_json::Value::Bool(*b),
            JsValue::Number(n) => serde_json::Value::Number(n.clone()),
            JsValue::String(s) => serde_json::Value::String(s.clone()),
            JsValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(|item| self.lower(item)).collect())
            }
            JsValue::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), self.lower(item)))
                    .collect(),
            ),
            JsValue::Raw(raw) => self.stage(raw.as_str().to_owned()),
            JsValue::Date(date) => self.stage(date_utc_expression(date)),
        }
    }

    fn stage(&mut self, literal: String) -> serde_json::Value {
        let token = Uuid::new_v4().simple().to_string();
        self.staged.push((token.clone(), literal));
        serde_json::Value::String(token)
    }
}

/// Convenience wrapper for one-shot encodes.
#[must_use]
pub fn encode(value: &JsValue) -> String {
    JsEncoder::new().encode(value)
}

/// Formats a UTC timestamp as the `Date.UTC(...)` constructor expression the
/// charting library evaluates client-side. The month is zero-indexed and
/// sub-second precision is truncated to milliseconds.
#[must_use]
pub fn date_utc_expression(date: &DateTime<Utc>) -> String {
    format!(
        "Date.UTC({},{},{},{},{},{},{})",
        date.year(),
        date.month0(),
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        date.timestamp_subsec_millis()
    )
}
