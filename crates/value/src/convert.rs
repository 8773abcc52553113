//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! JSON covers only part of the host value domain: `undefined`, dates,
//! opaque values, non-finite numbers and custom-rendered objects have no
//! JSON counterpart, so the reverse direction is fallible.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::value::{ObjectValue, Value};

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error("`undefined` has no JSON representation")]
    Undefined,
    #[error("dates have no JSON representation")]
    Date,
    #[error("opaque host values have no JSON representation")]
    Opaque,
    #[error("objects with a custom text rendering have no JSON representation")]
    CustomRendering,
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = ConvertError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Undefined => Err(ConvertError::Undefined),
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(b) => Ok(JsonValue::Bool(*b)),
            // Integral values in the safe-integer range serialize as JSON
            // integers, matching the host runtime's JSON output for them.
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                Ok(JsonValue::from(*n as i64))
            }
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .ok_or(ConvertError::NonFiniteNumber(*n)),
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::Date(_) => Err(ConvertError::Date),
            Value::Array(items) => items
                .iter()
                .map(JsonValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(JsonValue::Array),
            Value::Object(ObjectValue { entries, rendering }) => {
                if rendering.is_some() {
                    return Err(ConvertError::CustomRendering);
                }
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), JsonValue::try_from(v)?)))
                    .collect::<Result<serde_json::Map<_, _>, _>>()
                    .map(JsonValue::Object)
            }
            Value::Opaque(_) => Err(ConvertError::Opaque),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip() {
        let json = json!({"a": 1, "b": [true, null, "x"], "c": {"d": 2.5}});
        let value = Value::from(json.clone());
        assert_eq!(JsonValue::try_from(&value).unwrap(), json);
    }

    #[test]
    fn json_object_keys_keep_order() {
        let value = Value::from(json!({"z": 1, "a": 2}));
        let Value::Object(obj) = &value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = obj.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn non_json_values_fail_conversion() {
        assert_eq!(JsonValue::try_from(&Value::Undefined), Err(ConvertError::Undefined));
        assert_eq!(JsonValue::try_from(&Value::date(0)), Err(ConvertError::Date));
        assert_eq!(
            JsonValue::try_from(&Value::Opaque("fn".into())),
            Err(ConvertError::Opaque)
        );
        assert!(matches!(
            JsonValue::try_from(&Value::Number(f64::NAN)),
            Err(ConvertError::NonFiniteNumber(n)) if n.is_nan()
        ));
        let custom = crate::ObjectValue::new().with_rendering("Point");
        assert_eq!(
            JsonValue::try_from(&Value::Object(custom)),
            Err(ConvertError::CustomRendering)
        );
    }
}
