//! Host string coercion (`String(x)`) for [`Value`].
//!
//! The loose comparison falls back to comparing text renderings when no
//! structural category applies, so this mirrors the source runtime's
//! coercion rules rather than a serialization format.

use std::fmt;

use chrono::{DateTime, SecondsFormat};

use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&render_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Date(ms) => match DateTime::from_timestamp_millis(*ms) {
                Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
                None => f.write_str("Invalid Date"),
            },
            Value::Array(items) => {
                // Array coercion joins element renderings with commas;
                // null and undefined elements render as nothing.
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    match item {
                        Value::Undefined | Value::Null => {}
                        other => write!(f, "{other}")?,
                    }
                }
                Ok(())
            }
            Value::Object(obj) => match &obj.rendering {
                Some(rendering) => f.write_str(rendering),
                None => f.write_str("[object Object]"),
            },
            Value::Opaque(text) => f.write_str(text),
        }
    }
}

/// Number-to-string coercion: `NaN`, signed `Infinity`, both zeros as `0`,
/// everything else via the shortest round-trip rendering (which, like the
/// host runtime, drops the fraction of integral values).
fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}
