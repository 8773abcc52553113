//! Value - an untyped host runtime value.
//!
//! Upstream reference: bootstrap-vue/src/utils/inspect.js

use indexmap::IndexMap;

/// A value of the host runtime, as seen by the state-diffing utilities.
///
/// `Undefined` doubles as the read of a sparse-array hole: indexing a hole
/// in the source runtime yields the undefined value, so a hole at index `i`
/// is stored as `Value::Undefined` at index `i`.
///
/// Derived `PartialEq` is plain structural equality; the loose comparison
/// policy (date/array/object special-casing, string-coercion fallback) lives
/// in the `bv-loose-equal` crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// A date, carried as milliseconds since the Unix epoch.
    Date(i64),
    Array(Vec<Value>),
    Object(ObjectValue),
    /// A host value outside the structural categories (a function, a
    /// symbol) that only exposes its text rendering.
    Opaque(String),
}

/// A keyed object value: insertion-ordered own entries, plus an optional
/// custom text rendering for host objects that override the default
/// `"[object Object]"`.
///
/// The entry map is the complete own-key set; there is no prototype chain,
/// so inherited keys cannot occur.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
    pub entries: IndexMap<String, Value>,
    pub rendering: Option<String>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the default text rendering, modeling a host object with its
    /// own `toString`.
    pub fn with_rendering(mut self, rendering: impl Into<String>) -> Self {
        self.rendering = Some(rendering.into());
        self
    }
}

impl FromIterator<(String, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            rendering: None,
        }
    }
}

/// Shape category of a [`Value`], mirroring the probe order of the source
/// runtime's loose comparison: dates, then arrays, then keyed objects, then
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Temporal,
    Sequence,
    Keyed,
    Other,
}

impl Value {
    /// Classifies this value into its shape category.
    ///
    /// The categories are mutually exclusive by construction: a date is
    /// never also array-like, so each value maps to exactly one tag.
    pub fn category(&self) -> Category {
        match self {
            Value::Date(_) => Category::Temporal,
            Value::Array(_) => Category::Sequence,
            Value::Object(_) => Category::Keyed,
            _ => Category::Other,
        }
    }

    /// Strict (`===`) equality: value equality for primitives, reference
    /// identity for everything else.
    ///
    /// `Number` uses IEEE comparison, so `NaN` is not strictly equal to
    /// itself. Dates, arrays, objects and opaque values are strictly equal
    /// only when `self` and `other` are the same allocation.
    pub fn strict_eq(&self, other: &Value) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    /// Builds a keyed object from `(key, value)` pairs.
    pub fn object<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Builds a date from milliseconds since the Unix epoch.
    pub fn date(epoch_millis: i64) -> Value {
        Value::Date(epoch_millis)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<ObjectValue> for Value {
    fn from(v: ObjectValue) -> Self {
        Value::Object(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags() {
        assert_eq!(Value::date(0).category(), Category::Temporal);
        assert_eq!(Value::Array(vec![]).category(), Category::Sequence);
        assert_eq!(Value::object::<&str, _>([]).category(), Category::Keyed);
        assert_eq!(Value::Undefined.category(), Category::Other);
        assert_eq!(Value::Null.category(), Category::Other);
        assert_eq!(Value::from(1.0).category(), Category::Other);
        assert_eq!(Value::from("x").category(), Category::Other);
        assert_eq!(Value::Opaque("fn".into()).category(), Category::Other);
    }

    #[test]
    fn strict_eq_primitives() {
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(Value::Undefined.strict_eq(&Value::Undefined));
        assert!(Value::from(true).strict_eq(&Value::from(true)));
        assert!(Value::from(1.0).strict_eq(&Value::from(1.0)));
        assert!(Value::from("a").strict_eq(&Value::from("a")));
        assert!(!Value::from("a").strict_eq(&Value::from("b")));
        assert!(!Value::Null.strict_eq(&Value::Undefined));
    }

    #[test]
    fn strict_eq_nan_is_not_itself() {
        let a = Value::Number(f64::NAN);
        let b = Value::Number(f64::NAN);
        assert!(!a.strict_eq(&b));
    }

    #[test]
    fn strict_eq_composites_by_identity_only() {
        let a = Value::Array(vec![Value::from(1.0)]);
        let b = Value::Array(vec![Value::from(1.0)]);
        assert!(!a.strict_eq(&b));
        assert!(a.strict_eq(&a));

        let o = Value::object([("k", Value::from(1.0))]);
        assert!(o.strict_eq(&o));
        assert!(!o.strict_eq(&o.clone()));
    }

    #[test]
    fn object_accessors() {
        let mut obj = ObjectValue::new();
        assert!(obj.is_empty());
        assert_eq!(obj.len(), 0);
        obj.set("a", Value::from(1.0));
        assert!(!obj.is_empty());
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a"), Some(&Value::from(1.0)));
        assert_eq!(obj.get("b"), None);
    }

    #[test]
    fn object_entries_keep_insertion_order() {
        let mut obj = ObjectValue::new();
        obj.set("b", Value::from(1.0));
        obj.set("a", Value::from(2.0));
        let keys: Vec<&str> = obj.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
