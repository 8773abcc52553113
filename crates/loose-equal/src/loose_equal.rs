//! Upstream reference: bootstrap-vue/src/utils/loose-equal.js

use bv_value::{Category, Value};

// Assumes both a and b are arrays. The upstream helper iterates indices
// manually because `Array.prototype.every` skips sparse holes; here holes
// are materialized as `Value::Undefined`, so index-aligned iteration visits
// every position either way.
fn compare_arrays(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| loose_equal(x, y))
}

/// Loose structural equality between two host values.
///
/// Category probes run in a fixed order, first match wins:
///
/// 1. strict (`===`) equality;
/// 2. dates: equal iff both are dates with the same epoch millisecond;
/// 3. arrays: equal iff both are arrays of the same length whose
///    index-aligned elements are recursively loose-equal;
/// 4. keyed objects: unequal unless both are objects with the same own-key
///    count and recursively loose-equal values under every key;
/// 5. fallback: string coercions compared for textual identity.
///
/// If exactly one side matches a structural category the pair is unequal;
/// both sides must share the category to use its rule.
///
/// Known quirk, kept from the upstream: a fully successful key-by-key match
/// in step 4 does not return `true` directly - it falls through to the
/// string coercion of step 5. For objects with the default
/// `"[object Object]"` rendering the two agree, but an object with a
/// custom, content-dependent rendering can fail the coercion check even
/// when all keys match.
///
/// Never panics and never mutates its inputs. Values are owned trees, so
/// cyclic inputs cannot be constructed; recursion depth equals nesting
/// depth.
///
/// # Examples
///
/// ```
/// use bv_loose_equal::loose_equal;
/// use bv_value::Value;
///
/// let a = Value::object([("x", Value::from(1.0))]);
/// let b = Value::object([("x", Value::from(1.0))]);
/// let c = Value::object([("x", Value::from(2.0))]);
///
/// assert!(loose_equal(&a, &b));
/// assert!(!loose_equal(&a, &c));
///
/// // The coercion fallback: 1 and "1" render identically.
/// assert!(loose_equal(&Value::from(1.0), &Value::from("1")));
/// ```
pub fn loose_equal(a: &Value, b: &Value) -> bool {
    if a.strict_eq(b) {
        return true;
    }
    let a_category = a.category();
    let b_category = b.category();
    if a_category == Category::Temporal || b_category == Category::Temporal {
        return match (a, b) {
            (Value::Date(x), Value::Date(y)) => x == y,
            _ => false,
        };
    }
    if a_category == Category::Sequence || b_category == Category::Sequence {
        return match (a, b) {
            (Value::Array(x), Value::Array(y)) => compare_arrays(x, y),
            _ => false,
        };
    }
    if a_category == Category::Keyed || b_category == Category::Keyed {
        match (a, b) {
            (Value::Object(x), Value::Object(y)) => {
                if x.len() != y.len() {
                    return false;
                }
                for (key, value_a) in &x.entries {
                    match y.get(key) {
                        Some(value_b) => {
                            if !loose_equal(value_a, value_b) {
                                return false;
                            }
                        }
                        None => return false,
                    }
                }
                // Intentionally no `return true`: fall through to the
                // string coercion, as the upstream does.
            }
            _ => return false,
        }
    }
    a.to_string() == b.to_string()
}
