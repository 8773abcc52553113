//! bv-value - dynamic host value model.
//!
//! Rust counterpart of the untyped values that flow through bootstrap-vue's
//! internal utils: primitives, dates, (possibly sparse) arrays, keyed
//! objects, and opaque host values that only expose a text rendering.
//!
//! The source runtime classifies values dynamically with `isDate`, `isArray`
//! and `isObject` probes; here the same classification is a closed sum type
//! ([`Value`]) with a pure [`Value::category`] function over it.

mod convert;
mod display;
mod value;

pub use convert::ConvertError;
pub use value::{Category, ObjectValue, Value};
