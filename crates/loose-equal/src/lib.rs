//! bv-loose-equal - loose structural equality for dynamic host values.
//!
//! Mirrors the `looseEqual` helper from bootstrap-vue's internal utils,
//! ported against the [`bv_value::Value`] model.
//!
//! Provides [`loose_equal`] for deciding whether two arbitrary runtime
//! values should be considered equal for state-diffing purposes, applying
//! type-specific rules for dates, arrays and keyed objects and falling back
//! to string coercion for everything else.

mod loose_equal;

pub use loose_equal::loose_equal;
