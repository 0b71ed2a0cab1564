// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed value model for event parameters.
//!
//! Every parameter a logged event carries is one of the variants of
//! [`ParamValue`]: a string, a double, a signed 64-bit integer, a boolean,
//! an ordered array of values, or a string-keyed dictionary of values.
//! Nothing else is representable, which is what lets the dispatch layer
//! flatten a [`ParameterMap`] into the transport's parameter bag without
//! ever failing.
//!
//! Equality is structural and variant-aware: `Int(3)` and `Double(3.0)`
//! are different values even though they are numerically equal.

use std::collections::BTreeMap;

use serde::Serialize;

/// A parameter map produced by encoding one event payload.
///
/// Keys are parameter names; insertion order is irrelevant for equality.
pub type ParameterMap = BTreeMap<String, ParamValue>;

/// One encodable parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
	String(String),
	Double(f64),
	Int(i64),
	Bool(bool),
	Array(Vec<ParamValue>),
	Dictionary(ParameterMap),
}

impl ParamValue {
	/// Returns the string payload, if this is a string variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the integer payload, if this is an integer variant.
	///
	/// Deliberately does not coerce doubles.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			ParamValue::Int(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the double payload, if this is a double variant.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			ParamValue::Double(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean payload, if this is a boolean variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ParamValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the elements, if this is an array variant.
	pub fn as_array(&self) -> Option<&[ParamValue]> {
		match self {
			ParamValue::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Returns the entries, if this is a dictionary variant.
	pub fn as_dictionary(&self) -> Option<&ParameterMap> {
		match self {
			ParamValue::Dictionary(map) => Some(map),
			_ => None,
		}
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::String(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::String(value.to_string())
	}
}

impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		ParamValue::Double(value)
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		ParamValue::Int(value)
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		ParamValue::Int(i64::from(value))
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		ParamValue::Bool(value)
	}
}

impl From<Vec<ParamValue>> for ParamValue {
	fn from(value: Vec<ParamValue>) -> Self {
		ParamValue::Array(value)
	}
}

impl From<ParameterMap> for ParamValue {
	fn from(value: ParameterMap) -> Self {
		ParamValue::Dictionary(value)
	}
}

/// A builder for hand-assembling a [`ParameterMap`].
///
/// The fixed event catalog uses this to spell out its parameter mappings.
/// Absent optional fields are skipped entirely rather than stored as a
/// placeholder, so `set_opt(key, None)` is a no-op.
///
/// # Example
///
/// ```
/// use ember_analytics_core::Params;
///
/// let params = Params::new()
///     .set("method", "Google")
///     .set_opt("coupon", None::<&str>)
///     .finish();
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params {
	inner: ParameterMap,
}

impl Params {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self {
			inner: ParameterMap::new(),
		}
	}

	/// Inserts a key-value pair.
	pub fn set<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<ParamValue>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Inserts a key-value pair when the value is present; skips the key
	/// entirely otherwise.
	pub fn set_opt<K, V>(self, key: K, value: Option<V>) -> Self
	where
		K: Into<String>,
		V: Into<ParamValue>,
	{
		match value {
			Some(value) => self.set(key, value),
			None => self,
		}
	}

	/// Consumes the builder and returns the finished map.
	pub fn finish(self) -> ParameterMap {
		self.inner
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn int_and_double_are_distinct_variants() {
		assert_ne!(ParamValue::Int(3), ParamValue::Double(3.0));
	}

	#[test]
	fn structural_equality_recurses_into_arrays() {
		let a = ParamValue::Array(vec![ParamValue::String("foo".into()), ParamValue::Int(1)]);
		let b = ParamValue::Array(vec![ParamValue::String("foo".into()), ParamValue::Int(1)]);
		assert_eq!(a, b);

		let c = ParamValue::Array(vec![ParamValue::Int(1), ParamValue::String("foo".into())]);
		assert_ne!(a, c); // order matters for arrays
	}

	#[test]
	fn dictionary_equality_ignores_insertion_order() {
		let mut first = ParameterMap::new();
		first.insert("a".into(), ParamValue::Int(1));
		first.insert("b".into(), ParamValue::Int(2));

		let mut second = ParameterMap::new();
		second.insert("b".into(), ParamValue::Int(2));
		second.insert("a".into(), ParamValue::Int(1));

		assert_eq!(ParamValue::Dictionary(first), ParamValue::Dictionary(second));
	}

	#[test]
	fn accessors_are_variant_exact() {
		assert_eq!(ParamValue::Int(7).as_i64(), Some(7));
		assert_eq!(ParamValue::Double(7.0).as_i64(), None);
		assert_eq!(ParamValue::String("x".into()).as_str(), Some("x"));
		assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
	}

	#[test]
	fn params_set_opt_skips_absent_values() {
		let map = Params::new()
			.set("present", 1i64)
			.set_opt("absent", None::<i64>)
			.finish();

		assert_eq!(map.get("present"), Some(&ParamValue::Int(1)));
		assert!(!map.contains_key("absent"));
	}

	#[test]
	fn params_last_write_wins() {
		let map = Params::new().set("k", 1i64).set("k", 2i64).finish();
		assert_eq!(map.get("k"), Some(&ParamValue::Int(2)));
	}

	proptest! {
		#[test]
		fn params_len_matches_unique_keys(keys in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
			let unique: std::collections::HashSet<_> = keys.iter().cloned().collect();
			let mut params = Params::new();
			for key in &keys {
				params = params.set(key.clone(), "v");
			}
			prop_assert_eq!(params.finish().len(), unique.len());
		}

		#[test]
		fn from_i32_and_i64_agree(n in any::<i32>()) {
			prop_assert_eq!(ParamValue::from(n), ParamValue::from(i64::from(n)));
		}
	}
}
