// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Config values and their typed views.

use serde_json::Value;

use crate::status::Source;

const TRUTHY: [&str; 6] = ["1", "true", "t", "yes", "y", "on"];

/// A single config value: raw text plus its provenance.
///
/// Values are stored as strings on the wire. The typed accessors parse on
/// demand and fall back to the zero value of the requested type, so
/// lookups never fail; check [`source`](Self::source) to distinguish a
/// real zero from a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
	raw: String,
	source: Source,
}

impl ConfigValue {
	pub fn new(raw: impl Into<String>, source: Source) -> Self {
		Self {
			raw: raw.into(),
			source,
		}
	}

	/// The empty value returned for keys nobody set.
	pub fn unset() -> Self {
		Self::new("", Source::Static)
	}

	pub fn source(&self) -> Source {
		self.source
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.raw.as_bytes()
	}

	/// The value parsed as a float, or `0.0`.
	pub fn as_f64(&self) -> f64 {
		self.raw.trim().parse().unwrap_or(0.0)
	}

	/// The value parsed as an integer, or `0`.
	pub fn as_i64(&self) -> i64 {
		self.raw.trim().parse().unwrap_or(0)
	}

	/// Whether the value reads as true.
	///
	/// Recognizes `1`, `true`, `t`, `yes`, `y` and `on`, case
	/// insensitively. Everything else is false.
	pub fn as_bool(&self) -> bool {
		let lowered = self.raw.trim().to_ascii_lowercase();
		TRUTHY.contains(&lowered.as_str())
	}

	/// The value parsed as JSON, or `None` when it is not valid JSON.
	pub fn as_json(&self) -> Option<Value> {
		serde_json::from_str(&self.raw).ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn typed_views_parse_the_raw_string() {
		let value = ConfigValue::new("42", Source::Remote);
		assert_eq!(value.as_str(), "42");
		assert_eq!(value.as_i64(), 42);
		assert_eq!(value.as_f64(), 42.0);
		assert!(!value.as_bool());
	}

	#[test]
	fn as_bool_recognizes_the_truthy_set() {
		for raw in ["1", "true", "TRUE", "t", "yes", "Y", "on"] {
			assert!(ConfigValue::new(raw, Source::Default).as_bool(), "{raw}");
		}
		for raw in ["0", "false", "off", "", "maybe"] {
			assert!(!ConfigValue::new(raw, Source::Default).as_bool(), "{raw}");
		}
	}

	#[test]
	fn unparsable_numbers_fall_back_to_zero() {
		let value = ConfigValue::new("not a number", Source::Default);
		assert_eq!(value.as_f64(), 0.0);
		assert_eq!(value.as_i64(), 0);
	}

	#[test]
	fn json_view_handles_both_outcomes() {
		let value = ConfigValue::new(r#"{"flag": true}"#, Source::Remote);
		assert_eq!(value.as_json(), Some(json!({"flag": true})));
		assert_eq!(ConfigValue::new("{broken", Source::Remote).as_json(), None);
	}

	#[test]
	fn unset_is_static_and_empty() {
		let value = ConfigValue::unset();
		assert_eq!(value.source(), Source::Static);
		assert_eq!(value.as_str(), "");
		assert!(value.as_bytes().is_empty());
	}
}
