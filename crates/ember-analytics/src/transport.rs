// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The transport seam between typed events and the underlying SDK.
//!
//! [`AnalyticsTransport`] is the only surface a platform binding has to
//! implement. Parameters cross the seam as loose JSON objects; the
//! flattening from the closed [`ParamValue`] model happens here so every
//! transport sees the same wire shapes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ember_analytics_core::{ParamValue, ParameterMap};
use serde_json::{Map, Value};

use crate::error::Result;

/// Shared handle to a transport implementation.
pub type DynAnalyticsTransport = Arc<dyn AnalyticsTransport>;

/// Delivery backend for analytics calls.
#[async_trait]
pub trait AnalyticsTransport: Send + Sync {
	/// Records an event under `name` with optional flattened parameters.
	async fn log_event(&self, name: &str, parameters: Option<Map<String, Value>>) -> Result<()>;

	/// Toggles collection for this app instance.
	async fn set_collection_enabled(&self, enabled: bool) -> Result<()>;

	/// Sets a user property; `None` clears it.
	async fn set_user_property(&self, name: &str, value: Option<String>) -> Result<()>;
}

/// Lowers a [`ParamValue`] into loose JSON.
///
/// Total: every value in the closed model has a JSON rendering.
/// Non-finite doubles have no JSON number form and lower to `null`.
pub fn flatten(value: &ParamValue) -> Value {
	match value {
		ParamValue::String(s) => Value::String(s.clone()),
		ParamValue::Double(d) => serde_json::Number::from_f64(*d)
			.map(Value::Number)
			.unwrap_or(Value::Null),
		ParamValue::Int(i) => Value::Number((*i).into()),
		ParamValue::Bool(b) => Value::Bool(*b),
		ParamValue::Array(values) => Value::Array(values.iter().map(flatten).collect()),
		ParamValue::Dictionary(map) => Value::Object(flatten_map(map)),
	}
}

/// Lowers a full parameter map into a JSON object.
pub fn flatten_map(map: &ParameterMap) -> Map<String, Value> {
	map.iter()
		.map(|(key, value)| (key.clone(), flatten(value)))
		.collect()
}

/// Transport that drops everything. Useful when analytics is disabled.
#[derive(Debug, Clone, Default)]
pub struct NoOpTransport;

#[async_trait]
impl AnalyticsTransport for NoOpTransport {
	async fn log_event(&self, _name: &str, _parameters: Option<Map<String, Value>>) -> Result<()> {
		Ok(())
	}

	async fn set_collection_enabled(&self, _enabled: bool) -> Result<()> {
		Ok(())
	}

	async fn set_user_property(&self, _name: &str, _value: Option<String>) -> Result<()> {
		Ok(())
	}
}

/// An event captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
	pub name: String,
	pub parameters: Option<Map<String, Value>>,
}

/// In-memory transport for tests and local inspection.
#[derive(Debug, Default)]
pub struct RecordingTransport {
	events: Mutex<Vec<LoggedEvent>>,
	collection_enabled: Mutex<Option<bool>>,
	user_properties: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything logged so far, in order.
	pub fn events(&self) -> Vec<LoggedEvent> {
		self.events.lock().unwrap().clone()
	}

	/// The last collection toggle, if any was made.
	pub fn collection_enabled(&self) -> Option<bool> {
		*self.collection_enabled.lock().unwrap()
	}

	/// User property calls, in order.
	pub fn user_properties(&self) -> Vec<(String, Option<String>)> {
		self.user_properties.lock().unwrap().clone()
	}
}

#[async_trait]
impl AnalyticsTransport for RecordingTransport {
	async fn log_event(&self, name: &str, parameters: Option<Map<String, Value>>) -> Result<()> {
		self.events.lock().unwrap().push(LoggedEvent {
			name: name.to_string(),
			parameters,
		});
		Ok(())
	}

	async fn set_collection_enabled(&self, enabled: bool) -> Result<()> {
		*self.collection_enabled.lock().unwrap() = Some(enabled);
		Ok(())
	}

	async fn set_user_property(&self, name: &str, value: Option<String>) -> Result<()> {
		self.user_properties
			.lock()
			.unwrap()
			.push((name.to_string(), value));
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ember_analytics_core::Params;
	use serde_json::json;

	#[test]
	fn flatten_preserves_scalars_and_nesting() {
		let map = Params::new()
			.set("title", "Hello")
			.set("likes", 3i64)
			.set("rating", 4.5)
			.set("published", true)
			.set(
				"tags",
				vec![ParamValue::from("foo"), ParamValue::from("bar")],
			)
			.set(
				"author",
				Params::new().set("name", "sam").finish(),
			)
			.finish();

		let flat = Value::Object(flatten_map(&map));
		assert_eq!(
			flat,
			json!({
				"title": "Hello",
				"likes": 3,
				"rating": 4.5,
				"published": true,
				"tags": ["foo", "bar"],
				"author": {"name": "sam"},
			})
		);
	}

	#[test]
	fn integers_do_not_become_floats() {
		let flat = flatten(&ParamValue::Int(3));
		assert!(flat.is_i64());
		assert_eq!(flat.as_i64(), Some(3));
	}

	#[test]
	fn non_finite_doubles_flatten_to_null() {
		assert_eq!(flatten(&ParamValue::Double(f64::NAN)), Value::Null);
		assert_eq!(flatten(&ParamValue::Double(f64::INFINITY)), Value::Null);
	}
}
