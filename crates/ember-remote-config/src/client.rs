// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The typed remote config client.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::backend::DynRemoteConfigBackend;
use crate::error::Result;
use crate::settings::ConfigSettings;
use crate::status::{FetchAndActivateStatus, FetchStatus};
use crate::value::ConfigValue;

/// Application-facing surface over a
/// [`RemoteConfigBackend`](crate::backend::RemoteConfigBackend).
///
/// Typed getters never fail; absent keys resolve to the zero value of the
/// requested type. Cloning is cheap and all clones share the backend.
#[derive(Clone)]
pub struct RemoteConfigClient {
	backend: DynRemoteConfigBackend,
}

impl RemoteConfigClient {
	pub fn new(backend: DynRemoteConfigBackend) -> Self {
		Self { backend }
	}

	pub async fn configure(&self, settings: ConfigSettings) -> Result<()> {
		self.backend.configure(settings).await
	}

	pub async fn set_defaults(&self, defaults: HashMap<String, String>) -> Result<()> {
		self.backend.set_defaults(defaults).await
	}

	pub async fn ensure_initialized(&self) -> Result<()> {
		self.backend.ensure_initialized().await
	}

	pub async fn last_fetch_time(&self) -> Option<DateTime<Utc>> {
		self.backend.last_fetch_time().await
	}

	pub async fn last_fetch_status(&self) -> FetchStatus {
		self.backend.last_fetch_status().await
	}

	pub async fn fetch(&self) -> Result<FetchStatus> {
		self.backend.fetch().await
	}

	pub async fn fetch_with_max_age(&self, max_age: Duration) -> Result<FetchStatus> {
		self.backend.fetch_with_max_age(max_age).await
	}

	pub async fn fetch_and_activate(&self) -> Result<FetchAndActivateStatus> {
		self.backend.fetch_and_activate().await
	}

	/// Like [`fetch_and_activate`](Self::fetch_and_activate), but folds
	/// failures into [`FetchAndActivateStatus::Error`] for callers that
	/// only care about the outcome.
	pub async fn fetch_and_activate_status(&self) -> FetchAndActivateStatus {
		match self.backend.fetch_and_activate().await {
			Ok(status) => status,
			Err(err) => {
				warn!(error = %err, "fetch and activate failed");
				FetchAndActivateStatus::Error
			}
		}
	}

	pub async fn activate(&self) -> Result<bool> {
		self.backend.activate().await
	}

	/// The raw value for `key`, with provenance.
	pub async fn value(&self, key: &str) -> ConfigValue {
		self.backend.value(key).await
	}

	pub async fn string(&self, key: &str) -> String {
		self.backend.value(key).await.as_str().to_string()
	}

	pub async fn number(&self, key: &str) -> f64 {
		self.backend.value(key).await.as_f64()
	}

	pub async fn integer(&self, key: &str) -> i64 {
		self.backend.value(key).await.as_i64()
	}

	pub async fn boolean(&self, key: &str) -> bool {
		self.backend.value(key).await.as_bool()
	}

	pub async fn bytes(&self, key: &str) -> Vec<u8> {
		self.backend.value(key).await.as_bytes().to_vec()
	}

	pub async fn json(&self, key: &str) -> Option<Value> {
		self.backend.value(key).await.as_json()
	}
}

impl std::fmt::Debug for RemoteConfigClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RemoteConfigClient").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::InMemoryBackend;
	use crate::error::RemoteConfigError;
	use crate::status::Source;
	use serde_json::json;
	use std::sync::Arc;

	fn client_with_backend() -> (RemoteConfigClient, Arc<InMemoryBackend>) {
		let backend = Arc::new(InMemoryBackend::new());
		(RemoteConfigClient::new(backend.clone()), backend)
	}

	#[tokio::test]
	async fn typed_getters_resolve_through_the_lifecycle() {
		let (client, backend) = client_with_backend();
		client.ensure_initialized().await.unwrap();
		client
			.set_defaults(HashMap::from([
				("welcome".to_string(), "hello".to_string()),
				("retries".to_string(), "3".to_string()),
			]))
			.await
			.unwrap();
		backend.set_remote_values([
			("welcome", "bonjour"),
			("dark_mode", "true"),
			("ratio", "0.75"),
			("payload", r#"{"cohort": "b"}"#),
		]);

		assert_eq!(
			client.fetch_and_activate().await.unwrap(),
			FetchAndActivateStatus::SuccessFetchedFromRemote
		);

		assert_eq!(client.string("welcome").await, "bonjour");
		assert_eq!(client.integer("retries").await, 3);
		assert!(client.boolean("dark_mode").await);
		assert_eq!(client.number("ratio").await, 0.75);
		assert_eq!(client.json("payload").await, Some(json!({"cohort": "b"})));
		assert_eq!(client.bytes("welcome").await, b"bonjour");

		assert_eq!(client.value("retries").await.source(), Source::Default);
		assert_eq!(client.value("welcome").await.source(), Source::Remote);
	}

	#[tokio::test]
	async fn absent_keys_resolve_to_zero_values() {
		let (client, _backend) = client_with_backend();
		assert_eq!(client.string("nope").await, "");
		assert_eq!(client.integer("nope").await, 0);
		assert_eq!(client.number("nope").await, 0.0);
		assert!(!client.boolean("nope").await);
		assert_eq!(client.json("nope").await, None);
		assert_eq!(client.value("nope").await.source(), Source::Static);
	}

	#[tokio::test]
	async fn status_fold_reports_errors() {
		let (client, backend) = client_with_backend();
		backend.fail_next_fetch(RemoteConfigError::Throttled);
		assert_eq!(
			client.fetch_and_activate_status().await,
			FetchAndActivateStatus::Error
		);
		assert_eq!(client.last_fetch_status().await, FetchStatus::Throttled);
	}

	#[tokio::test]
	async fn settings_reach_the_backend() {
		let (client, backend) = client_with_backend();
		client
			.configure(ConfigSettings::new().with_minimum_fetch_interval(Duration::ZERO))
			.await
			.unwrap();

		backend.set_remote_value("k", "one");
		client.fetch_and_activate().await.unwrap();
		backend.set_remote_value("k", "two");
		// Zero interval means every fetch re-pulls.
		client.fetch_and_activate().await.unwrap();
		assert_eq!(client.string("k").await, "two");
	}
}
