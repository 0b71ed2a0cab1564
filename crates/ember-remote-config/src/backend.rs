// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The backend seam and an in-memory reference implementation.
//!
//! [`RemoteConfigBackend`] models the fetch/activate lifecycle: fetched
//! values are staged until [`activate`](RemoteConfigBackend::activate)
//! makes them visible to lookups, so a fetch can never change behavior
//! mid-session. [`InMemoryBackend`] implements the full lifecycle against
//! process-local state and doubles as the test backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{RemoteConfigError, Result};
use crate::settings::ConfigSettings;
use crate::status::{FetchAndActivateStatus, FetchStatus, Source};
use crate::value::ConfigValue;

/// Shared handle to a backend implementation.
pub type DynRemoteConfigBackend = Arc<dyn RemoteConfigBackend>;

/// Storage and fetch machinery behind the client.
#[async_trait]
pub trait RemoteConfigBackend: Send + Sync {
	/// Applies client-side fetch settings.
	async fn configure(&self, settings: ConfigSettings) -> Result<()>;

	/// Replaces the in-app default values.
	async fn set_defaults(&self, defaults: HashMap<String, String>) -> Result<()>;

	/// When the last successful fetch completed, if any.
	async fn last_fetch_time(&self) -> Option<DateTime<Utc>>;

	/// Outcome of the most recent fetch attempt.
	async fn last_fetch_status(&self) -> FetchStatus;

	/// Resolves once the backend has loaded its initial state.
	async fn ensure_initialized(&self) -> Result<()>;

	/// Fetches config honoring the configured minimum fetch interval.
	async fn fetch(&self) -> Result<FetchStatus>;

	/// Fetches config, treating cached data younger than `max_age` as
	/// fresh.
	async fn fetch_with_max_age(&self, max_age: Duration) -> Result<FetchStatus>;

	/// Fetches and immediately activates.
	async fn fetch_and_activate(&self) -> Result<FetchAndActivateStatus>;

	/// Makes the most recently fetched values visible to lookups.
	/// Returns whether the active set changed.
	async fn activate(&self) -> Result<bool>;

	/// Looks up a key. Never fails: missing keys yield the static empty
	/// value.
	async fn value(&self, key: &str) -> ConfigValue;
}

#[derive(Debug, Default)]
struct Inner {
	settings: ConfigSettings,
	defaults: HashMap<String, String>,
	remote: HashMap<String, String>,
	staged: Option<HashMap<String, String>>,
	active: HashMap<String, String>,
	last_fetch_time: Option<DateTime<Utc>>,
	last_fetch_status: FetchStatus,
	next_fetch_error: Option<RemoteConfigError>,
}

/// Process-local backend implementing the full fetch/activate lifecycle.
///
/// The "remote" side is seeded through
/// [`set_remote_value`](InMemoryBackend::set_remote_value); fetching
/// stages a snapshot of it and activation publishes the snapshot.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
	inner: Mutex<Inner>,
}

impl InMemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds one value on the simulated remote side.
	pub fn set_remote_value(&self, key: impl Into<String>, raw: impl Into<String>) {
		self.inner
			.lock()
			.unwrap()
			.remote
			.insert(key.into(), raw.into());
	}

	/// Seeds the simulated remote side in bulk.
	pub fn set_remote_values<I, K, V>(&self, values: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut inner = self.inner.lock().unwrap();
		for (key, value) in values {
			inner.remote.insert(key.into(), value.into());
		}
	}

	/// Makes the next fetch fail with `error`.
	pub fn fail_next_fetch(&self, error: RemoteConfigError) {
		self.inner.lock().unwrap().next_fetch_error = Some(error);
	}

	fn fetch_inner(&self, max_age: Duration) -> Result<FetchStatus> {
		let mut inner = self.inner.lock().unwrap();

		if let Some(error) = inner.next_fetch_error.take() {
			inner.last_fetch_status = match error {
				RemoteConfigError::Throttled => FetchStatus::Throttled,
				_ => FetchStatus::Failure,
			};
			return Err(error);
		}

		let now = Utc::now();
		let cache_is_fresh = inner.staged.is_some()
			&& inner.last_fetch_time.is_some_and(|at| {
				(now - at).to_std().map(|age| age < max_age).unwrap_or(false)
			});
		if cache_is_fresh {
			debug!("remote config cache is fresh, skipping fetch");
			inner.last_fetch_status = FetchStatus::Success;
			return Ok(FetchStatus::Success);
		}

		let snapshot = inner.remote.clone();
		debug!(keys = snapshot.len(), "fetched remote config");
		inner.staged = Some(snapshot);
		inner.last_fetch_time = Some(now);
		inner.last_fetch_status = FetchStatus::Success;
		Ok(FetchStatus::Success)
	}

	fn activate_inner(&self) -> bool {
		let mut inner = self.inner.lock().unwrap();
		let Some(staged) = inner.staged.take() else {
			return false;
		};
		let changed = staged != inner.active;
		inner.active = staged;
		debug!(changed, "activated remote config");
		changed
	}
}

#[async_trait]
impl RemoteConfigBackend for InMemoryBackend {
	async fn configure(&self, settings: ConfigSettings) -> Result<()> {
		self.inner.lock().unwrap().settings = settings;
		Ok(())
	}

	async fn set_defaults(&self, defaults: HashMap<String, String>) -> Result<()> {
		self.inner.lock().unwrap().defaults = defaults;
		Ok(())
	}

	async fn last_fetch_time(&self) -> Option<DateTime<Utc>> {
		self.inner.lock().unwrap().last_fetch_time
	}

	async fn last_fetch_status(&self) -> FetchStatus {
		self.inner.lock().unwrap().last_fetch_status
	}

	async fn ensure_initialized(&self) -> Result<()> {
		Ok(())
	}

	async fn fetch(&self) -> Result<FetchStatus> {
		let max_age = self.inner.lock().unwrap().settings.minimum_fetch_interval();
		self.fetch_inner(max_age)
	}

	async fn fetch_with_max_age(&self, max_age: Duration) -> Result<FetchStatus> {
		self.fetch_inner(max_age)
	}

	async fn fetch_and_activate(&self) -> Result<FetchAndActivateStatus> {
		self.fetch().await?;
		Ok(if self.activate_inner() {
			FetchAndActivateStatus::SuccessFetchedFromRemote
		} else {
			FetchAndActivateStatus::SuccessUsingPreFetchedData
		})
	}

	async fn activate(&self) -> Result<bool> {
		Ok(self.activate_inner())
	}

	async fn value(&self, key: &str) -> ConfigValue {
		let inner = self.inner.lock().unwrap();
		if let Some(raw) = inner.active.get(key) {
			return ConfigValue::new(raw.clone(), Source::Remote);
		}
		if let Some(raw) = inner.defaults.get(key) {
			return ConfigValue::new(raw.clone(), Source::Default);
		}
		ConfigValue::unset()
	}
}
