// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-side fetch settings.

use std::time::Duration;

/// Default minimum interval between fetches: 12 hours.
pub const DEFAULT_MINIMUM_FETCH_INTERVAL: Duration = Duration::from_secs(12 * 60 * 60);

/// Default per-fetch timeout: 60 seconds.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Tuning knobs for the fetch machinery.
///
/// `None` fields mean the backend default applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigSettings {
	/// Minimum interval between successive fetches. Lower it during
	/// development to see config changes quickly.
	pub minimum_fetch_interval: Option<Duration>,
	/// How long a single fetch may take before it is abandoned.
	pub fetch_timeout: Option<Duration>,
}

impl ConfigSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_minimum_fetch_interval(mut self, interval: Duration) -> Self {
		self.minimum_fetch_interval = Some(interval);
		self
	}

	pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
		self.fetch_timeout = Some(timeout);
		self
	}

	/// The effective minimum fetch interval.
	pub fn minimum_fetch_interval(&self) -> Duration {
		self.minimum_fetch_interval
			.unwrap_or(DEFAULT_MINIMUM_FETCH_INTERVAL)
	}

	/// The effective fetch timeout.
	pub fn fetch_timeout(&self) -> Duration {
		self.fetch_timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_apply_when_unset() {
		let settings = ConfigSettings::new();
		assert_eq!(
			settings.minimum_fetch_interval(),
			DEFAULT_MINIMUM_FETCH_INTERVAL
		);
		assert_eq!(settings.fetch_timeout(), DEFAULT_FETCH_TIMEOUT);
	}

	#[test]
	fn overrides_take_precedence() {
		let settings = ConfigSettings::new()
			.with_minimum_fetch_interval(Duration::ZERO)
			.with_fetch_timeout(Duration::from_secs(5));
		assert_eq!(settings.minimum_fetch_interval(), Duration::ZERO);
		assert_eq!(settings.fetch_timeout(), Duration::from_secs(5));
	}
}
