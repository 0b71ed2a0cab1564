// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the analytics dispatch layer.

use ember_analytics_core::{CustomEventError, EncodeError, NameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Why an event could not be logged.
#[derive(Debug, Error)]
pub enum AnalyticsError {
	#[error(transparent)]
	Name(#[from] NameError),

	#[error(transparent)]
	Encode(#[from] EncodeError),

	#[error("transport failure: {message}")]
	Transport { message: String },
}

impl AnalyticsError {
	pub fn transport(message: impl Into<String>) -> Self {
		Self::Transport {
			message: message.into(),
		}
	}
}

impl From<CustomEventError> for AnalyticsError {
	fn from(err: CustomEventError) -> Self {
		match err {
			CustomEventError::Name(e) => Self::Name(e),
			CustomEventError::Encode(e) => Self::Encode(e),
		}
	}
}
