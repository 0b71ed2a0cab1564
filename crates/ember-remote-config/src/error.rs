// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for remote configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemoteConfigError>;

/// Why a remote config operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteConfigError {
	/// The fetch failed for an unknown or unclassified reason.
	#[error("remote config fetch failed: {0}")]
	Unknown(String),

	/// The backend is throttling this app instance.
	#[error("remote config fetch throttled")]
	Throttled,

	/// The backend itself reported an internal failure.
	#[error("remote config internal error: {0}")]
	Internal(String),
}
