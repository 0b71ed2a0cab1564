// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fetch lifecycle states and value provenance.

/// Outcome of the most recent fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
	/// No fetch has been attempted in this app session.
	#[default]
	NoFetchYet,
	/// The last fetch succeeded; values await activation.
	Success,
	/// The last fetch failed.
	Failure,
	/// The backend throttled the last fetch.
	Throttled,
}

/// Outcome of a combined fetch-and-activate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAndActivateStatus {
	/// Fresh values were fetched from the backend and activated.
	SuccessFetchedFromRemote,
	/// Nothing new to fetch; previously fetched values were activated.
	SuccessUsingPreFetchedData,
	/// The fetch or the activation failed.
	Error,
}

/// Where a config value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
	/// An activated value fetched from the backend.
	Remote,
	/// A value from the in-app defaults.
	Default,
	/// The zero value returned for keys nobody set.
	Static,
}
