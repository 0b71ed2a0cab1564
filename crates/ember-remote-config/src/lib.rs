// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed remote configuration.
//!
//! [`RemoteConfigClient`] wraps a pluggable [`RemoteConfigBackend`] and
//! exposes the fetch/activate lifecycle plus typed value getters that
//! never fail. [`InMemoryBackend`] implements the lifecycle against
//! process-local state for tests and offline use.

pub mod backend;
pub mod client;
pub mod error;
pub mod settings;
pub mod status;
pub mod value;

pub use backend::{DynRemoteConfigBackend, InMemoryBackend, RemoteConfigBackend};
pub use client::RemoteConfigClient;
pub use error::{RemoteConfigError, Result};
pub use settings::{ConfigSettings, DEFAULT_FETCH_TIMEOUT, DEFAULT_MINIMUM_FETCH_INTERVAL};
pub use status::{FetchAndActivateStatus, FetchStatus, Source};
pub use value::ConfigValue;
