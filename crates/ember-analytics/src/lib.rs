// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed analytics event dispatch.
//!
//! [`AnalyticsClient`] is the application-facing surface: it takes typed
//! [`Event`](ember_analytics_core::Event)s and custom payloads, renders
//! them into wire shape, and delivers them through a pluggable
//! [`AnalyticsTransport`]. Ship a real transport in production, the
//! [`NoOpTransport`] when analytics is off, and [`RecordingTransport`]
//! in tests.

pub mod client;
pub mod error;
pub mod transport;

pub use client::AnalyticsClient;
pub use error::{AnalyticsError, Result};
pub use transport::{
	flatten, flatten_map, AnalyticsTransport, DynAnalyticsTransport, LoggedEvent, NoOpTransport,
	RecordingTransport,
};
