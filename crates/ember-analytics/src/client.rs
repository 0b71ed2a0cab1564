// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The typed analytics client.

use std::sync::Arc;

use ember_analytics_core::{CustomEvent, Event, EventPayload};
use tracing::{debug, warn};

use crate::error::Result;
use crate::transport::{flatten_map, AnalyticsTransport, DynAnalyticsTransport, NoOpTransport};

/// Typed front door for logging events.
///
/// The client owns no delivery logic; it renders events into wire shape
/// and hands them to its [`AnalyticsTransport`]. Cloning is cheap and all
/// clones share the transport.
#[derive(Clone)]
pub struct AnalyticsClient {
	transport: DynAnalyticsTransport,
}

impl AnalyticsClient {
	pub fn new(transport: DynAnalyticsTransport) -> Self {
		Self { transport }
	}

	/// A client that silently drops everything.
	pub fn disabled() -> Self {
		Self::new(Arc::new(NoOpTransport))
	}

	/// Logs a catalog event.
	pub async fn log(&self, event: &Event) -> Result<()> {
		let name = event.name();
		let parameters = event.parameters().map(|map| flatten_map(&map));
		debug!(event = name, "logging analytics event");
		self.transport.log_event(name, parameters).await
	}

	/// Builds and logs a custom event from a typed payload.
	pub async fn log_custom<P>(&self, payload: &P) -> Result<()>
	where
		P: EventPayload + ?Sized,
	{
		let event = CustomEvent::build(payload)?;
		self.log(&Event::Custom(event)).await
	}

	/// Logs a catalog event, swallowing failures.
	///
	/// Analytics must never take the host application down; failures are
	/// reported through tracing and otherwise dropped.
	pub async fn log_or_ignore(&self, event: &Event) {
		if let Err(err) = self.log(event).await {
			warn!(event = event.name(), error = %err, "dropping analytics event");
		}
	}

	/// Builds and logs a custom payload, swallowing failures.
	pub async fn log_custom_or_ignore<P>(&self, payload: &P)
	where
		P: EventPayload + ?Sized,
	{
		if let Err(err) = self.log_custom(payload).await {
			warn!(
				event = payload.event_name(),
				error = %err,
				"dropping analytics event"
			);
		}
	}

	/// Toggles collection for this app instance.
	pub async fn set_collection_enabled(&self, enabled: bool) -> Result<()> {
		self.transport.set_collection_enabled(enabled).await
	}

	/// Sets a user property; `None` clears it.
	pub async fn set_user_property(&self, name: &str, value: Option<String>) -> Result<()> {
		self.transport.set_user_property(name, value).await
	}
}

impl std::fmt::Debug for AnalyticsClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnalyticsClient").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::AnalyticsError;
	use crate::transport::RecordingTransport;
	use async_trait::async_trait;
	use ember_analytics_core::{ScreenView, SignUp};
	use serde::Serialize;
	use serde_json::{json, Map, Value};

	#[derive(Serialize)]
	struct PostPublished {
		title: String,
		likes: i64,
		tags: Vec<String>,
		rating: f64,
	}

	impl EventPayload for PostPublished {
		fn event_name(&self) -> &str {
			"PostPublished"
		}
	}

	fn recording_client() -> (AnalyticsClient, Arc<RecordingTransport>) {
		let transport = Arc::new(RecordingTransport::new());
		(AnalyticsClient::new(transport.clone()), transport)
	}

	#[tokio::test]
	async fn logs_catalog_events_with_wire_names() {
		let (client, transport) = recording_client();

		client
			.log(&Event::ScreenView(ScreenView::new("Main", "Home")))
			.await
			.unwrap();
		client
			.log(&Event::SignUp(SignUp::new("Google")))
			.await
			.unwrap();
		client.log(&Event::AppOpen).await.unwrap();

		let events = transport.events();
		assert_eq!(events.len(), 3);
		assert_eq!(events[0].name, "screen_view");
		assert_eq!(events[1].name, "sign_up");
		assert_eq!(events[2].name, "app_open");
		assert!(events[2].parameters.is_none());
	}

	#[tokio::test]
	async fn custom_payload_reaches_the_transport_flattened() {
		let (client, transport) = recording_client();

		client
			.log_custom(&PostPublished {
				title: "Hello".to_string(),
				likes: 3,
				tags: vec!["foo".to_string(), "bar".to_string()],
				rating: 4.5,
			})
			.await
			.unwrap();

		let events = transport.events();
		assert_eq!(events[0].name, "PostPublished");

		let params = events[0].parameters.as_ref().unwrap();
		assert_eq!(params["title"], json!("Hello"));
		assert_eq!(params["likes"], json!(3));
		assert!(params["likes"].is_i64());
		assert_eq!(params["rating"], json!(4.5));
		assert_eq!(params["tags"], json!(["foo", "bar"]));
	}

	#[tokio::test]
	async fn invalid_custom_names_never_reach_the_transport() {
		#[derive(Serialize)]
		struct Reserved;

		impl EventPayload for Reserved {
			fn event_name(&self) -> &str {
				"firebase_login"
			}
		}

		let (client, transport) = recording_client();
		let err = client.log_custom(&Reserved).await.unwrap_err();
		assert!(matches!(err, AnalyticsError::Name(_)));
		assert!(transport.events().is_empty());
	}

	#[tokio::test]
	async fn settings_calls_pass_through() {
		let (client, transport) = recording_client();

		client.set_collection_enabled(false).await.unwrap();
		client
			.set_user_property("plan", Some("pro".to_string()))
			.await
			.unwrap();
		client.set_user_property("plan", None).await.unwrap();

		assert_eq!(transport.collection_enabled(), Some(false));
		assert_eq!(
			transport.user_properties(),
			vec![
				("plan".to_string(), Some("pro".to_string())),
				("plan".to_string(), None),
			]
		);
	}

	struct FailingTransport;

	#[async_trait]
	impl AnalyticsTransport for FailingTransport {
		async fn log_event(
			&self,
			_name: &str,
			_parameters: Option<Map<String, Value>>,
		) -> crate::error::Result<()> {
			Err(AnalyticsError::transport("connection reset"))
		}

		async fn set_collection_enabled(&self, _enabled: bool) -> crate::error::Result<()> {
			Ok(())
		}

		async fn set_user_property(
			&self,
			_name: &str,
			_value: Option<String>,
		) -> crate::error::Result<()> {
			Ok(())
		}
	}

	#[tokio::test]
	async fn transport_failures_surface_as_errors() {
		let client = AnalyticsClient::new(Arc::new(FailingTransport));
		let err = client.log(&Event::AppOpen).await.unwrap_err();
		assert!(matches!(err, AnalyticsError::Transport { .. }));
	}

	#[tokio::test]
	async fn log_or_ignore_swallows_failures() {
		let client = AnalyticsClient::new(Arc::new(FailingTransport));
		client.log_or_ignore(&Event::AppOpen).await;
	}

	#[tokio::test]
	async fn disabled_client_accepts_everything() {
		let client = AnalyticsClient::disabled();
		client.log(&Event::Login).await.unwrap();
		client.set_collection_enabled(true).await.unwrap();
	}
}
