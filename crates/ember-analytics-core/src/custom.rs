// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User-defined events with arbitrary parameter payloads.

use serde::Serialize;
use thiserror::Error;

use crate::encode::{encode, EncodeError};
use crate::name::{validate_event_name, NameError};
use crate::value::ParameterMap;

/// Why a custom event could not be built.
#[derive(Debug, PartialEq, Error)]
pub enum CustomEventError {
	#[error(transparent)]
	Name(#[from] NameError),

	#[error(transparent)]
	Encode(#[from] EncodeError),
}

/// A payload type that can be logged as a custom event.
///
/// Implementors supply the event name; the parameter map is derived from
/// the type's fields by the [`encode`] engine.
///
/// # Example
///
/// ```
/// use ember_analytics_core::{CustomEvent, EventPayload};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct PostPublished {
///     title: String,
///     likes: i64,
/// }
///
/// impl EventPayload for PostPublished {
///     fn event_name(&self) -> &str {
///         "PostPublished"
///     }
/// }
///
/// let event = CustomEvent::build(&PostPublished {
///     title: "Hello".into(),
///     likes: 3,
/// })
/// .unwrap();
/// assert_eq!(event.name(), "PostPublished");
/// ```
pub trait EventPayload: Serialize {
	/// The wire name this payload is logged under.
	fn event_name(&self) -> &str;
}

/// A validated custom event: a name plus its encoded parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEvent {
	name: String,
	parameters: ParameterMap,
}

impl CustomEvent {
	/// Creates a custom event from a pre-assembled parameter map.
	///
	/// Fails when the name violates the backend naming rule.
	pub fn new(
		name: impl Into<String>,
		parameters: ParameterMap,
	) -> Result<Self, NameError> {
		let name = name.into();
		validate_event_name(&name)?;
		Ok(Self { name, parameters })
	}

	/// Builds a custom event from a typed payload, encoding its fields.
	pub fn build<P>(payload: &P) -> Result<Self, CustomEventError>
	where
		P: EventPayload + ?Sized,
	{
		validate_event_name(payload.event_name())?;
		let parameters = encode(payload)?;
		Ok(Self {
			name: payload.event_name().to_string(),
			parameters,
		})
	}

	/// The validated event name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The encoded parameters.
	pub fn parameters(&self) -> &ParameterMap {
		&self.parameters
	}

	/// Consumes the event, returning its parts.
	pub fn into_parts(self) -> (String, ParameterMap) {
		(self.name, self.parameters)
	}
}
