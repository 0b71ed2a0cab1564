// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Custom event name validation.
//!
//! Event names can be up to 40 characters long, may only contain
//! alphanumeric characters and underscores, and must start with an
//! alphabetic character. The `firebase_`, `google_` and `ga_` prefixes
//! are reserved by the upstream backend and rejected.

use thiserror::Error;

/// Maximum length of a custom event name.
pub const MAX_EVENT_NAME_LEN: usize = 40;

/// Name prefixes reserved by the upstream backend.
pub const RESERVED_PREFIXES: [&str; 3] = ["firebase_", "google_", "ga_"];

/// Why an event name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
	#[error("event name is empty")]
	Empty,

	#[error("event name `{0}` exceeds {MAX_EVENT_NAME_LEN} characters")]
	TooLong(String),

	#[error("event name `{0}` must start with an alphabetic character")]
	InvalidFirstCharacter(String),

	#[error("event name `{0}` contains characters outside [A-Za-z0-9_]")]
	InvalidCharacter(String),

	#[error("event name `{0}` uses a reserved prefix")]
	ReservedPrefix(String),
}

/// Validates a custom event name against the backend's naming rule.
pub fn validate_event_name(name: &str) -> Result<(), NameError> {
	let mut chars = name.chars();
	let first = chars.next().ok_or(NameError::Empty)?;

	if name.chars().count() > MAX_EVENT_NAME_LEN {
		return Err(NameError::TooLong(name.to_string()));
	}

	if !first.is_ascii_alphabetic() {
		return Err(NameError::InvalidFirstCharacter(name.to_string()));
	}

	if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
		return Err(NameError::InvalidCharacter(name.to_string()));
	}

	for prefix in RESERVED_PREFIXES {
		if name.starts_with(prefix) {
			return Err(NameError::ReservedPrefix(name.to_string()));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn accepts_plain_names() {
		assert_eq!(validate_event_name("PostPublished"), Ok(()));
		assert_eq!(validate_event_name("checkout_completed"), Ok(()));
		assert_eq!(validate_event_name("a"), Ok(()));
	}

	#[test]
	fn rejects_reserved_prefixes() {
		for name in ["firebase_login", "google_click", "ga_session"] {
			assert_eq!(
				validate_event_name(name),
				Err(NameError::ReservedPrefix(name.to_string()))
			);
		}
	}

	#[test]
	fn prefix_must_match_exactly() {
		// "ga" without the underscore is not reserved
		assert_eq!(validate_event_name("gathering"), Ok(()));
		assert_eq!(validate_event_name("googled"), Ok(()));
	}

	#[test]
	fn rejects_empty_name() {
		assert_eq!(validate_event_name(""), Err(NameError::Empty));
	}

	#[test]
	fn rejects_leading_digit_or_underscore() {
		assert_eq!(
			validate_event_name("1st_launch"),
			Err(NameError::InvalidFirstCharacter("1st_launch".to_string()))
		);
		assert_eq!(
			validate_event_name("_internal"),
			Err(NameError::InvalidFirstCharacter("_internal".to_string()))
		);
	}

	#[test]
	fn rejects_non_alphanumeric_characters() {
		assert_eq!(
			validate_event_name("bad name"),
			Err(NameError::InvalidCharacter("bad name".to_string()))
		);
		assert_eq!(
			validate_event_name("bad-name"),
			Err(NameError::InvalidCharacter("bad-name".to_string()))
		);
	}

	#[test]
	fn rejects_over_length_names() {
		let name = "a".repeat(MAX_EVENT_NAME_LEN + 1);
		assert_eq!(
			validate_event_name(&name),
			Err(NameError::TooLong(name.clone()))
		);
		assert_eq!(validate_event_name(&"a".repeat(MAX_EVENT_NAME_LEN)), Ok(()));
	}

	proptest! {
		#[test]
		fn well_formed_names_pass(name in "[A-Za-z][A-Za-z0-9_]{0,39}") {
			let reserved = RESERVED_PREFIXES.iter().any(|p| name.starts_with(p));
			prop_assert_eq!(validate_event_name(&name).is_ok(), !reserved);
		}

		#[test]
		fn leading_digit_always_fails(name in "[0-9][A-Za-z0-9_]{0,20}") {
			prop_assert!(validate_event_name(&name).is_err());
		}
	}
}
