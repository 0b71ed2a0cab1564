// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The parameter encoder: typed payloads in, [`ParameterMap`] out.
//!
//! [`encode`] walks any `T: Serialize` and produces the string-keyed
//! [`ParamValue`] map a custom event carries. `Serialize` is the
//! "describe yourself as ordered name→value pairs" capability: field
//! enumeration is total, follows declaration order, and is checked at
//! compile time — no reflection, no intermediate JSON tree.
//!
//! The top level must be record-shaped (a struct with named fields).
//! Below the top level the encoder accepts scalars, optionals, sequences,
//! string-keyed maps, and nested structs to arbitrary depth:
//!
//! - `Option::None` fields are omitted entirely, never stored as a null
//!   placeholder.
//! - integers of every width narrow into the signed 64-bit lane; values
//!   that do not fit are an error rather than a silent wrap.
//! - maps with non-string keys and raw byte buffers are rejected. The
//!   legacy behavior of recursing into a dictionary for any unrecognized
//!   shape masked real type mismatches and is intentionally not kept.
//!
//! Encoding is all-or-nothing: on error no partial map escapes. The
//! encoder holds no state across calls and may be used concurrently.

use serde::ser::{Impossible, Serialize};
use thiserror::Error;

use crate::value::{ParamValue, ParameterMap};

/// Errors raised while encoding an event payload.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
	/// The root value has no named fields (bare scalar, sequence, or map).
	#[error("top-level value must be a record with named fields")]
	UnsupportedTopLevelShape,

	/// A nested map used a key that is not a string.
	#[error("map keys must be strings")]
	NonStringKey,

	/// The value shape has no representation in the parameter model.
	#[error("unsupported value shape: {0}")]
	Unsupported(&'static str),

	/// An unsigned integer exceeded the signed 64-bit parameter lane.
	#[error("integer {0} does not fit the signed 64-bit parameter lane")]
	IntOutOfRange(u128),

	/// Error reported by a `Serialize` implementation.
	#[error("{0}")]
	Message(String),
}

impl serde::ser::Error for EncodeError {
	fn custom<T: std::fmt::Display>(msg: T) -> Self {
		EncodeError::Message(msg.to_string())
	}
}

/// Encodes a record-shaped payload into a [`ParameterMap`].
///
/// Fails with [`EncodeError::UnsupportedTopLevelShape`] when `value` is
/// not a struct with named fields.
///
/// # Example
///
/// ```
/// use ember_analytics_core::{encode, ParamValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Launch {
///     screen: String,
///     cold_start: bool,
/// }
///
/// let map = encode(&Launch { screen: "home".into(), cold_start: true }).unwrap();
/// assert_eq!(map["screen"], ParamValue::String("home".into()));
/// assert_eq!(map["cold_start"], ParamValue::Bool(true));
/// ```
pub fn encode<T>(value: &T) -> Result<ParameterMap, EncodeError>
where
	T: Serialize + ?Sized,
{
	value.serialize(RecordSerializer)
}

/// Top-level serializer: only record shapes are admitted.
struct RecordSerializer;

impl serde::Serializer for RecordSerializer {
	type Ok = ParameterMap;
	type Error = EncodeError;

	type SerializeSeq = Impossible<ParameterMap, EncodeError>;
	type SerializeTuple = Impossible<ParameterMap, EncodeError>;
	type SerializeTupleStruct = Impossible<ParameterMap, EncodeError>;
	type SerializeTupleVariant = Impossible<ParameterMap, EncodeError>;
	type SerializeMap = Impossible<ParameterMap, EncodeError>;
	type SerializeStruct = TopRecord;
	type SerializeStructVariant = TopRecord;

	fn serialize_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStruct, Self::Error> {
		Ok(TopRecord {
			entries: ParameterMap::new(),
		})
	}

	// An enum struct variant still has named fields at the root; its
	// fields land directly in the map.
	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStructVariant, Self::Error> {
		Ok(TopRecord {
			entries: ParameterMap::new(),
		})
	}

	fn serialize_newtype_struct<T>(
		self,
		_name: &'static str,
		value: &T,
	) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		value.serialize(self)
	}

	fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		value.serialize(self)
	}

	fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_char(self, _v: char) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_str(self, _v: &str) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_unit_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
	) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_newtype_variant<T>(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_value: &T,
	) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_tuple_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleStruct, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleVariant, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
		Err(EncodeError::UnsupportedTopLevelShape)
	}
}

/// Accumulates the top-level record's fields.
struct TopRecord {
	entries: ParameterMap,
}

impl serde::ser::SerializeStruct for TopRecord {
	type Ok = ParameterMap;
	type Error = EncodeError;

	fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		if let Some(encoded) = value.serialize(ValueSerializer)? {
			self.entries.insert(key.to_string(), encoded);
		}
		Ok(())
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.entries)
	}
}

impl serde::ser::SerializeStructVariant for TopRecord {
	type Ok = ParameterMap;
	type Error = EncodeError;

	fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		serde::ser::SerializeStruct::serialize_field(self, key, value)
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		serde::ser::SerializeStruct::end(self)
	}
}

/// Field-level serializer. `Ok(None)` means "omit this field".
struct ValueSerializer;

impl serde::Serializer for ValueSerializer {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	type SerializeSeq = Items;
	type SerializeTuple = Items;
	type SerializeTupleStruct = Items;
	type SerializeTupleVariant = Items;
	type SerializeMap = Record;
	type SerializeStruct = Record;
	type SerializeStructVariant = Record;

	fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Bool(v)))
	}

	fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(i64::from(v))))
	}

	fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(i64::from(v))))
	}

	fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(i64::from(v))))
	}

	fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(v)))
	}

	fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
		let narrowed =
			i64::try_from(v).map_err(|_| EncodeError::IntOutOfRange(v.unsigned_abs()))?;
		Ok(Some(ParamValue::Int(narrowed)))
	}

	fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(i64::from(v))))
	}

	fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(i64::from(v))))
	}

	fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Int(i64::from(v))))
	}

	fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
		let narrowed = i64::try_from(v).map_err(|_| EncodeError::IntOutOfRange(u128::from(v)))?;
		Ok(Some(ParamValue::Int(narrowed)))
	}

	fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
		let narrowed = i64::try_from(v).map_err(|_| EncodeError::IntOutOfRange(v))?;
		Ok(Some(ParamValue::Int(narrowed)))
	}

	fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Double(f64::from(v))))
	}

	fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::Double(v)))
	}

	fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::String(v.to_string())))
	}

	fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::String(v.to_string())))
	}

	fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::Unsupported("byte buffer"))
	}

	fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
		Ok(None)
	}

	fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
		Ok(None)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
		Ok(None)
	}

	fn serialize_unit_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
	) -> Result<Self::Ok, Self::Error> {
		Ok(Some(ParamValue::String(variant.to_string())))
	}

	fn serialize_newtype_struct<T>(
		self,
		_name: &'static str,
		value: &T,
	) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		value.serialize(self)
	}

	fn serialize_newtype_variant<T>(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
		value: &T,
	) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		let mut entries = ParameterMap::new();
		if let Some(encoded) = value.serialize(ValueSerializer)? {
			entries.insert(variant.to_string(), encoded);
		}
		Ok(Some(ParamValue::Dictionary(entries)))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
		Ok(Items {
			items: Vec::with_capacity(len.unwrap_or(0)),
			variant: None,
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(
		self,
		_name: &'static str,
		len: usize,
	) -> Result<Self::SerializeTupleStruct, Self::Error> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
		len: usize,
	) -> Result<Self::SerializeTupleVariant, Self::Error> {
		Ok(Items {
			items: Vec::with_capacity(len),
			variant: Some(variant),
		})
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
		Ok(Record {
			entries: ParameterMap::new(),
			pending_key: None,
			variant: None,
		})
	}

	fn serialize_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStruct, Self::Error> {
		Ok(Record {
			entries: ParameterMap::new(),
			pending_key: None,
			variant: None,
		})
	}

	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStructVariant, Self::Error> {
		Ok(Record {
			entries: ParameterMap::new(),
			pending_key: None,
			variant: Some(variant),
		})
	}
}

/// Accumulates an array value. Elements that encode to nothing are
/// dropped, since the array variant has no null lane.
struct Items {
	items: Vec<ParamValue>,
	variant: Option<&'static str>,
}

impl Items {
	fn push<T>(&mut self, value: &T) -> Result<(), EncodeError>
	where
		T: Serialize + ?Sized,
	{
		if let Some(encoded) = value.serialize(ValueSerializer)? {
			self.items.push(encoded);
		}
		Ok(())
	}

	fn finish(self) -> Option<ParamValue> {
		let array = ParamValue::Array(self.items);
		match self.variant {
			Some(variant) => {
				let mut entries = ParameterMap::new();
				entries.insert(variant.to_string(), array);
				Some(ParamValue::Dictionary(entries))
			}
			None => Some(array),
		}
	}
}

impl serde::ser::SerializeSeq for Items {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		self.push(value)
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.finish())
	}
}

impl serde::ser::SerializeTuple for Items {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		self.push(value)
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.finish())
	}
}

impl serde::ser::SerializeTupleStruct for Items {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		self.push(value)
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.finish())
	}
}

impl serde::ser::SerializeTupleVariant for Items {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		self.push(value)
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.finish())
	}
}

/// Accumulates a nested dictionary value (struct or string-keyed map).
struct Record {
	entries: ParameterMap,
	pending_key: Option<String>,
	variant: Option<&'static str>,
}

impl Record {
	fn finish(self) -> Option<ParamValue> {
		let dictionary = ParamValue::Dictionary(self.entries);
		match self.variant {
			Some(variant) => {
				let mut entries = ParameterMap::new();
				entries.insert(variant.to_string(), dictionary);
				Some(ParamValue::Dictionary(entries))
			}
			None => Some(dictionary),
		}
	}
}

impl serde::ser::SerializeMap for Record {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		self.pending_key = Some(key.serialize(KeySerializer)?);
		Ok(())
	}

	fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		// serialize_key always runs first for well-behaved Serialize impls
		let key = self
			.pending_key
			.take()
			.ok_or(EncodeError::Message("map value before key".to_string()))?;
		if let Some(encoded) = value.serialize(ValueSerializer)? {
			self.entries.insert(key, encoded);
		}
		Ok(())
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.finish())
	}
}

impl serde::ser::SerializeStruct for Record {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		if let Some(encoded) = value.serialize(ValueSerializer)? {
			self.entries.insert(key.to_string(), encoded);
		}
		Ok(())
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		Ok(self.finish())
	}
}

impl serde::ser::SerializeStructVariant for Record {
	type Ok = Option<ParamValue>;
	type Error = EncodeError;

	fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
	where
		T: Serialize + ?Sized,
	{
		serde::ser::SerializeStruct::serialize_field(self, key, value)
	}

	fn end(self) -> Result<Self::Ok, Self::Error> {
		serde::ser::SerializeStruct::end(self)
	}
}

/// Map keys must land as strings; anything else is a hard error.
struct KeySerializer;

impl serde::Serializer for KeySerializer {
	type Ok = String;
	type Error = EncodeError;

	type SerializeSeq = Impossible<String, EncodeError>;
	type SerializeTuple = Impossible<String, EncodeError>;
	type SerializeTupleStruct = Impossible<String, EncodeError>;
	type SerializeTupleVariant = Impossible<String, EncodeError>;
	type SerializeMap = Impossible<String, EncodeError>;
	type SerializeStruct = Impossible<String, EncodeError>;
	type SerializeStructVariant = Impossible<String, EncodeError>;

	fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
		Ok(v.to_string())
	}

	fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
		Ok(v.to_string())
	}

	fn serialize_newtype_struct<T>(
		self,
		_name: &'static str,
		value: &T,
	) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		value.serialize(self)
	}

	fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_some<T>(self, _value: &T) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		Err(EncodeError::NonStringKey)
	}

	fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_unit_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
	) -> Result<Self::Ok, Self::Error> {
		Ok(variant.to_string())
	}

	fn serialize_newtype_variant<T>(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_value: &T,
	) -> Result<Self::Ok, Self::Error>
	where
		T: Serialize + ?Sized,
	{
		Err(EncodeError::NonStringKey)
	}

	fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_tuple_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleStruct, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleVariant, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStruct, Self::Error> {
		Err(EncodeError::NonStringKey)
	}

	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStructVariant, Self::Error> {
		Err(EncodeError::NonStringKey)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ParamValue;
	use serde::Serialize;
	use std::collections::BTreeMap;

	#[derive(Serialize)]
	struct PostPublished {
		title: String,
		likes: i64,
		tags: Vec<String>,
		rating: f64,
	}

	#[test]
	fn reference_scenario_encodes_exactly() {
		let map = encode(&PostPublished {
			title: "Hello".to_string(),
			likes: 3,
			tags: vec!["foo".to_string(), "bar".to_string()],
			rating: 4.5,
		})
		.unwrap();

		assert_eq!(map.len(), 4);
		assert_eq!(map["title"], ParamValue::String("Hello".to_string()));
		assert_eq!(map["likes"], ParamValue::Int(3));
		assert_eq!(
			map["tags"],
			ParamValue::Array(vec![
				ParamValue::String("foo".to_string()),
				ParamValue::String("bar".to_string()),
			])
		);
		assert_eq!(map["rating"], ParamValue::Double(4.5));
	}

	#[test]
	fn integer_field_stays_integer() {
		#[derive(Serialize)]
		struct Payload {
			likes: i64,
		}

		let map = encode(&Payload { likes: 3 }).unwrap();
		assert_eq!(map["likes"], ParamValue::Int(3));
		assert_ne!(map["likes"], ParamValue::Double(3.0));
	}

	#[test]
	fn absent_optional_fields_are_omitted() {
		#[derive(Serialize)]
		struct Payload {
			present: Option<String>,
			absent: Option<String>,
		}

		let map = encode(&Payload {
			present: Some("here".to_string()),
			absent: None,
		})
		.unwrap();

		assert_eq!(map.len(), 1);
		assert_eq!(map["present"], ParamValue::String("here".to_string()));
		assert!(!map.contains_key("absent"));
	}

	#[test]
	fn arrays_preserve_element_order() {
		#[derive(Serialize)]
		struct Payload {
			tags: Vec<&'static str>,
		}

		let map = encode(&Payload {
			tags: vec!["foo", "bar"],
		})
		.unwrap();

		let tags = map["tags"].as_array().unwrap();
		assert_eq!(tags[0], ParamValue::String("foo".to_string()));
		assert_eq!(tags[1], ParamValue::String("bar".to_string()));
	}

	#[test]
	fn nested_records_become_dictionaries() {
		#[derive(Serialize)]
		struct Inner {
			depth: i32,
			deeper: Deepest,
		}

		#[derive(Serialize)]
		struct Deepest {
			depth: i32,
		}

		#[derive(Serialize)]
		struct Outer {
			label: String,
			inner: Inner,
		}

		let map = encode(&Outer {
			label: "root".to_string(),
			inner: Inner {
				depth: 1,
				deeper: Deepest { depth: 2 },
			},
		})
		.unwrap();

		let inner = map["inner"].as_dictionary().unwrap();
		assert_eq!(inner["depth"], ParamValue::Int(1));
		let deepest = inner["deeper"].as_dictionary().unwrap();
		assert_eq!(deepest["depth"], ParamValue::Int(2));
	}

	#[test]
	fn string_keyed_maps_become_dictionaries() {
		#[derive(Serialize)]
		struct Payload {
			counts: BTreeMap<String, i64>,
		}

		let mut counts = BTreeMap::new();
		counts.insert("a".to_string(), 1);
		counts.insert("b".to_string(), 2);

		let map = encode(&Payload { counts }).unwrap();
		let dict = map["counts"].as_dictionary().unwrap();
		assert_eq!(dict["a"], ParamValue::Int(1));
		assert_eq!(dict["b"], ParamValue::Int(2));
	}

	#[test]
	fn arrays_of_records_recurse() {
		#[derive(Serialize)]
		struct Entry {
			id: String,
		}

		#[derive(Serialize)]
		struct Payload {
			entries: Vec<Entry>,
		}

		let map = encode(&Payload {
			entries: vec![
				Entry {
					id: "one".to_string(),
				},
				Entry {
					id: "two".to_string(),
				},
			],
		})
		.unwrap();

		let entries = map["entries"].as_array().unwrap();
		let first = entries[0].as_dictionary().unwrap();
		assert_eq!(first["id"], ParamValue::String("one".to_string()));
	}

	#[test]
	fn bare_scalar_top_level_is_rejected() {
		assert_eq!(
			encode("just a string"),
			Err(EncodeError::UnsupportedTopLevelShape)
		);
		assert_eq!(encode(&42i64), Err(EncodeError::UnsupportedTopLevelShape));
	}

	#[test]
	fn bare_sequence_top_level_is_rejected() {
		assert_eq!(
			encode(&vec![1i64, 2, 3]),
			Err(EncodeError::UnsupportedTopLevelShape)
		);
	}

	#[test]
	fn bare_map_top_level_is_rejected() {
		let mut map = BTreeMap::new();
		map.insert("k".to_string(), 1i64);
		assert_eq!(encode(&map), Err(EncodeError::UnsupportedTopLevelShape));
	}

	#[test]
	fn optional_record_top_level_unwraps() {
		#[derive(Serialize)]
		struct Payload {
			n: i64,
		}

		let map = encode(&Some(Payload { n: 1 })).unwrap();
		assert_eq!(map["n"], ParamValue::Int(1));

		assert_eq!(
			encode(&None::<Payload>),
			Err(EncodeError::UnsupportedTopLevelShape)
		);
	}

	#[test]
	fn non_string_map_keys_are_a_hard_error() {
		#[derive(Serialize)]
		struct Payload {
			by_number: BTreeMap<i64, String>,
		}

		let mut by_number = BTreeMap::new();
		by_number.insert(1i64, "one".to_string());

		assert_eq!(
			encode(&Payload { by_number }),
			Err(EncodeError::NonStringKey)
		);
	}

	#[test]
	fn unsigned_overflow_is_a_hard_error() {
		#[derive(Serialize)]
		struct Payload {
			big: u64,
		}

		assert_eq!(
			encode(&Payload { big: u64::MAX }),
			Err(EncodeError::IntOutOfRange(u128::from(u64::MAX)))
		);

		let map = encode(&Payload {
			big: i64::MAX as u64,
		})
		.unwrap();
		assert_eq!(map["big"], ParamValue::Int(i64::MAX));
	}

	#[test]
	fn unit_enum_variants_encode_as_strings() {
		#[derive(Serialize)]
		enum Plan {
			Free,
		}

		#[derive(Serialize)]
		struct Payload {
			plan: Plan,
		}

		let map = encode(&Payload { plan: Plan::Free }).unwrap();
		assert_eq!(map["plan"], ParamValue::String("Free".to_string()));
	}

	#[test]
	fn failure_yields_no_partial_map() {
		#[derive(Serialize)]
		struct Payload {
			fine: String,
			broken: BTreeMap<i64, String>,
		}

		let mut broken = BTreeMap::new();
		broken.insert(1i64, "x".to_string());

		// The first field encodes cleanly; the result must still be
		// an error with no map escaping.
		let result = encode(&Payload {
			fine: "ok".to_string(),
			broken,
		});
		assert_eq!(result, Err(EncodeError::NonStringKey));
	}

	#[test]
	fn chrono_timestamps_encode_as_strings() {
		use chrono::{TimeZone, Utc};

		#[derive(Serialize)]
		struct Payload {
			at: chrono::DateTime<Utc>,
		}

		let map = encode(&Payload {
			at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
		})
		.unwrap();

		assert!(matches!(map["at"], ParamValue::String(_)));
	}
}
