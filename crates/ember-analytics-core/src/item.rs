// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Support types shared across the fixed event catalog.

use serde::{Deserialize, Serialize};

use crate::param;
use crate::value::{ParameterMap, Params};

/// A monetary amount with its ISO 4217 currency code.
///
/// Events that carry a `Money` must report both the amount (under
/// `value`) and the currency so revenue metrics aggregate correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
	pub amount: f64,
	pub currency: String,
}

impl Money {
	pub fn new(amount: f64, currency: impl Into<String>) -> Self {
		Self {
			amount,
			currency: currency.into(),
		}
	}
}

/// A product or content item referenced by commerce events.
///
/// All fields are optional; absent fields are omitted from the encoded
/// parameter map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
	pub id: Option<String>,
	pub name: Option<String>,
	pub category: Option<String>,
	pub variant: Option<String>,
	pub brand: Option<String>,
	pub price: Option<Money>,
	pub list_id: Option<String>,
	pub list_name: Option<String>,
}

impl Item {
	/// Creates an item carrying only an identifier.
	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			..Self::default()
		}
	}

	pub(crate) fn params(&self) -> ParameterMap {
		Params::new()
			.set_opt(param::PARAM_ITEM_ID, self.id.as_deref())
			.set_opt(param::PARAM_ITEM_NAME, self.name.as_deref())
			.set_opt(param::PARAM_ITEM_CATEGORY, self.category.as_deref())
			.set_opt(param::PARAM_ITEM_VARIANT, self.variant.as_deref())
			.set_opt(param::PARAM_ITEM_BRAND, self.brand.as_deref())
			.set_opt(param::PARAM_PRICE, self.price.as_ref().map(|p| p.amount))
			.set_opt(param::PARAM_ITEM_LIST_ID, self.list_id.as_deref())
			.set_opt(param::PARAM_ITEM_LIST_NAME, self.list_name.as_deref())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ParamValue;

	#[test]
	fn item_params_omit_absent_fields() {
		let params = Item::with_id("123").params();
		assert_eq!(params.len(), 1);
		assert_eq!(params["item_id"], ParamValue::String("123".to_string()));
	}

	#[test]
	fn item_price_flattens_to_amount() {
		let item = Item {
			id: Some("sku_9".to_string()),
			price: Some(Money::new(12.5, "EUR")),
			..Item::default()
		};

		let params = item.params();
		assert_eq!(params["price"], ParamValue::Double(12.5));
		// currency is reported at the event level, not per item
		assert!(!params.contains_key("currency"));
	}
}
