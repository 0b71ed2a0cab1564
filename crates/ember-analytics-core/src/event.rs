// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The fixed event catalog.
//!
//! [`Event`] closes over every predefined event shape the backend
//! understands, plus [`CustomEvent`] for user-defined events. An event is
//! an important occurrence you want to measure; each type carries a fixed
//! set of named parameters. Up to 25 unique parameters may accompany an
//! event, and revenue-bearing events that supply a value must also supply
//! its currency so revenue metrics can be computed accurately.
//!
//! Each shape knows its wire name and how to render itself into a
//! [`ParameterMap`]; absent optional fields are omitted from the map
//! entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::custom::CustomEvent;
use crate::item::{Item, Money};
use crate::param;
use crate::value::{ParamValue, ParameterMap, Params};

fn with_money(params: Params, value: Option<&Money>) -> Params {
	params
		.set_opt(param::PARAM_VALUE, value.map(|m| m.amount))
		.set_opt(param::PARAM_CURRENCY, value.map(|m| m.currency.clone()))
}

fn items_value(items: &[Item]) -> ParamValue {
	ParamValue::Array(
		items
			.iter()
			.map(|item| ParamValue::Dictionary(item.params()))
			.collect(),
	)
}

fn date_string(date: &DateTime<Utc>) -> String {
	date.to_rfc3339()
}

/// An ad impression: a user saw an ad.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdImpression {
	pub ad_platform: Option<String>,
	pub ad_format: Option<String>,
	pub ad_source: Option<String>,
	pub ad_unit_name: Option<String>,
	pub value: Option<Money>,
}

impl AdImpression {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new()
				.set_opt(param::PARAM_AD_PLATFORM, self.ad_platform.as_deref())
				.set_opt(param::PARAM_AD_FORMAT, self.ad_format.as_deref())
				.set_opt(param::PARAM_AD_SOURCE, self.ad_source.as_deref())
				.set_opt(param::PARAM_AD_UNIT_NAME, self.ad_unit_name.as_deref()),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// A user submitted their payment information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPaymentInfo {
	pub coupon: String,
	pub items: Vec<Item>,
	pub payment_type: String,
	pub value: Option<Money>,
}

impl AddPaymentInfo {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new()
				.set(param::PARAM_COUPON, self.coupon.as_str())
				.set(param::PARAM_ITEMS, items_value(&self.items))
				.set(param::PARAM_PAYMENT_TYPE, self.payment_type.as_str()),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// A user submitted their shipping information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddShippingInfo {
	pub coupon: String,
	pub items: Vec<Item>,
	pub shipping_tier: String,
	pub value: Option<Money>,
}

impl AddShippingInfo {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new()
				.set(param::PARAM_COUPON, self.coupon.as_str())
				.set(param::PARAM_ITEMS, items_value(&self.items))
				.set(param::PARAM_SHIPPING_TIER, self.shipping_tier.as_str()),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// Item(s) were added to a cart. Pair with [`Purchase`] in a funnel to
/// gauge checkout effectiveness.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddToCart {
	pub value: Option<Money>,
	pub items: Vec<Item>,
}

impl AddToCart {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new().set(param::PARAM_ITEMS, items_value(&self.items)),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// An item was added to a wishlist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddToWishList {
	pub value: Option<Money>,
	pub items: Vec<Item>,
}

impl AddToWishList {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new().set(param::PARAM_ITEMS, items_value(&self.items)),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// A user began the checkout process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeginCheckout {
	pub coupon: String,
	pub items: Vec<Item>,
	pub value: Option<Money>,
}

impl BeginCheckout {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new()
				.set(param::PARAM_COUPON, self.coupon.as_str())
				.set(param::PARAM_ITEMS, items_value(&self.items)),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// Referral details of a re-engagement campaign. Supply at least one of
/// source, medium, or campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetails {
	pub source: String,
	pub medium: String,
	pub campaign: String,
	pub term: Option<String>,
	pub content: Option<String>,
	pub ad_network_click_id: Option<String>,
	pub cp1: Option<String>,
	pub campaign_id: Option<String>,
	pub creative_format: Option<String>,
	pub marketing_tactic: Option<String>,
	pub source_platform: Option<String>,
}

impl CampaignDetails {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_SOURCE, self.source.as_str())
			.set(param::PARAM_MEDIUM, self.medium.as_str())
			.set(param::PARAM_CAMPAIGN, self.campaign.as_str())
			.set_opt(param::PARAM_TERM, self.term.as_deref())
			.set_opt(param::PARAM_CONTENT, self.content.as_deref())
			.set_opt(param::PARAM_ACLID, self.ad_network_click_id.as_deref())
			.set_opt(param::PARAM_CP1, self.cp1.as_deref())
			.set_opt(param::PARAM_CAMPAIGN_ID, self.campaign_id.as_deref())
			.set_opt(param::PARAM_CREATIVE_FORMAT, self.creative_format.as_deref())
			.set_opt(param::PARAM_MARKETING_TACTIC, self.marketing_tactic.as_deref())
			.set_opt(param::PARAM_SOURCE_PLATFORM, self.source_platform.as_deref())
			.finish()
	}
}

/// Virtual currency was awarded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EarnVirtualCurrency {
	pub value: Option<Money>,
}

impl EarnVirtualCurrency {
	fn params(&self) -> ParameterMap {
		with_money(Params::new(), self.value.as_ref()).finish()
	}
}

/// A lead was generated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateLead {
	pub value: Option<Money>,
}

impl GenerateLead {
	fn params(&self) -> ParameterMap {
		with_money(Params::new(), self.value.as_ref()).finish()
	}
}

/// A user joined a group such as a guild, team, or family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinGroup {
	pub group_id: String,
}

impl JoinGroup {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_GROUP_ID, self.group_id.as_str())
			.finish()
	}
}

/// The user finished a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEnd {
	pub level_name: String,
	pub success: String,
}

impl LevelEnd {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_LEVEL_NAME, self.level_name.as_str())
			.set(param::PARAM_SUCCESS, self.success.as_str())
			.finish()
	}
}

/// The user started a new level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelStart {
	pub level_name: Option<String>,
}

impl LevelStart {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set_opt(param::PARAM_LEVEL_NAME, self.level_name.as_deref())
			.finish()
	}
}

/// A player leveled up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelUp {
	pub level: i64,
	pub character: Option<String>,
}

impl LevelUp {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_LEVEL, self.level)
			.set_opt(param::PARAM_CHARACTER, self.character.as_deref())
			.finish()
	}
}

/// The user posted a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostScore {
	pub score: i64,
	pub level: Option<i64>,
	pub character: Option<String>,
}

impl PostScore {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_SCORE, self.score)
			.set_opt(param::PARAM_LEVEL, self.level)
			.set_opt(param::PARAM_CHARACTER, self.character.as_deref())
			.finish()
	}
}

/// Item(s) were purchased. Distinct from the store-reported in-app
/// purchase event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
	pub affiliation: Option<String>,
	pub coupon: Option<String>,
	pub value: Option<Money>,
	pub end_date: Option<DateTime<Utc>>,
	pub item_id: Option<String>,
	pub items: Vec<Item>,
	pub shipping: f64,
	pub start_date: Option<DateTime<Utc>>,
	pub tax: Option<f64>,
	pub transaction_id: Option<String>,
}

impl Purchase {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new()
				.set_opt(param::PARAM_AFFILIATION, self.affiliation.as_deref())
				.set_opt(param::PARAM_COUPON, self.coupon.as_deref())
				.set_opt(
					param::PARAM_END_DATE,
					self.end_date.as_ref().map(date_string),
				)
				.set_opt(param::PARAM_ITEM_ID, self.item_id.as_deref())
				.set(param::PARAM_ITEMS, items_value(&self.items))
				.set(param::PARAM_SHIPPING, self.shipping)
				.set_opt(
					param::PARAM_START_DATE,
					self.start_date.as_ref().map(date_string),
				)
				.set_opt(param::PARAM_TAX, self.tax)
				.set_opt(param::PARAM_TRANSACTION_ID, self.transaction_id.as_deref()),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// A refund was issued.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Refund {
	pub affiliation: Option<String>,
	pub coupon: Option<String>,
	pub value: Option<Money>,
	pub items: Option<Vec<Item>>,
	pub shipping: Option<f64>,
	pub tax: Option<f64>,
	pub transaction_id: Option<String>,
}

impl Refund {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new()
				.set_opt(param::PARAM_AFFILIATION, self.affiliation.as_deref())
				.set_opt(param::PARAM_COUPON, self.coupon.as_deref())
				.set_opt(
					param::PARAM_ITEMS,
					self.items.as_deref().map(items_value),
				)
				.set_opt(param::PARAM_SHIPPING, self.shipping)
				.set_opt(param::PARAM_TAX, self.tax)
				.set_opt(param::PARAM_TRANSACTION_ID, self.transaction_id.as_deref()),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// Item(s) were removed from a cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoveFromCart {
	pub value: Option<Money>,
}

impl RemoveFromCart {
	fn params(&self) -> ParameterMap {
		with_money(Params::new(), self.value.as_ref()).finish()
	}
}

/// A screen transition occurred. Can be logged whether or not automatic
/// screen tracking is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
	pub screen_class: String,
	pub screen_name: String,
}

impl ScreenView {
	pub fn new(screen_class: impl Into<String>, screen_name: impl Into<String>) -> Self {
		Self {
			screen_class: screen_class.into(),
			screen_name: screen_name.into(),
		}
	}

	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_SCREEN_CLASS, self.screen_class.as_str())
			.set(param::PARAM_SCREEN_NAME, self.screen_name.as_str())
			.finish()
	}
}

/// A search was performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Search {
	pub term: String,
	pub start_date: Option<String>,
	pub end_date: Option<String>,
	pub number_of_nights: Option<i64>,
	pub number_of_rooms: Option<i64>,
	pub number_of_passengers: Option<i64>,
	pub origin: Option<String>,
	pub destination: Option<String>,
	pub travel_class: Option<String>,
}

impl Search {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_TERM, self.term.as_str())
			.set_opt(param::PARAM_START_DATE, self.start_date.as_deref())
			.set_opt(param::PARAM_END_DATE, self.end_date.as_deref())
			.set_opt(param::PARAM_NUMBER_OF_NIGHTS, self.number_of_nights)
			.set_opt(param::PARAM_NUMBER_OF_ROOMS, self.number_of_rooms)
			.set_opt(param::PARAM_NUMBER_OF_PASSENGERS, self.number_of_passengers)
			.set_opt(param::PARAM_ORIGIN, self.origin.as_deref())
			.set_opt(param::PARAM_DESTINATION, self.destination.as_deref())
			.set_opt(param::PARAM_TRAVEL_CLASS, self.travel_class.as_deref())
			.finish()
	}
}

/// A user selected content of some type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectContent {
	pub content_type: String,
	pub item_id: String,
}

impl SelectContent {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_CONTENT_TYPE, self.content_type.as_str())
			.set(param::PARAM_ITEM_ID, self.item_id.as_str())
			.finish()
	}
}

/// An item was selected from a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
	pub items: Vec<Item>,
	pub item_list_id: Option<String>,
	pub item_list_name: Option<String>,
}

impl SelectItem {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_ITEMS, items_value(&self.items))
			.set_opt(param::PARAM_ITEM_LIST_ID, self.item_list_id.as_deref())
			.set_opt(param::PARAM_ITEM_LIST_NAME, self.item_list_name.as_deref())
			.finish()
	}
}

/// A user selected a promotion offer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectPromotion {
	pub creative_name: Option<String>,
	pub creative_slot: Option<String>,
	pub items: Option<Vec<Item>>,
	pub location_id: Option<String>,
	pub promotion_id: Option<String>,
	pub promotion_name: Option<String>,
}

impl SelectPromotion {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set_opt(param::PARAM_CREATIVE_NAME, self.creative_name.as_deref())
			.set_opt(param::PARAM_CREATIVE_SLOT, self.creative_slot.as_deref())
			.set_opt(param::PARAM_ITEMS, self.items.as_deref().map(items_value))
			.set_opt(param::PARAM_LOCATION_ID, self.location_id.as_deref())
			.set_opt(param::PARAM_PROMOTION_ID, self.promotion_id.as_deref())
			.set_opt(param::PARAM_PROMOTION_NAME, self.promotion_name.as_deref())
			.finish()
	}
}

/// Content was shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
	pub content_type: String,
	pub item_id: String,
}

impl Share {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_CONTENT_TYPE, self.content_type.as_str())
			.set(param::PARAM_ITEM_ID, self.item_id.as_str())
			.finish()
	}
}

/// A user signed up for an account. The method signifies how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUp {
	pub method: String,
}

impl SignUp {
	pub fn new(method: impl Into<String>) -> Self {
		Self {
			method: method.into(),
		}
	}

	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_METHOD, self.method.as_str())
			.finish()
	}
}

/// Virtual goods were sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendVirtualCurrency {
	pub item_name: String,
	pub value: Option<Money>,
}

impl SpendVirtualCurrency {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new().set(param::PARAM_ITEM_NAME, self.item_name.as_str()),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// The user unlocked an achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockAchievement {
	pub achievement_id: String,
}

impl UnlockAchievement {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_ACHIEVEMENT_ID, self.achievement_id.as_str())
			.finish()
	}
}

/// A user viewed their cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewCart {
	pub items: Option<Vec<Item>>,
	pub value: Option<Money>,
}

impl ViewCart {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new().set_opt(param::PARAM_ITEMS, self.items.as_deref().map(items_value)),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// A user viewed an item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewItem {
	pub items: Option<Vec<Item>>,
	pub value: Option<Money>,
}

impl ViewItem {
	fn params(&self) -> ParameterMap {
		with_money(
			Params::new().set_opt(param::PARAM_ITEMS, self.items.as_deref().map(items_value)),
			self.value.as_ref(),
		)
		.finish()
	}
}

/// A user saw a list of items or offerings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewItemList {
	pub items: Option<Vec<Item>>,
	pub item_list_id: Option<String>,
	pub item_list_name: Option<String>,
}

impl ViewItemList {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set_opt(param::PARAM_ITEMS, self.items.as_deref().map(items_value))
			.set_opt(param::PARAM_ITEM_LIST_ID, self.item_list_id.as_deref())
			.set_opt(param::PARAM_ITEM_LIST_NAME, self.item_list_name.as_deref())
			.finish()
	}
}

/// A promotion was shown to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPromotion {
	pub creative_name: String,
	pub creative_slot: String,
	pub items: Option<Vec<Item>>,
	pub location_id: Option<String>,
	pub promotion_id: Option<String>,
	pub promotion_name: Option<String>,
}

impl ViewPromotion {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_CREATIVE_NAME, self.creative_name.as_str())
			.set(param::PARAM_CREATIVE_SLOT, self.creative_slot.as_str())
			.set_opt(param::PARAM_ITEMS, self.items.as_deref().map(items_value))
			.set_opt(param::PARAM_LOCATION_ID, self.location_id.as_deref())
			.set_opt(param::PARAM_PROMOTION_ID, self.promotion_id.as_deref())
			.set_opt(param::PARAM_PROMOTION_NAME, self.promotion_name.as_deref())
			.finish()
	}
}

/// The user was shown search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSearchResults {
	pub search_term: String,
}

impl ViewSearchResults {
	fn params(&self) -> ParameterMap {
		Params::new()
			.set(param::PARAM_SEARCH_TERM, self.search_term.as_str())
			.finish()
	}
}

/// Every event shape the dispatch layer can log.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	/// A user-defined event with an arbitrary encoded payload.
	Custom(CustomEvent),
	AdImpression(AdImpression),
	AddPaymentInfo(AddPaymentInfo),
	AddShippingInfo(AddShippingInfo),
	AddToCart(AddToCart),
	AddToWishList(AddToWishList),
	/// The app became active. Parameterless.
	AppOpen,
	BeginCheckout(BeginCheckout),
	CampaignDetails(CampaignDetails),
	EarnVirtualCurrency(EarnVirtualCurrency),
	GenerateLead(GenerateLead),
	JoinGroup(JoinGroup),
	LevelEnd(LevelEnd),
	LevelStart(LevelStart),
	LevelUp(LevelUp),
	/// A user logged in. Parameterless.
	Login,
	PostScore(PostScore),
	Purchase(Purchase),
	Refund(Refund),
	RemoveFromCart(RemoveFromCart),
	ScreenView(ScreenView),
	Search(Search),
	SelectContent(SelectContent),
	SelectItem(SelectItem),
	SelectPromotion(SelectPromotion),
	Share(Share),
	SignUp(SignUp),
	SpendVirtualCurrency(SpendVirtualCurrency),
	/// On-boarding started. Parameterless.
	TutorialBegin,
	/// On-boarding completed. Parameterless.
	TutorialComplete,
	UnlockAchievement(UnlockAchievement),
	ViewCart(ViewCart),
	ViewItem(ViewItem),
	ViewItemList(ViewItemList),
	ViewPromotion(ViewPromotion),
	ViewSearchResults(ViewSearchResults),
}

impl Event {
	/// The wire name this event is logged under.
	pub fn name(&self) -> &str {
		match self {
			Event::Custom(custom) => custom.name(),
			Event::AdImpression(_) => param::EVENT_AD_IMPRESSION,
			Event::AddPaymentInfo(_) => param::EVENT_ADD_PAYMENT_INFO,
			Event::AddShippingInfo(_) => param::EVENT_ADD_SHIPPING_INFO,
			Event::AddToCart(_) => param::EVENT_ADD_TO_CART,
			Event::AddToWishList(_) => param::EVENT_ADD_TO_WISHLIST,
			Event::AppOpen => param::EVENT_APP_OPEN,
			Event::BeginCheckout(_) => param::EVENT_BEGIN_CHECKOUT,
			Event::CampaignDetails(_) => param::EVENT_CAMPAIGN_DETAILS,
			Event::EarnVirtualCurrency(_) => param::EVENT_EARN_VIRTUAL_CURRENCY,
			Event::GenerateLead(_) => param::EVENT_GENERATE_LEAD,
			Event::JoinGroup(_) => param::EVENT_JOIN_GROUP,
			Event::LevelEnd(_) => param::EVENT_LEVEL_END,
			Event::LevelStart(_) => param::EVENT_LEVEL_START,
			Event::LevelUp(_) => param::EVENT_LEVEL_UP,
			Event::Login => param::EVENT_LOGIN,
			Event::PostScore(_) => param::EVENT_POST_SCORE,
			Event::Purchase(_) => param::EVENT_PURCHASE,
			Event::Refund(_) => param::EVENT_REFUND,
			Event::RemoveFromCart(_) => param::EVENT_REMOVE_FROM_CART,
			Event::ScreenView(_) => param::EVENT_SCREEN_VIEW,
			Event::Search(_) => param::EVENT_SEARCH,
			Event::SelectContent(_) => param::EVENT_SELECT_CONTENT,
			Event::SelectItem(_) => param::EVENT_SELECT_ITEM,
			Event::SelectPromotion(_) => param::EVENT_SELECT_PROMOTION,
			Event::Share(_) => param::EVENT_SHARE,
			Event::SignUp(_) => param::EVENT_SIGN_UP,
			Event::SpendVirtualCurrency(_) => param::EVENT_SPEND_VIRTUAL_CURRENCY,
			Event::TutorialBegin => param::EVENT_TUTORIAL_BEGIN,
			Event::TutorialComplete => param::EVENT_TUTORIAL_COMPLETE,
			Event::UnlockAchievement(_) => param::EVENT_UNLOCK_ACHIEVEMENT,
			Event::ViewCart(_) => param::EVENT_VIEW_CART,
			Event::ViewItem(_) => param::EVENT_VIEW_ITEM,
			Event::ViewItemList(_) => param::EVENT_VIEW_ITEM_LIST,
			Event::ViewPromotion(_) => param::EVENT_VIEW_PROMOTION,
			Event::ViewSearchResults(_) => param::EVENT_VIEW_SEARCH_RESULTS,
		}
	}

	/// The encoded parameter map, or `None` for parameterless events.
	pub fn parameters(&self) -> Option<ParameterMap> {
		match self {
			Event::Custom(custom) => Some(custom.parameters().clone()),
			Event::AdImpression(e) => Some(e.params()),
			Event::AddPaymentInfo(e) => Some(e.params()),
			Event::AddShippingInfo(e) => Some(e.params()),
			Event::AddToCart(e) => Some(e.params()),
			Event::AddToWishList(e) => Some(e.params()),
			Event::AppOpen => None,
			Event::BeginCheckout(e) => Some(e.params()),
			Event::CampaignDetails(e) => Some(e.params()),
			Event::EarnVirtualCurrency(e) => Some(e.params()),
			Event::GenerateLead(e) => Some(e.params()),
			Event::JoinGroup(e) => Some(e.params()),
			Event::LevelEnd(e) => Some(e.params()),
			Event::LevelStart(e) => Some(e.params()),
			Event::LevelUp(e) => Some(e.params()),
			Event::Login => None,
			Event::PostScore(e) => Some(e.params()),
			Event::Purchase(e) => Some(e.params()),
			Event::Refund(e) => Some(e.params()),
			Event::RemoveFromCart(e) => Some(e.params()),
			Event::ScreenView(e) => Some(e.params()),
			Event::Search(e) => Some(e.params()),
			Event::SelectContent(e) => Some(e.params()),
			Event::SelectItem(e) => Some(e.params()),
			Event::SelectPromotion(e) => Some(e.params()),
			Event::Share(e) => Some(e.params()),
			Event::SignUp(e) => Some(e.params()),
			Event::SpendVirtualCurrency(e) => Some(e.params()),
			Event::TutorialBegin => None,
			Event::TutorialComplete => None,
			Event::UnlockAchievement(e) => Some(e.params()),
			Event::ViewCart(e) => Some(e.params()),
			Event::ViewItem(e) => Some(e.params()),
			Event::ViewItemList(e) => Some(e.params()),
			Event::ViewPromotion(e) => Some(e.params()),
			Event::ViewSearchResults(e) => Some(e.params()),
		}
	}
}

impl From<CustomEvent> for Event {
	fn from(event: CustomEvent) -> Self {
		Event::Custom(event)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_view_maps_both_fields() {
		let event = Event::ScreenView(ScreenView::new("ViewController", "SearchResults"));
		assert_eq!(event.name(), "screen_view");

		let params = event.parameters().unwrap();
		assert_eq!(
			params["screen_class"],
			ParamValue::String("ViewController".to_string())
		);
		assert_eq!(
			params["screen_name"],
			ParamValue::String("SearchResults".to_string())
		);
	}

	#[test]
	fn sign_up_carries_method() {
		let event = Event::SignUp(SignUp::new("Google"));
		assert_eq!(event.name(), "sign_up");
		assert_eq!(
			event.parameters().unwrap()["method"],
			ParamValue::String("Google".to_string())
		);
	}

	#[test]
	fn add_to_cart_flattens_money_and_items() {
		let event = Event::AddToCart(AddToCart {
			value: Some(Money::new(123.0, "EUR")),
			items: vec![Item::with_id("123")],
		});

		assert_eq!(event.name(), "add_to_cart");
		let params = event.parameters().unwrap();
		assert_eq!(params["value"], ParamValue::Double(123.0));
		assert_eq!(params["currency"], ParamValue::String("EUR".to_string()));

		let items = params["items"].as_array().unwrap();
		let first = items[0].as_dictionary().unwrap();
		assert_eq!(first["item_id"], ParamValue::String("123".to_string()));
	}

	#[test]
	fn parameterless_events_have_no_map() {
		for event in [
			Event::AppOpen,
			Event::Login,
			Event::TutorialBegin,
			Event::TutorialComplete,
		] {
			assert!(event.parameters().is_none(), "{}", event.name());
		}
	}

	#[test]
	fn absent_optionals_are_omitted_from_fixed_events() {
		let event = Event::AdImpression(AdImpression::default());
		assert_eq!(event.parameters().unwrap().len(), 0);

		let event = Event::ViewPromotion(ViewPromotion {
			creative_name: "Summer Sale".to_string(),
			creative_slot: "Banner".to_string(),
			items: None,
			location_id: None,
			promotion_id: None,
			promotion_name: None,
		});
		let params = event.parameters().unwrap();
		assert_eq!(params.len(), 2);
		assert_eq!(
			params["creative_name"],
			ParamValue::String("Summer Sale".to_string())
		);
		assert_eq!(
			params["creative_slot"],
			ParamValue::String("Banner".to_string())
		);
	}

	#[test]
	fn level_up_uses_the_level_parameter_key() {
		let event = Event::LevelUp(LevelUp {
			level: 9,
			character: None,
		});
		let params = event.parameters().unwrap();
		assert_eq!(params["level"], ParamValue::Int(9));
		assert!(!params.contains_key("level_up"));
	}

	#[test]
	fn purchase_dates_render_as_strings() {
		use chrono::TimeZone;

		let event = Event::Purchase(Purchase {
			affiliation: None,
			coupon: None,
			value: Some(Money::new(9.99, "USD")),
			end_date: None,
			item_id: None,
			items: vec![],
			shipping: 0.0,
			start_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
			tax: None,
			transaction_id: Some("t_42".to_string()),
		});

		let params = event.parameters().unwrap();
		assert!(matches!(params["start_date"], ParamValue::String(_)));
		assert!(!params.contains_key("end_date"));
		assert_eq!(params["value"], ParamValue::Double(9.99));
		assert_eq!(
			params["transaction_id"],
			ParamValue::String("t_42".to_string())
		);
	}
}
