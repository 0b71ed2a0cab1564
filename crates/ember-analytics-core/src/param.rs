// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire names for the fixed event catalog.
//!
//! These mirror the upstream analytics vocabulary: snake_case event names
//! and parameter keys the backend aggregates on. Custom events use their
//! own validated names instead.

// Event names.
pub const EVENT_AD_IMPRESSION: &str = "ad_impression";
pub const EVENT_ADD_PAYMENT_INFO: &str = "add_payment_info";
pub const EVENT_ADD_SHIPPING_INFO: &str = "add_shipping_info";
pub const EVENT_ADD_TO_CART: &str = "add_to_cart";
pub const EVENT_ADD_TO_WISHLIST: &str = "add_to_wishlist";
pub const EVENT_APP_OPEN: &str = "app_open";
pub const EVENT_BEGIN_CHECKOUT: &str = "begin_checkout";
pub const EVENT_CAMPAIGN_DETAILS: &str = "campaign_details";
pub const EVENT_EARN_VIRTUAL_CURRENCY: &str = "earn_virtual_currency";
pub const EVENT_GENERATE_LEAD: &str = "generate_lead";
pub const EVENT_JOIN_GROUP: &str = "join_group";
pub const EVENT_LEVEL_END: &str = "level_end";
pub const EVENT_LEVEL_START: &str = "level_start";
pub const EVENT_LEVEL_UP: &str = "level_up";
pub const EVENT_LOGIN: &str = "login";
pub const EVENT_POST_SCORE: &str = "post_score";
pub const EVENT_PURCHASE: &str = "purchase";
pub const EVENT_REFUND: &str = "refund";
pub const EVENT_REMOVE_FROM_CART: &str = "remove_from_cart";
pub const EVENT_SCREEN_VIEW: &str = "screen_view";
pub const EVENT_SEARCH: &str = "search";
pub const EVENT_SELECT_CONTENT: &str = "select_content";
pub const EVENT_SELECT_ITEM: &str = "select_item";
pub const EVENT_SELECT_PROMOTION: &str = "select_promotion";
pub const EVENT_SHARE: &str = "share";
pub const EVENT_SIGN_UP: &str = "sign_up";
pub const EVENT_SPEND_VIRTUAL_CURRENCY: &str = "spend_virtual_currency";
pub const EVENT_TUTORIAL_BEGIN: &str = "tutorial_begin";
pub const EVENT_TUTORIAL_COMPLETE: &str = "tutorial_complete";
pub const EVENT_UNLOCK_ACHIEVEMENT: &str = "unlock_achievement";
pub const EVENT_VIEW_CART: &str = "view_cart";
pub const EVENT_VIEW_ITEM: &str = "view_item";
pub const EVENT_VIEW_ITEM_LIST: &str = "view_item_list";
pub const EVENT_VIEW_PROMOTION: &str = "view_promotion";
pub const EVENT_VIEW_SEARCH_RESULTS: &str = "view_search_results";

// Parameter keys.
pub const PARAM_ACHIEVEMENT_ID: &str = "achievement_id";
pub const PARAM_ACLID: &str = "aclid";
pub const PARAM_AD_FORMAT: &str = "ad_format";
pub const PARAM_AD_PLATFORM: &str = "ad_platform";
pub const PARAM_AD_SOURCE: &str = "ad_source";
pub const PARAM_AD_UNIT_NAME: &str = "ad_unit_name";
pub const PARAM_AFFILIATION: &str = "affiliation";
pub const PARAM_CAMPAIGN: &str = "campaign";
pub const PARAM_CAMPAIGN_ID: &str = "campaign_id";
pub const PARAM_CHARACTER: &str = "character";
pub const PARAM_CONTENT: &str = "content";
pub const PARAM_CONTENT_TYPE: &str = "content_type";
pub const PARAM_COUPON: &str = "coupon";
pub const PARAM_CP1: &str = "cp1";
pub const PARAM_CREATIVE_FORMAT: &str = "creative_format";
pub const PARAM_CREATIVE_NAME: &str = "creative_name";
pub const PARAM_CREATIVE_SLOT: &str = "creative_slot";
pub const PARAM_CURRENCY: &str = "currency";
pub const PARAM_DESTINATION: &str = "destination";
pub const PARAM_END_DATE: &str = "end_date";
pub const PARAM_GROUP_ID: &str = "group_id";
pub const PARAM_ITEM_BRAND: &str = "item_brand";
pub const PARAM_ITEM_CATEGORY: &str = "item_category";
pub const PARAM_ITEM_ID: &str = "item_id";
pub const PARAM_ITEM_LIST_ID: &str = "item_list_id";
pub const PARAM_ITEM_LIST_NAME: &str = "item_list_name";
pub const PARAM_ITEM_NAME: &str = "item_name";
pub const PARAM_ITEM_VARIANT: &str = "item_variant";
pub const PARAM_ITEMS: &str = "items";
pub const PARAM_LEVEL: &str = "level";
pub const PARAM_LEVEL_NAME: &str = "level_name";
pub const PARAM_LOCATION_ID: &str = "location_id";
pub const PARAM_MARKETING_TACTIC: &str = "marketing_tactic";
pub const PARAM_MEDIUM: &str = "medium";
pub const PARAM_METHOD: &str = "method";
pub const PARAM_NUMBER_OF_NIGHTS: &str = "number_of_nights";
pub const PARAM_NUMBER_OF_PASSENGERS: &str = "number_of_passengers";
pub const PARAM_NUMBER_OF_ROOMS: &str = "number_of_rooms";
pub const PARAM_ORIGIN: &str = "origin";
pub const PARAM_PAYMENT_TYPE: &str = "payment_type";
pub const PARAM_PRICE: &str = "price";
pub const PARAM_PROMOTION_ID: &str = "promotion_id";
pub const PARAM_PROMOTION_NAME: &str = "promotion_name";
pub const PARAM_SCORE: &str = "score";
pub const PARAM_SCREEN_CLASS: &str = "screen_class";
pub const PARAM_SCREEN_NAME: &str = "screen_name";
pub const PARAM_SEARCH_TERM: &str = "search_term";
pub const PARAM_SHIPPING: &str = "shipping";
pub const PARAM_SHIPPING_TIER: &str = "shipping_tier";
pub const PARAM_SOURCE: &str = "source";
pub const PARAM_SOURCE_PLATFORM: &str = "source_platform";
pub const PARAM_START_DATE: &str = "start_date";
pub const PARAM_SUCCESS: &str = "success";
pub const PARAM_TAX: &str = "tax";
pub const PARAM_TERM: &str = "term";
pub const PARAM_TRANSACTION_ID: &str = "transaction_id";
pub const PARAM_TRAVEL_CLASS: &str = "travel_class";
pub const PARAM_VALUE: &str = "value";
pub const PARAM_VIRTUAL_CURRENCY_NAME: &str = "virtual_currency_name";
