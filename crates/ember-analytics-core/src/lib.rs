// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Ember analytics SDK.
//!
//! This crate defines the event vocabulary and the parameter encoding
//! engine, with no transport or runtime concerns:
//!
//! - [`ParamValue`] / [`ParameterMap`]: the closed value model parameter
//!   payloads are expressed in.
//! - [`encode`]: turns any `Serialize` record into a [`ParameterMap`],
//!   omitting absent optionals and rejecting shapes the backend cannot
//!   represent.
//! - [`Event`]: the fixed event catalog, plus [`CustomEvent`] /
//!   [`EventPayload`] for user-defined events with validated names.
//!
//! The dispatch layer lives in `ember-analytics`.

pub mod custom;
pub mod encode;
pub mod event;
pub mod item;
pub mod name;
pub mod param;
pub mod value;

pub use custom::{CustomEvent, CustomEventError, EventPayload};
pub use encode::{encode, EncodeError};
pub use event::{
	AdImpression, AddPaymentInfo, AddShippingInfo, AddToCart, AddToWishList, BeginCheckout,
	CampaignDetails, EarnVirtualCurrency, Event, GenerateLead, JoinGroup, LevelEnd, LevelStart,
	LevelUp, PostScore, Purchase, Refund, RemoveFromCart, ScreenView, Search, SelectContent,
	SelectItem, SelectPromotion, Share, SignUp, SpendVirtualCurrency, UnlockAchievement, ViewCart,
	ViewItem, ViewItemList, ViewPromotion, ViewSearchResults,
};
pub use item::{Item, Money};
pub use name::{validate_event_name, NameError, MAX_EVENT_NAME_LEN, RESERVED_PREFIXES};
pub use value::{ParamValue, ParameterMap, Params};
