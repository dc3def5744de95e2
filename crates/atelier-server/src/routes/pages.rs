// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-prefixed page shells.

use atelier_common_i18n::dictionary;
use axum::{
	extract::{Path, State},
	Json,
};

use crate::{
	api::AppState,
	error::ServerError,
	layout::{
		resolve_page_locale, CategoryCard, CheckoutOutcome, PageContent, PageShell, PromoCard,
	},
};

/// GET /{locale} - Home page: categories and the two style cards.
pub async fn home(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Json<PageShell>, ServerError> {
	let locale = resolve_page_locale(&locale)?;
	let (categories, cards) = tokio::join!(state.catalog.categories(), state.home_cards.load());

	let content = PageContent::Home {
		labels: &dictionary(locale).home,
		categories: CategoryCard::list(&categories, locale),
		custom_build: PromoCard::custom_build(&cards.custom_build, locale),
		shop: PromoCard::shop(&cards.shop, locale),
	};
	Ok(Json(PageShell::new(locale, "", content)))
}

/// GET /{locale}/shop - All categories.
pub async fn shop(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Json<PageShell>, ServerError> {
	let locale = resolve_page_locale(&locale)?;
	let categories = state.catalog.categories().await;

	let content = PageContent::Shop {
		labels: &dictionary(locale).shop,
		categories: CategoryCard::list(&categories, locale),
	};
	Ok(Json(PageShell::new(locale, "/shop", content)))
}

/// GET /{locale}/shop/{slug} - One category.
pub async fn category(
	State(state): State<AppState>,
	Path((locale, slug)): Path<(String, String)>,
) -> Result<Json<PageShell>, ServerError> {
	let locale = resolve_page_locale(&locale)?;
	let category = state
		.catalog
		.category(&slug)
		.await
		.ok_or_else(|| ServerError::NotFound(format!("category '{slug}'")))?;

	let content = PageContent::Category {
		labels: &dictionary(locale).shop,
		category: CategoryCard::new(&category, locale),
	};
	Ok(Json(PageShell::new(locale, &format!("/shop/{slug}"), content)))
}

/// GET /{locale}/custom - Build-your-own-watch entry point.
pub async fn custom_build(
	State(state): State<AppState>,
	Path(locale): Path<String>,
) -> Result<Json<PageShell>, ServerError> {
	let locale = resolve_page_locale(&locale)?;
	let (categories, cards) = tokio::join!(state.catalog.categories(), state.home_cards.load());

	let content = PageContent::CustomBuild {
		labels: &dictionary(locale).custom_build,
		card: PromoCard::custom_build(&cards.custom_build, locale),
		categories: CategoryCard::list(&categories, locale),
	};
	Ok(Json(PageShell::new(locale, "/custom", content)))
}

/// GET /{locale}/checkout/success
pub async fn checkout_success(Path(locale): Path<String>) -> Result<Json<PageShell>, ServerError> {
	checkout_status(&locale, CheckoutOutcome::Success)
}

/// GET /{locale}/checkout/cancel
pub async fn checkout_cancel(Path(locale): Path<String>) -> Result<Json<PageShell>, ServerError> {
	checkout_status(&locale, CheckoutOutcome::Cancel)
}

fn checkout_status(raw: &str, outcome: CheckoutOutcome) -> Result<Json<PageShell>, ServerError> {
	let locale = resolve_page_locale(raw)?;
	let labels = &dictionary(locale).checkout;
	let (title, message, page_path) = match outcome {
		CheckoutOutcome::Success => (labels.success_title, labels.success_message, "/checkout/success"),
		CheckoutOutcome::Cancel => (labels.cancel_title, labels.cancel_message, "/checkout/cancel"),
	};

	let content = PageContent::Checkout {
		outcome,
		title,
		message,
		continue_href: format!("/{}/shop", locale.code()),
	};
	Ok(Json(PageShell::new(locale, page_path, content)))
}
