// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page shells for the presentation tier.
//!
//! Each page endpoint validates its locale segment, resolves the dictionary
//! and returns navigation, content and footer as one JSON document. An
//! unsupported locale is a 404 before anything else is assembled.

use atelier_common_i18n::{
	dictionary, CustomBuildLabels, FooterLabels, HomeLabels, Locale, ShopLabels,
};
use serde::Serialize;

use crate::db::WatchCategory;
use crate::error::ServerError;
use crate::home_cards::{CustomBuildCard, HomeStyleCard};

/// Parse a locale route segment; anything unsupported is not found.
pub fn resolve_page_locale(raw: &str) -> Result<Locale, ServerError> {
	raw.parse()
		.map_err(|_| ServerError::NotFound(format!("locale '{raw}'")))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
	pub key: &'static str,
	pub label: &'static str,
	pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
	pub links: Vec<NavLink>,
	/// The same page in the other language.
	pub alternate: NavLink,
}

/// Build the navigation for `locale`. `page_path` is the current page below
/// the locale prefix (`""`, `"/shop"`, ...), so the language switch keeps the
/// visitor on the same page.
pub fn navigation(locale: Locale, page_path: &str) -> Navigation {
	let code = locale.code();
	let other = Locale::ALL
		.into_iter()
		.find(|l| *l != locale)
		.unwrap_or(Locale::DEFAULT);

	let mut links = Vec::new();
	let mut alternate = None;
	for (key, label) in dictionary(locale).nav.entries() {
		let href = match key {
			"home" => format!("/{code}"),
			"shop" => format!("/{code}/shop"),
			"custom_build" => format!("/{code}/custom"),
			"cart" => format!("/{code}/shop#cart"),
			"switch_language" => format!("/{}{page_path}", other.code()),
			section => format!("/{code}#{section}"),
		};
		let link = NavLink { key, label, href };
		if key == "switch_language" {
			alternate = Some(link);
		} else {
			links.push(link);
		}
	}

	Navigation {
		links,
		alternate: alternate.unwrap_or_else(|| NavLink {
			key: "switch_language",
			label: other.info().native_name,
			href: format!("/{}{page_path}", other.code()),
		}),
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
	pub id: String,
	pub slug: String,
	pub label: String,
	pub image_url: Option<String>,
	pub display_price: Option<f64>,
	pub href: String,
}

impl CategoryCard {
	pub fn new(category: &WatchCategory, locale: Locale) -> Self {
		Self {
			id: category.id.clone(),
			slug: category.slug.clone(),
			label: category.label(locale).to_string(),
			image_url: category.image_url.clone(),
			display_price: category.display_price,
			href: format!("/{}/shop/{}", locale.code(), category.slug),
		}
	}

	pub fn list(categories: &[WatchCategory], locale: Locale) -> Vec<Self> {
		categories.iter().map(|c| Self::new(c, locale)).collect()
	}
}

/// A home style card with its text in one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromoCard {
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub price: Option<f64>,
	pub image_url: Option<String>,
	pub href: String,
}

impl PromoCard {
	pub fn shop(card: &HomeStyleCard, locale: Locale) -> Self {
		Self {
			title: card.title(locale).to_string(),
			description: None,
			price: card.price,
			image_url: card.image_url.clone(),
			href: format!("/{}/shop", locale.code()),
		}
	}

	pub fn custom_build(card: &CustomBuildCard, locale: Locale) -> Self {
		Self {
			title: card.card.title(locale).to_string(),
			description: Some(card.description(locale).to_string()),
			price: card.card.price,
			image_url: card.card.image_url.clone(),
			href: format!("/{}/custom", locale.code()),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutOutcome {
	Success,
	Cancel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageContent {
	Home {
		labels: &'static HomeLabels,
		categories: Vec<CategoryCard>,
		custom_build: PromoCard,
		shop: PromoCard,
	},
	Shop {
		labels: &'static ShopLabels,
		categories: Vec<CategoryCard>,
	},
	Category {
		labels: &'static ShopLabels,
		category: CategoryCard,
	},
	CustomBuild {
		labels: &'static CustomBuildLabels,
		card: PromoCard,
		categories: Vec<CategoryCard>,
	},
	Checkout {
		outcome: CheckoutOutcome,
		title: &'static str,
		message: &'static str,
		continue_href: String,
	},
}

/// Everything a page needs: locale, navigation, content and footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageShell {
	pub locale: Locale,
	pub html_lang: &'static str,
	pub navigation: Navigation,
	pub content: PageContent,
	pub footer: &'static FooterLabels,
}

impl PageShell {
	pub fn new(locale: Locale, page_path: &str, content: PageContent) -> Self {
		Self {
			locale,
			html_lang: locale.info().html_lang,
			navigation: navigation(locale, page_path),
			content,
			footer: &dictionary(locale).footer,
		}
	}
}
