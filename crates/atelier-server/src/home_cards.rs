// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Home page style cards: the two promotional tiles ("build your own" and
//! "shop") editable through the `home_style_cards` site setting.

use std::sync::Arc;

use atelier_common_i18n::Locale;
use serde::{Deserialize, Serialize};

use crate::db::SettingsStore;

pub const HOME_STYLE_CARDS_KEY: &str = "home_style_cards";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeStyleCard {
	pub title_en: String,
	pub title_fr: String,
	#[serde(default)]
	pub price: Option<f64>,
	#[serde(default)]
	pub image_url: Option<String>,
}

impl HomeStyleCard {
	pub fn title(&self, locale: Locale) -> &str {
		match locale {
			Locale::En => &self.title_en,
			Locale::Fr => &self.title_fr,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBuildCard {
	#[serde(flatten)]
	pub card: HomeStyleCard,
	pub description_en: String,
	pub description_fr: String,
}

impl CustomBuildCard {
	pub fn description(&self, locale: Locale) -> &str {
		match locale {
			Locale::En => &self.description_en,
			Locale::Fr => &self.description_fr,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeStyleCards {
	pub custom_build: CustomBuildCard,
	pub shop: HomeStyleCard,
}

impl Default for HomeStyleCards {
	fn default() -> Self {
		Self {
			custom_build: CustomBuildCard {
				card: HomeStyleCard {
					title_en: "Build your own watch".to_string(),
					title_fr: "Créez votre montre".to_string(),
					price: None,
					image_url: None,
				},
				description_en: "Pick a case, dial, hands and strap. We assemble it by hand.".to_string(),
				description_fr: "Choisissez le boîtier, le cadran, les aiguilles et le bracelet. Nous l'assemblons à la main.".to_string(),
			},
			shop: HomeStyleCard {
				title_en: "Shop ready-to-wear".to_string(),
				title_fr: "Boutique prêt-à-porter".to_string(),
				price: None,
				image_url: None,
			},
		}
	}
}

#[derive(Clone)]
pub struct HomeCardAccessor {
	store: Arc<dyn SettingsStore>,
}

impl HomeCardAccessor {
	pub fn new(store: Arc<dyn SettingsStore>) -> Self {
		Self { store }
	}

	/// The stored cards, or [`HomeStyleCards::default`] when the setting is
	/// absent, unreadable or of the wrong shape.
	#[tracing::instrument(skip(self))]
	pub async fn load(&self) -> HomeStyleCards {
		let value = match self.store.get_setting(HOME_STYLE_CARDS_KEY).await {
			Ok(Some(value)) => value,
			Ok(None) => return HomeStyleCards::default(),
			Err(e) => {
				tracing::warn!(error = %e, "failed to read home style cards, using defaults");
				return HomeStyleCards::default();
			}
		};

		serde_json::from_value(value).unwrap_or_else(|e| {
			tracing::warn!(error = %e, "home style cards setting is malformed, using defaults");
			HomeStyleCards::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::db::SiteSettingsRepository;
	use atelier_server_db::testing::{create_site_settings_table, create_test_pool};
	use serde_json::json;

	async fn setup() -> (SiteSettingsRepository, HomeCardAccessor) {
		let pool = create_test_pool().await;
		create_site_settings_table(&pool).await;
		let repo = SiteSettingsRepository::new(pool);
		let accessor = HomeCardAccessor::new(Arc::new(repo.clone()));
		(repo, accessor)
	}

	#[tokio::test]
	async fn absent_setting_yields_defaults() {
		let (_, accessor) = setup().await;
		assert_eq!(accessor.load().await, HomeStyleCards::default());
	}

	#[tokio::test]
	async fn stored_cards_are_decoded() {
		let (repo, accessor) = setup().await;
		repo.put_setting(
			HOME_STYLE_CARDS_KEY,
			&json!({
				"custom_build": {
					"title_en": "Make it yours",
					"title_fr": "À votre image",
					"price": 1890.0,
					"image_url": "https://cdn.atelier.example/custom.jpg",
					"description_en": "Every part, your call.",
					"description_fr": "Chaque pièce, votre choix."
				},
				"shop": { "title_en": "Shop", "title_fr": "Boutique" }
			}),
		)
		.await
		.unwrap();

		let cards = accessor.load().await;
		assert_eq!(cards.custom_build.card.title(Locale::Fr), "À votre image");
		assert_eq!(cards.custom_build.card.price, Some(1890.0));
		assert_eq!(cards.custom_build.description(Locale::En), "Every part, your call.");
		assert_eq!(cards.shop.title(Locale::En), "Shop");
		assert_eq!(cards.shop.price, None);
	}

	#[tokio::test]
	async fn wrong_shape_yields_defaults() {
		let (repo, accessor) = setup().await;
		repo.put_setting(HOME_STYLE_CARDS_KEY, &json!({ "shop": "not a card" }))
			.await
			.unwrap();
		assert_eq!(accessor.load().await, HomeStyleCards::default());
	}

	#[tokio::test]
	async fn missing_table_yields_defaults() {
		let pool = create_test_pool().await;
		let accessor = HomeCardAccessor::new(Arc::new(SiteSettingsRepository::new(pool)));
		assert_eq!(accessor.load().await, HomeStyleCards::default());
	}

	#[test]
	fn serialized_custom_card_is_flat() {
		let value = serde_json::to_value(HomeStyleCards::default()).unwrap();
		assert!(value["custom_build"]["title_en"].is_string());
		assert!(value["custom_build"]["description_fr"].is_string());
	}
}
