// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use atelier_common_i18n::Locale;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A navigable watch category (collection).
///
/// `slug` is unique within one result set; `sort_order` ascending is the
/// display order.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct WatchCategory {
	pub id: String,
	pub slug: String,
	pub label_en: String,
	pub label_fr: String,
	pub sort_order: i64,
	pub image_url: Option<String>,
	/// Starting price shown on category cards, in the store currency.
	pub display_price: Option<f64>,
}

impl WatchCategory {
	pub fn label(&self, locale: Locale) -> &str {
		match locale {
			Locale::En => &self.label_en,
			Locale::Fr => &self.label_fr,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn label_follows_locale() {
		let category = WatchCategory {
			id: "c1".to_string(),
			slug: "diver".to_string(),
			label_en: "Diver".to_string(),
			label_fr: "Plongée".to_string(),
			sort_order: 1,
			image_url: None,
			display_price: Some(1450.0),
		};
		assert_eq!(category.label(Locale::En), "Diver");
		assert_eq!(category.label(Locale::Fr), "Plongée");
	}
}
