// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog configuration: the static category list served when the catalog
//! store is empty or unreachable.

use serde::Deserialize;

/// One entry of the fallback category list. Ids and sort order are derived
/// from the entry's position when the fallback is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FallbackCategory {
	pub slug: String,
	pub label_en: String,
	pub label_fr: String,
}

impl FallbackCategory {
	pub fn new(slug: &str, label_en: &str, label_fr: &str) -> Self {
		Self {
			slug: slug.to_string(),
			label_en: label_en.to_string(),
			label_fr: label_fr.to_string(),
		}
	}
}

/// The studio's collections, in display order.
pub fn default_fallback() -> Vec<FallbackCategory> {
	vec![
		FallbackCategory::new("dress", "Dress", "Habillées"),
		FallbackCategory::new("diver", "Diver", "Plongée"),
		FallbackCategory::new("pilot", "Pilot", "Aviateur"),
		FallbackCategory::new("field", "Field", "Terrain"),
		FallbackCategory::new("chronograph", "Chronograph", "Chronographe"),
	]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
	pub fallback: Vec<FallbackCategory>,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			fallback: default_fallback(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfigLayer {
	#[serde(default)]
	pub fallback: Option<Vec<FallbackCategory>>,
}

impl CatalogConfigLayer {
	pub fn merge(&mut self, other: CatalogConfigLayer) {
		if other.fallback.is_some() {
			self.fallback = other.fallback;
		}
	}

	pub fn finalize(self) -> CatalogConfig {
		CatalogConfig {
			fallback: self.fallback.unwrap_or_else(default_fallback),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_fallback_has_unique_slugs() {
		let config = CatalogConfig::default();
		assert_eq!(config.fallback.len(), 5);
		let mut slugs: Vec<_> = config.fallback.iter().map(|c| c.slug.as_str()).collect();
		slugs.sort_unstable();
		slugs.dedup();
		assert_eq!(slugs.len(), 5);
	}

	#[test]
	fn test_toml_override_replaces_whole_list() {
		let layer: CatalogConfigLayer = toml::from_str(
			r#"
[[fallback]]
slug = "tourbillon"
label_en = "Tourbillon"
label_fr = "Tourbillon"
"#,
		)
		.unwrap();
		let config = layer.finalize();
		assert_eq!(
			config.fallback,
			vec![FallbackCategory::new("tourbillon", "Tourbillon", "Tourbillon")]
		);
	}
}
