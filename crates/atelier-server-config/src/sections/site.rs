// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Public site configuration: canonical URL and default locale.

use atelier_common_i18n::{resolve_locale, Locale};
use serde::Deserialize;

/// Used when no site URL is configured (local development).
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
	/// Public base URL without trailing slash. Used to build checkout
	/// return URLs.
	pub url: String,
	/// Locale prepended to unprefixed paths.
	pub default_locale: Locale,
}

impl Default for SiteConfig {
	fn default() -> Self {
		SiteConfigLayer::default().finalize()
	}
}

impl SiteConfig {
	/// Absolute URL for a locale-prefixed page, e.g. `page_url(Fr, "checkout/success")`.
	pub fn page_url(&self, locale: Locale, page: &str) -> String {
		let page = page.trim_start_matches('/');
		if page.is_empty() {
			format!("{}/{}", self.url, locale)
		} else {
			format!("{}/{}/{}", self.url, locale, page)
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub default_locale: Option<String>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: SiteConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
	}

	pub fn finalize(self) -> SiteConfig {
		let url = self.url.unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
		SiteConfig {
			url: url.trim_end_matches('/').to_string(),
			default_locale: resolve_locale(self.default_locale.as_deref(), Locale::DEFAULT.code()),
		}
	}
}
